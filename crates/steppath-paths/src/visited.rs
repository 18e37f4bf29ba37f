use std::collections::HashSet;

use steppath_core::Point3;

/// Coordinates already discovered by the current search.
///
/// Entries are never removed mid-search: once a coordinate is discovered it
/// is not examined again, even if a cheaper route to it turns up later.
#[derive(Debug, Default)]
pub struct VisitedIndex {
    seen: HashSet<Point3>,
}

impl VisitedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, pos: Point3) -> bool {
        self.seen.contains(&pos)
    }

    /// Mark `pos` as discovered. Returns `false` if it already was.
    #[inline]
    pub fn add(&mut self, pos: Point3) -> bool {
        self.seen.insert(pos)
    }

    /// Forget everything, keeping the allocation.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut v = VisitedIndex::new();
        assert!(v.add(Point3::new(1, 2, 3)));
        assert!(!v.add(Point3::new(1, 2, 3)));
        assert!(v.add(Point3::new(1, 2, 4)));
        assert_eq!(v.len(), 2);
        assert!(v.contains(Point3::new(1, 2, 4)));
        v.clear();
        assert!(v.is_empty());
        assert!(!v.contains(Point3::new(1, 2, 3)));
    }
}
