use steppath_core::Point3;

/// Weight applied to horizontal displacement before squaring.
pub const HORIZONTAL_SCALE: i64 = 11;

/// Estimated remaining cost from `a` to `b`:
/// `121·dx² + 121·dy² + dz²`.
///
/// Not admissible (it can overestimate), so returned paths are not
/// guaranteed shortest. Integer-only for reproducible ordering; saturates at
/// `i64::MAX` rather than wrapping on huge displacements.
#[inline]
pub fn heuristic(a: Point3, b: Point3) -> i64 {
    let dx = (i64::from(a.x) - i64::from(b.x)) * HORIZONTAL_SCALE;
    let dy = (i64::from(a.y) - i64::from(b.y)) * HORIZONTAL_SCALE;
    let dz = i64::from(a.z) - i64::from(b.z);
    dx.saturating_mul(dx)
        .saturating_add(dy.saturating_mul(dy))
        .saturating_add(dz.saturating_mul(dz))
}
