use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

use crate::open::OpenSet;
use crate::pool::NodePool;
use crate::visited::VisitedIndex;

// ---------------------------------------------------------------------------
// SearchContext
// ---------------------------------------------------------------------------

/// Scratch state for one search at a time.
///
/// `SearchContext` owns the node pool, frontier and visited set. Every
/// search clears them on entry and leaves their allocations in place, so
/// repeated queries on the same context stop allocating once warmed up.
/// Searches that must run concurrently need separate contexts; see
/// [`ContextPool`].
#[derive(Debug, Default)]
pub struct SearchContext {
    pub(crate) pool: NodePool,
    pub(crate) open: OpenSet,
    pub(crate) visited: VisitedIndex,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the node pool for searches touching about `nodes` coordinates.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            pool: NodePool::with_capacity(nodes),
            open: OpenSet::new(),
            visited: VisitedIndex::new(),
        }
    }

    /// Clear all scratch state before a search.
    pub(crate) fn reset(&mut self) {
        self.pool.reset_all();
        self.open.clear();
        self.visited.clear();
    }

    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    pub fn open(&self) -> &OpenSet {
        &self.open
    }

    pub fn visited(&self) -> &VisitedIndex {
        &self.visited
    }
}

// ---------------------------------------------------------------------------
// ContextPool
// ---------------------------------------------------------------------------

/// Thread-safe stock of [`SearchContext`]s.
///
/// [`checkout`](Self::checkout) hands out an idle context (or a fresh one
/// when none is idle); dropping the returned guard puts it back.
#[derive(Debug, Default)]
pub struct ContextPool {
    idle: Mutex<Vec<SearchContext>>,
}

impl ContextPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a context for the lifetime of the guard.
    pub fn checkout(&self) -> PooledContext<'_> {
        let ctx = self.lock().pop().unwrap_or_default();
        PooledContext { owner: self, ctx }
    }

    /// Contexts currently waiting in the pool.
    pub fn idle_count(&self) -> usize {
        self.lock().len()
    }

    // Pushes and pops are atomic; a poisoned Vec is still consistent.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SearchContext>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A [`SearchContext`] checked out of a [`ContextPool`].
#[derive(Debug)]
pub struct PooledContext<'a> {
    owner: &'a ContextPool,
    ctx: SearchContext,
}

impl Deref for PooledContext<'_> {
    type Target = SearchContext;

    fn deref(&self) -> &SearchContext {
        &self.ctx
    }
}

impl DerefMut for PooledContext<'_> {
    fn deref_mut(&mut self) -> &mut SearchContext {
        &mut self.ctx
    }
}

impl Drop for PooledContext<'_> {
    fn drop(&mut self) {
        let ctx = std::mem::take(&mut self.ctx);
        self.owner.lock().push(ctx);
    }
}
