use std::time::Duration;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target was reached with a path of `steps` moves.
    Found { steps: usize },
    /// The iteration budget ran out with nodes still on the frontier.
    BudgetExhausted,
    /// Every reachable coordinate was expanded without meeting the target.
    FrontierExhausted,
}

impl SearchOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub outcome: SearchOutcome,
    /// Nodes popped and fully expanded. The expansion that discovers the
    /// target is not counted.
    pub iterations: usize,
    /// Nodes discovered and pushed onto the frontier, excluding the start.
    pub nodes_used: usize,
    pub elapsed: Duration,
}

/// Receives [`SearchStats`] when a search finishes.
///
/// Not called for the trivial start == target case, which does no search.
pub trait SearchObserver {
    fn on_search_finished(&mut self, stats: &SearchStats);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {
    #[inline]
    fn on_search_finished(&mut self, _stats: &SearchStats) {}
}

impl<F: FnMut(&SearchStats)> SearchObserver for F {
    fn on_search_finished(&mut self, stats: &SearchStats) {
        (self)(stats)
    }
}
