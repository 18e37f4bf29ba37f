use std::convert::Infallible;
use std::time::Instant;

use steppath_core::{Direction, Point3};

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::expander::Expansion;
use crate::heuristic::heuristic;
use crate::observer::{NoObserver, SearchObserver, SearchOutcome, SearchStats};
use crate::reconstruct::reconstruct;
use crate::traits::{MovementOracle, TryMovementOracle};

/// Find a path on a freshly allocated [`SearchContext`].
///
/// Convenient for one-off queries; hot callers should keep a context (or a
/// [`ContextPool`](crate::ContextPool)) around instead.
pub fn find_path<O: MovementOracle + ?Sized>(
    start: Point3,
    target: Point3,
    oracle: &O,
    settings: &O::Settings,
    config: &SearchConfig,
) -> Option<Vec<Direction>> {
    SearchContext::new().find_path(start, target, oracle, settings, config)
}

impl SearchContext {
    /// Compute a sequence of moves from `start` to `target`.
    ///
    /// Returns an empty path when `start == target` (the oracle is not
    /// consulted), the moves in order when the target is reached, or `None`
    /// when the iteration budget or the frontier runs out first.
    ///
    /// The frontier is ordered by `g + h` with [`heuristic`], ties going to
    /// the earliest discovered node. A coordinate is expanded at most once:
    /// the first route found to it is kept even if a cheaper one turns up
    /// later, so the result is not necessarily the shortest path.
    pub fn find_path<O: MovementOracle + ?Sized>(
        &mut self,
        start: Point3,
        target: Point3,
        oracle: &O,
        settings: &O::Settings,
        config: &SearchConfig,
    ) -> Option<Vec<Direction>> {
        self.find_path_observed(start, target, oracle, settings, config, &mut NoObserver)
    }

    /// Like [`find_path`](Self::find_path), reporting [`SearchStats`] to
    /// `observer` when the search ends.
    pub fn find_path_observed<O, Obs>(
        &mut self,
        start: Point3,
        target: Point3,
        oracle: &O,
        settings: &O::Settings,
        config: &SearchConfig,
        observer: &mut Obs,
    ) -> Option<Vec<Direction>>
    where
        O: MovementOracle + ?Sized,
        Obs: SearchObserver + ?Sized,
    {
        let r: Result<_, Infallible> =
            self.search(start, target, oracle, settings, config, observer);
        match r {
            Ok(path) => path,
            Err(never) => match never {},
        }
    }

    /// Like [`find_path`](Self::find_path) with a fallible oracle. The
    /// first oracle error aborts the search and is returned as is.
    pub fn try_find_path<O: TryMovementOracle + ?Sized>(
        &mut self,
        start: Point3,
        target: Point3,
        oracle: &O,
        settings: &O::Settings,
        config: &SearchConfig,
    ) -> Result<Option<Vec<Direction>>, O::Error> {
        self.search(start, target, oracle, settings, config, &mut NoObserver)
    }

    pub fn try_find_path_observed<O, Obs>(
        &mut self,
        start: Point3,
        target: Point3,
        oracle: &O,
        settings: &O::Settings,
        config: &SearchConfig,
        observer: &mut Obs,
    ) -> Result<Option<Vec<Direction>>, O::Error>
    where
        O: TryMovementOracle + ?Sized,
        Obs: SearchObserver + ?Sized,
    {
        self.search(start, target, oracle, settings, config, observer)
    }

    fn search<O, Obs>(
        &mut self,
        start: Point3,
        target: Point3,
        oracle: &O,
        settings: &O::Settings,
        config: &SearchConfig,
        observer: &mut Obs,
    ) -> Result<Option<Vec<Direction>>, O::Error>
    where
        O: TryMovementOracle + ?Sized,
        Obs: SearchObserver + ?Sized,
    {
        if start == target {
            return Ok(Some(Vec::new()));
        }
        let started = Instant::now();

        self.reset();
        let root = self.pool.allocate(None, Direction::North, 0, start);
        self.visited.add(start);
        self.open.push(root, heuristic(start, target));

        let mut iterations = 0;
        let mut nodes_used = 0;

        let (outcome, path) = 'search: loop {
            if iterations >= config.max_iterations {
                break 'search (SearchOutcome::BudgetExhausted, None);
            }
            let Some(current) = self.open.pop_min() else {
                break 'search (SearchOutcome::FrontierExhausted, None);
            };

            match self.expand(current, target, oracle, settings)? {
                Expansion::Reached(last) => {
                    let path = reconstruct(&self.pool, current, last);
                    let outcome = SearchOutcome::Found { steps: path.len() };
                    break 'search (outcome, Some(path));
                }
                Expansion::Expanded { discovered } => nodes_used += discovered,
            }
            iterations += 1;
        };

        let stats = SearchStats {
            outcome,
            iterations,
            nodes_used,
            elapsed: started.elapsed(),
        };
        match outcome {
            SearchOutcome::Found { steps } => log::debug!(
                "path {start} -> {target}: {steps} steps, iterations: {iterations}, nodes used: {nodes_used}, took {:?}",
                stats.elapsed
            ),
            _ => log::debug!(
                "no path {start} -> {target} ({outcome:?}), iterations: {iterations}, nodes used: {nodes_used}, took {:?}",
                stats.elapsed
            ),
        }
        observer.on_search_finished(&stats);

        Ok(path)
    }
}
