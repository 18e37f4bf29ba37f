/// Iteration budget used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Tunables for a single search.
///
/// With the `serde` feature, missing fields deserialize to their defaults,
/// so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Maximum number of frontier nodes expanded before giving up. Bounds
    /// work, not wall-clock time. Zero means only the start node is seeded.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
