use serde::{Deserialize, Serialize};

/// Configuration of a batch run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Solve the datasets on a worker pool instead of one after the other.
    /// The report is identical either way, only the order of the log lines differs.
    #[serde(default)]
    pub parallel: bool,
    /// Number of threads in the worker pool. If undefined, one per logical core
    #[serde(default)]
    pub n_workers: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            n_workers: None,
        }
    }
}
