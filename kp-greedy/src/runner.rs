use std::path::Path;
use std::time::Instant;

use log::{debug, warn};

use crate::io;
use crate::opt::greedy;
use crate::report::DatasetResult;

/// Loads, solves and times a single dataset.
/// A dataset that cannot be loaded or contains no items results in [`DatasetResult::zero`].
pub fn run(source: &Path) -> DatasetResult {
    let id = source.display().to_string();
    let start = Instant::now();

    let dataset = match io::read_dataset(source) {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!("[RUN] {e:#}, reporting zero result");
            return DatasetResult::zero(id);
        }
    };
    if dataset.is_empty() {
        debug!("[RUN] {id} contains no items");
        return DatasetResult::zero(id);
    }

    let solution = greedy::solve(&dataset);
    let exec_time = start.elapsed().as_secs_f64();

    debug!(
        "[RUN] {id}: selected {}/{} items, value {}, weight {}/{} in {:.3}ms",
        solution.n_selected(),
        dataset.n_items(),
        solution.total_value,
        solution.total_weight,
        dataset.capacity,
        exec_time * 1000.0
    );

    DatasetResult::new(id, &solution, exec_time)
}
