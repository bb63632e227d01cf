use itertools::Itertools;
use log::debug;

use crate::entities::{Dataset, Item};
use crate::io::ext_repr::ExtDataset;

/// Imports a dataset into the library, preserving the item order of the external representation
pub fn import(ext_dataset: &ExtDataset) -> Dataset {
    let items = ext_dataset
        .items
        .iter()
        .map(|ext_item| Item::new(ext_item.value, ext_item.weight))
        .collect_vec();

    let dataset = Dataset::new(ext_dataset.capacity, items);

    debug!(
        "imported dataset with {} items (total weight {}) and capacity {}",
        dataset.n_items(),
        dataset.total_weight(),
        dataset.capacity
    );

    dataset
}
