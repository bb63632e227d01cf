/// Subset of a [`Dataset`](crate::entities::Dataset)'s items, together with its totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Sum of the selected values, wide enough to never overflow
    pub total_value: u128,
    /// Never exceeds the capacity of the dataset
    pub total_weight: u64,
    /// `selected[i]` is true if item `i` of the dataset (in its original order) is part of the solution
    pub selected: Vec<bool>,
}

impl Solution {
    /// A solution for `n_items` items without any item selected
    pub fn empty(n_items: usize) -> Self {
        Solution {
            total_value: 0,
            total_weight: 0,
            selected: vec![false; n_items],
        }
    }

    pub fn n_selected(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    /// Indices of the selected items, ascending
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(i, _)| i)
    }
}
