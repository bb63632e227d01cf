use log::error;

use crate::entities::{Dataset, Solution};

//Various checks to verify correctness of solutions
//Used in debug_assert!() blocks

/// Checks that the solution describes a feasible subset of the dataset and that its totals add up
pub fn solution_is_consistent(dataset: &Dataset, solution: &Solution) -> bool {
    if solution.selected.len() != dataset.n_items() {
        error!(
            "selection mask has {} entries, dataset has {} items",
            solution.selected.len(),
            dataset.n_items()
        );
        return false;
    }

    let (value, weight) = solution
        .selected_indices()
        .map(|i| &dataset.items[i])
        .fold((0u128, 0u128), |(v, w), item| {
            (v + u128::from(item.value()), w + u128::from(item.weight()))
        });

    if value != solution.total_value || weight != u128::from(solution.total_weight) {
        error!(
            "solution totals ({}, {}) do not match the selected items ({value}, {weight})",
            solution.total_value, solution.total_weight
        );
        return false;
    }

    solution_fits(dataset, solution)
}

pub fn solution_fits(dataset: &Dataset, solution: &Solution) -> bool {
    solution.total_weight <= dataset.capacity
}
