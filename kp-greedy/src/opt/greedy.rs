use std::cmp::Reverse;

use itertools::Itertools;
use kp_core::entities::{Dataset, Item, Solution};
use kp_core::util::assertions;
use log::trace;
use ordered_float::OrderedFloat;

/// Order in which the greedy heuristic considers the items: descending value density.
/// Items with equal ratios keep their original relative order.
pub fn ratio_order(items: &[Item]) -> Vec<usize> {
    (0..items.len())
        .sorted_unstable_by_key(|&i| (Reverse(OrderedFloat(items[i].ratio())), i))
        .collect_vec()
}

/// Selects items in [`ratio_order`], taking every item that still fits in the remaining capacity.
/// Items that do not fit are skipped for good, there is no backtracking.
/// The returned selection refers to the original order of `items`.
pub fn select(capacity: u64, items: &[Item]) -> Solution {
    let mut solution = Solution::empty(items.len());

    for idx in ratio_order(items) {
        let item = &items[idx];
        // never overflows: total_weight <= capacity
        if item.weight() <= capacity - solution.total_weight {
            solution.selected[idx] = true;
            solution.total_weight += item.weight();
            solution.total_value += u128::from(item.value());
            trace!(
                "[GREEDY] took item {idx} (ratio {:.3}), {}/{capacity} used",
                item.ratio(),
                solution.total_weight
            );
        }
    }

    solution
}

/// Solves a dataset with [`select`]
pub fn solve(dataset: &Dataset) -> Solution {
    let solution = select(dataset.capacity, &dataset.items);
    debug_assert!(assertions::solution_is_consistent(dataset, &solution));
    solution
}
