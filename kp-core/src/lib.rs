//! Shared model of the ratio-greedy knapsack benchmark: items, datasets and solutions

/// Entities to model a capacity-constrained item selection problem
pub mod entities;

/// Reading datasets from their on-disk text format into this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
