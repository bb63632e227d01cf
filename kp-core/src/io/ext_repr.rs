use std::str::FromStr;

use anyhow::{Context, Error, Result};
use log::debug;

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtItem {
    pub value: u64,
    pub weight: u64,
}

/// External representation of a [`Dataset`](crate::entities::Dataset).
///
/// In text form a dataset is a sequence of whitespace-delimited non-negative integers:
/// the number of items `n`, the capacity, followed by `n` pairs of `value weight`.
/// Anything after the last pair is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtDataset {
    pub capacity: u64,
    pub items: Vec<ExtItem>,
}

impl FromStr for ExtDataset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace().enumerate();
        let mut next = |expected: &str| -> Result<u64> {
            let (pos, token) = tokens
                .next()
                .with_context(|| format!("unexpected end of input, expected {expected}"))?;
            token.parse::<u64>().with_context(|| {
                format!("token #{pos} ({token:?}) is not a valid {expected}")
            })
        };

        let n_items = next("item count")?;
        let n_items = usize::try_from(n_items)
            .with_context(|| format!("item count {n_items} does not fit in memory"))?;
        let capacity = next("capacity")?;

        let mut items = vec![];
        for _ in 0..n_items {
            let value = next("item value")?;
            let weight = next("item weight")?;
            items.push(ExtItem { value, weight });
        }

        let n_trailing = tokens.count();
        if n_trailing > 0 {
            debug!("ignoring {n_trailing} trailing tokens after {n_items} items");
        }

        Ok(ExtDataset { capacity, items })
    }
}
