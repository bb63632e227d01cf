use crate::entities::Item;

/// A single benchmark instance: a weight budget and the items competing for it.
/// Items keep the order in which they were read, solutions refer to items by this order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Dataset {
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        Dataset { capacity, items }
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> u128 {
        self.items.iter().map(|i| u128::from(i.weight())).sum()
    }

    pub fn total_value(&self) -> u128 {
        self.items.iter().map(|i| u128::from(i.value())).sum()
    }
}
