/// Candidate for selection, characterized by its value and the capacity it consumes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
    value: u64,
    weight: u64,
    /// Value density, `value / weight`. Zero for weightless items.
    ratio: f64,
}

impl Item {
    pub fn new(value: u64, weight: u64) -> Self {
        // weightless items get no priority, they are ranked last
        let ratio = match weight {
            0 => 0.0,
            w => value as f64 / w as f64,
        };
        Item {
            value,
            weight,
            ratio,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}
