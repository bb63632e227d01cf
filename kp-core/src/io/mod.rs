/// External (textual) representation of a dataset
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

#[doc(inline)]
pub use import::import;
