//! Vector index implementations

pub mod flat;

pub use flat::{FlatIndexFactory, FlatL2Index};
