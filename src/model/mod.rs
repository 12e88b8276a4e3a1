//! Core data model types for treealign

mod tree;
mod weights;

pub use tree::{NodeId, RootedTree};
pub use weights::{Score, WeightTable};
