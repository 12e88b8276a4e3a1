//! # treealign
//!
//! Exact dynamic programming for aligning two rooted trees under a
//! node-by-node weight table.
//!
//! ## Core Concepts
//!
//! - **Trees**: rooted at node 0, built from undirected edge lists
//! - **Weights**: a dense `|A| × |B|` score table and its transpose
//! - **PathScore**: a subtree of one tree against a path segment of the other
//! - **AlignmentScore**: a path in one tree against an antichain in the
//!   other, swapping roles at every matched branch point
//! - **Orientations**: the recurrence is run with each tree in the antichain
//!   role; the reported score is the smaller result
//!
//! ## Example
//!
//! ```
//! use treealign::{solve, RootedTree, WeightTable};
//!
//! let a = RootedTree::from_edges(4, &[(0, 1), (0, 2), (0, 3)])?;
//! let b = RootedTree::from_edges(3, &[(0, 1), (0, 2)])?;
//! let weights = WeightTable::filled(4, 3, 1);
//!
//! let alignment = solve(&a, &b, &weights)?;
//! assert_eq!(alignment.score, 3);
//! # Ok::<(), treealign::Error>(())
//! ```

pub mod align;
pub mod input;
pub mod model;

mod error;

pub use align::{reference_score, run_with_stack, solve, Aligner, Alignment, Orientation};
pub use error::{Error, Result};
pub use model::{NodeId, RootedTree, Score, WeightTable};
