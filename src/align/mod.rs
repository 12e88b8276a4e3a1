//! Tree-against-tree alignment by antichain/path decomposition
//!
//! Two recurrences cooperate:
//! - [`path_score`] aligns a subtree of one tree against a path segment of
//!   the other.
//! - [`alignment_score`] walks a path down one tree and, at each branch
//!   point, selects an antichain in the other, recursing with the roles of
//!   the two trees swapped.
//!
//! [`Aligner`] runs both orientations from the roots and reports the
//! smaller of the two.

mod alignment;
#[cfg(test)]
mod brute_force;
mod memo;
mod path;
mod reference;

pub use alignment::alignment_score;
pub use memo::{AnchoredMemo, MemoSet, MemoTable};
pub use path::path_score;
pub use reference::reference_score;

use crate::model::{NodeId, RootedTree, Score, WeightTable};
use crate::{Error, Result};
use serde::Serialize;

/// Which tree plays which part in one evaluation
///
/// `weights` is indexed `(antichain node, path node)` and `transposed` is its
/// transpose, so a swap only exchanges references.
#[derive(Clone, Copy, Debug)]
pub struct Roles<'a> {
    pub antichain: &'a RootedTree,
    pub path: &'a RootedTree,
    pub weights: &'a WeightTable,
    pub transposed: &'a WeightTable,
}

impl<'a> Roles<'a> {
    pub fn new(
        antichain: &'a RootedTree,
        path: &'a RootedTree,
        weights: &'a WeightTable,
        transposed: &'a WeightTable,
    ) -> Self {
        Roles {
            antichain,
            path,
            weights,
            transposed,
        }
    }

    /// Exchange the trees and the weight tables
    pub fn swap(self) -> Self {
        Roles {
            antichain: self.path,
            path: self.antichain,
            weights: self.transposed,
            transposed: self.weights,
        }
    }
}

/// Assignment of the two input trees to the antichain role
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// First tree selects antichains, second tree supplies paths
    Forward,
    /// Second tree selects antichains, first tree supplies paths
    Reverse,
}

/// Scores of both orientations and the reported minimum
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub score: Score,
    pub forward: Score,
    pub reverse: Score,
}

impl Alignment {
    pub fn new(forward: Score, reverse: Score) -> Self {
        Alignment {
            score: forward.min(reverse),
            forward,
            reverse,
        }
    }
}

/// Memoized evaluation of both orientations for one pair of trees
pub struct Aligner<'a> {
    a: &'a RootedTree,
    b: &'a RootedTree,
    weights: &'a WeightTable,
    transposed: WeightTable,
    forward: MemoSet,
    reverse: MemoSet,
}

impl<'a> Aligner<'a> {
    /// Prepare memo storage for aligning `a` (rows) with `b` (columns)
    pub fn new(a: &'a RootedTree, b: &'a RootedTree, weights: &'a WeightTable) -> Result<Self> {
        check_shape(a, b, weights)?;
        log::debug!(
            "aligning trees of {} nodes (height {}) and {} nodes (height {})",
            a.len(),
            a.height(),
            b.len(),
            b.height()
        );

        Ok(Aligner {
            a,
            b,
            weights,
            transposed: weights.transpose(),
            forward: MemoSet::new(a.len(), b.len()),
            reverse: MemoSet::new(b.len(), a.len()),
        })
    }

    /// AlignmentScore for one orientation
    ///
    /// For [`Orientation::Forward`], `u` is a node of the first tree and `v`
    /// of the second; for [`Orientation::Reverse`] the other way round.
    pub fn score(&mut self, orientation: Orientation, u: NodeId, v: NodeId) -> Result<Score> {
        let (antichain, path) = match orientation {
            Orientation::Forward => (self.a, self.b),
            Orientation::Reverse => (self.b, self.a),
        };
        check_node(u, antichain)?;
        check_node(v, path)?;
        Ok(self.evaluate(orientation, u, v))
    }

    fn evaluate(&mut self, orientation: Orientation, u: NodeId, v: NodeId) -> Score {
        let forward = Roles::new(self.a, self.b, self.weights, &self.transposed);
        match orientation {
            Orientation::Forward => {
                alignment_score(forward, &mut self.forward, &mut self.reverse, u, v)
            }
            Orientation::Reverse => {
                alignment_score(forward.swap(), &mut self.reverse, &mut self.forward, u, v)
            }
        }
    }

    /// Evaluate both orientations from the roots
    pub fn run(&mut self) -> Alignment {
        let root = RootedTree::ROOT;
        let forward = self.evaluate(Orientation::Forward, root, root);
        log::debug!("forward orientation scored {}", forward);
        let reverse = self.evaluate(Orientation::Reverse, root, root);
        log::debug!("reverse orientation scored {}", reverse);

        log::debug!(
            "memo cells filled: forward {}, reverse {}; path anchors: forward {}, reverse {}",
            self.forward.alignment.filled(),
            self.reverse.alignment.filled(),
            self.forward.paths.allocated(),
            self.reverse.paths.allocated()
        );
        Alignment::new(forward, reverse)
    }
}

/// Align two trees under `weights` in one call
pub fn solve(a: &RootedTree, b: &RootedTree, weights: &WeightTable) -> Result<Alignment> {
    Ok(Aligner::new(a, b, weights)?.run())
}

/// Run `f` on a worker thread with a `stack_size`-byte stack
///
/// The recurrences recurse once per tree level and once per role swap, so
/// deep unbalanced trees need more than the default main-thread stack.
pub fn run_with_stack<'env, T, F>(stack_size: usize, f: F) -> Result<T>
where
    T: Send + 'env,
    F: FnOnce() -> T + Send + 'env,
{
    std::thread::scope(|scope| {
        let handle = std::thread::Builder::new()
            .name("treealign-worker".into())
            .stack_size(stack_size)
            .spawn_scoped(scope, f)
            .map_err(|e| Error::Worker(format!("failed to spawn worker: {}", e)))?;
        handle
            .join()
            .map_err(|_| Error::Worker("alignment worker panicked".into()))
    })
}

fn check_node(node: NodeId, tree: &RootedTree) -> Result<()> {
    if node >= tree.len() {
        return Err(Error::NodeOutOfRange {
            node,
            len: tree.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_shape(a: &RootedTree, b: &RootedTree, weights: &WeightTable) -> Result<()> {
    let expected = (a.len(), b.len());
    if weights.shape() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            found: weights.shape(),
        });
    }
    Ok(())
}
