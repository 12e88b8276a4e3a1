//! PathScore: a subtree of one tree against a path segment of the other

use super::memo::MemoTable;
use super::Roles;
use crate::model::{NodeId, Score};

/// Best score of aligning the antichain-role subtree at `x` against the
/// path-role segment hanging below `anchor` and ending at `v`
///
/// `memo` must be the table scoped to `anchor`. Either the whole subtree of
/// `x` is pinned to `v` (tree step) or `x` also claims `v` and the walk moves
/// one node up toward the anchor (path step). The anchor itself is never
/// part of the segment.
pub fn path_score(
    roles: Roles<'_>,
    memo: &mut MemoTable,
    x: NodeId,
    anchor: NodeId,
    v: NodeId,
) -> Score {
    if let Some(score) = memo.get(x, v) {
        return score;
    }

    let weight = roles.weights.get(x, v);
    let mut tree_step = weight;
    for &y in roles.antichain.children(x) {
        tree_step += path_score(roles, memo, y, anchor, v);
    }

    let score = match roles.path.parent(v) {
        Some(up) if v != anchor && up != anchor => {
            let path_step = weight + path_score(roles, memo, x, anchor, up);
            tree_step.max(path_step)
        }
        _ => tree_step,
    };

    memo.set(x, v, score);
    score
}
