//! Unmemoized evaluation of the alignment recurrences
//!
//! Exponential in the tree sizes; used to cross-check [`super::Aligner`] on
//! small inputs.

use super::{Alignment, Roles};
use crate::model::{NodeId, RootedTree, Score, WeightTable};
use crate::Result;

/// Evaluate both orientations from the roots without any caching
pub fn reference_score(a: &RootedTree, b: &RootedTree, weights: &WeightTable) -> Result<Alignment> {
    super::check_shape(a, b, weights)?;
    let transposed = weights.transpose();
    let roles = Roles::new(a, b, weights, &transposed);

    let forward = alignment(roles, RootedTree::ROOT, RootedTree::ROOT);
    let reverse = alignment(roles.swap(), RootedTree::ROOT, RootedTree::ROOT);
    Ok(Alignment::new(forward, reverse))
}

fn path(roles: Roles<'_>, x: NodeId, anchor: NodeId, v: NodeId) -> Score {
    let tree_step = roles.weights.get(x, v)
        + roles
            .antichain
            .children(x)
            .iter()
            .map(|&y| path(roles, y, anchor, v))
            .sum::<Score>();

    if v == anchor {
        return tree_step;
    }
    match roles.path.parent(v) {
        Some(up) if up != anchor => {
            tree_step.max(roles.weights.get(x, v) + path(roles, x, anchor, up))
        }
        _ => tree_step,
    }
}

fn alignment(roles: Roles<'_>, u: NodeId, v: NodeId) -> Score {
    select_path(roles, u, v, v)
}

fn select_path(roles: Roles<'_>, u: NodeId, v: NodeId, x: NodeId) -> Score {
    roles
        .path
        .children(x)
        .iter()
        .map(|&vp| select_antichain(roles, u, v, u, vp).max(select_path(roles, u, v, vp)))
        .fold(0, Score::max)
}

fn select_antichain(roles: Roles<'_>, u: NodeId, v: NodeId, y: NodeId, vp: NodeId) -> Score {
    if roles.path.is_leaf(vp) {
        return path(roles, u, v, vp);
    }

    let mut best = 0;
    for &up in roles.antichain.children(y) {
        let sibling_cost: Score = roles
            .antichain
            .children(y)
            .iter()
            .filter(|&&z| z != up)
            .map(|&z| path(roles, z, v, vp))
            .sum();
        best = best.max(sibling_cost + alignment(roles.swap(), vp, up));
        best = best.max(select_antichain(roles, u, v, up, vp));
    }
    best
}
