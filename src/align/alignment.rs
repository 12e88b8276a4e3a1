//! AlignmentScore: antichain selection in one tree against path selection in
//! the other, swapping roles at every matched branch point

use super::memo::MemoSet;
use super::path::path_score;
use super::Roles;
use crate::model::{NodeId, Score};

/// Best score of aligning the antichain-role subtree at `u` with the
/// path-role subtree at `v`
///
/// `own` holds the memo tables for `roles`; `swapped` those for
/// `roles.swap()`. A role-swapped call exchanges the two.
pub fn alignment_score(
    roles: Roles<'_>,
    own: &mut MemoSet,
    swapped: &mut MemoSet,
    u: NodeId,
    v: NodeId,
) -> Score {
    if let Some(score) = own.alignment.get(u, v) {
        return score;
    }

    let score = Walk {
        roles,
        own: &mut *own,
        swapped: &mut *swapped,
        u,
        v,
    }
    .select_path(v);

    own.alignment.set(u, v, score);
    score
}

/// State of one AlignmentScore evaluation rooted at `(u, v)`
struct Walk<'r, 'm> {
    roles: Roles<'r>,
    own: &'m mut MemoSet,
    swapped: &'m mut MemoSet,
    u: NodeId,
    v: NodeId,
}

impl Walk<'_, '_> {
    /// Choose how far the path descends below `x` and where it branches
    fn select_path(&mut self, x: NodeId) -> Score {
        let path = self.roles.path;
        let mut best = 0;
        for &vp in path.children(x) {
            best = best.max(self.select_antichain(self.u, vp));
            best = best.max(self.select_path(vp));
        }
        best
    }

    /// Pick an antichain below `y` to match against the branch point `vp`
    fn select_antichain(&mut self, y: NodeId, vp: NodeId) -> Score {
        if self.roles.path.is_leaf(vp) {
            return self.path_score(self.u, vp);
        }

        let antichain = self.roles.antichain;
        let siblings = antichain.children(y);

        // Every sibling not chosen is absorbed into the path ending at vp
        let absorbed: Vec<Score> = siblings.iter().map(|&z| self.path_score(z, vp)).collect();
        let total: Score = absorbed.iter().sum();

        let mut best = 0;
        for (&up, &own_cost) in siblings.iter().zip(&absorbed) {
            let matched = total - own_cost
                + alignment_score(self.roles.swap(), self.swapped, self.own, vp, up);
            let deferred = self.select_antichain(up, vp);
            best = best.max(matched).max(deferred);
        }
        best
    }

    fn path_score(&mut self, x: NodeId, target: NodeId) -> Score {
        path_score(self.roles, self.own.paths.table(self.v), x, self.v, target)
    }
}
