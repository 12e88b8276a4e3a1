//! Exhaustive search over one-to-one, ancestry-preserving node matchings
//!
//! A matching pairs nodes of the two trees so that for any two pairs
//! `(x1, y1)` and `(x2, y2)`, `x1` is an ancestor of `x2` exactly when `y1`
//! is an ancestor of `y2`. Exponential; trees of up to 6 nodes only.

use crate::model::{NodeId, RootedTree, Score, WeightTable};

/// Highest total weight over all matchings (the empty matching scores 0)
pub fn best_matching(a: &RootedTree, b: &RootedTree, weights: &WeightTable) -> Score {
    let search = Search {
        above_a: ancestry(a),
        above_b: ancestry(b),
        pairs: (0..a.len())
            .flat_map(|x| (0..b.len()).map(move |y| (x, y)))
            .collect(),
        weights,
    };
    let mut chosen = Vec::new();
    search.extend(0, &mut chosen, 0)
}

struct Search<'w> {
    above_a: Vec<Vec<bool>>,
    above_b: Vec<Vec<bool>>,
    pairs: Vec<(NodeId, NodeId)>,
    weights: &'w WeightTable,
}

impl Search<'_> {
    fn extend(&self, next: usize, chosen: &mut Vec<(NodeId, NodeId)>, total: Score) -> Score {
        let mut best = total;
        for (i, &(x, y)) in self.pairs.iter().enumerate().skip(next) {
            if chosen.iter().all(|&(cx, cy)| self.compatible((cx, cy), (x, y))) {
                chosen.push((x, y));
                best = best.max(self.extend(i + 1, chosen, total + self.weights.get(x, y)));
                chosen.pop();
            }
        }
        best
    }

    fn compatible(&self, (x1, y1): (NodeId, NodeId), (x2, y2): (NodeId, NodeId)) -> bool {
        x1 != x2
            && y1 != y2
            && self.above_a[x1][x2] == self.above_b[y1][y2]
            && self.above_a[x2][x1] == self.above_b[y2][y1]
    }
}

/// `m[x][y]` is true when `x` is a proper ancestor of `y`
fn ancestry(tree: &RootedTree) -> Vec<Vec<bool>> {
    let mut above = vec![vec![false; tree.len()]; tree.len()];
    for y in 0..tree.len() {
        let mut current = tree.parent(y);
        while let Some(x) = current {
            above[x][y] = true;
            current = tree.parent(x);
        }
    }
    above
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_tree(n: usize) -> RootedTree {
        let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
        RootedTree::from_edges(n, &edges).unwrap()
    }

    #[test]
    fn test_single_pair() {
        let a = RootedTree::singleton();
        let w = WeightTable::filled(1, 1, 17);
        assert_eq!(best_matching(&a, &a, &w), 17);
    }

    #[test]
    fn test_paths_match_by_depth() {
        for (n1, n2) in [(2, 2), (3, 3), (2, 4), (4, 3)] {
            let w = WeightTable::from_fn(n1, n2, |x, y| if x == y { 1 } else { 0 });
            assert_eq!(best_matching(&path_tree(n1), &path_tree(n2), &w), n1.min(n2) as Score);
        }
    }

    #[test]
    fn test_star_leaves_cannot_map_under_each_other() {
        // Root to root, then two leaves to the two leaves of b
        let a = RootedTree::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let b = RootedTree::from_edges(3, &[(0, 1), (0, 2)]).unwrap();
        assert_eq!(best_matching(&a, &b, &WeightTable::filled(4, 3, 1)), 3);

        // Siblings in a cannot land on an ancestor/descendant pair in b
        let path = path_tree(3);
        let star = RootedTree::from_edges(3, &[(0, 1), (0, 2)]).unwrap();
        assert_eq!(best_matching(&star, &path, &WeightTable::filled(3, 3, 1)), 2);
    }

    #[test]
    fn test_negative_weights_are_skipped() {
        let a = path_tree(2);
        let w = WeightTable::new(2, 2, vec![-4, -1, -2, 3]).unwrap();
        assert_eq!(best_matching(&a, &a, &w), 3);
    }
}
