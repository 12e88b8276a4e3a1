//! Rooted tree built from an undirected edge list

use crate::{Error, Result};

/// Index of a node inside one tree
pub type NodeId = usize;

/// An immutable tree rooted at node 0
///
/// Edges are oriented away from the root when the tree is built, so every
/// node except the root has exactly one parent and the children lists
/// partition the remaining nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootedTree {
    parent: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
}

impl RootedTree {
    /// The root is always node 0
    pub const ROOT: NodeId = 0;

    /// Orient an undirected edge list outward from node 0
    ///
    /// Fails unless the edges form a single tree spanning `0..n`.
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidTree("tree must have at least one node".into()));
        }
        if edges.len() != n - 1 {
            return Err(Error::InvalidTree(format!(
                "{} nodes need {} edges, got {}",
                n,
                n - 1,
                edges.len()
            )));
        }

        let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        for &(p, q) in edges {
            if p >= n || q >= n {
                return Err(Error::InvalidTree(format!(
                    "edge {}-{} references a node outside 0..{}",
                    p, q, n
                )));
            }
            if p == q {
                return Err(Error::InvalidTree(format!("self-loop on node {}", p)));
            }
            adjacency[p].push(q);
            adjacency[q].push(p);
        }

        let mut parent = vec![None; n];
        let mut children = vec![Vec::new(); n];
        let mut visited = vec![false; n];
        let mut stack = vec![Self::ROOT];
        visited[Self::ROOT] = true;

        while let Some(x) = stack.pop() {
            for &y in &adjacency[x] {
                if Some(y) == parent[x] {
                    continue;
                }
                if visited[y] {
                    return Err(Error::InvalidTree(format!(
                        "edge {}-{} closes a cycle",
                        x, y
                    )));
                }
                visited[y] = true;
                parent[y] = Some(x);
                children[x].push(y);
                stack.push(y);
            }
        }

        if let Some(orphan) = visited.iter().position(|seen| !seen) {
            return Err(Error::InvalidTree(format!(
                "node {} is not reachable from the root",
                orphan
            )));
        }

        Ok(RootedTree { parent, children })
    }

    /// A single-node tree
    pub fn singleton() -> Self {
        RootedTree {
            parent: vec![None],
            children: vec![Vec::new()],
        }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent[node]
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.children[node]
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.children[node].is_empty()
    }

    /// Length of the longest root-to-leaf path, in edges
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(Self::ROOT, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(self.children[node].iter().map(|&c| (c, depth + 1)));
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orients_edges_from_root() {
        // Edges listed child-first on purpose
        let tree = RootedTree::from_edges(4, &[(1, 0), (2, 1), (0, 3)]).unwrap();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.parent(3), Some(0));

        let mut root_children = tree.children(0).to_vec();
        root_children.sort();
        assert_eq!(root_children, vec![1, 3]);
        assert!(tree.is_leaf(2));
        assert!(!tree.is_leaf(1));
    }

    #[test]
    fn test_height() {
        let tree = RootedTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (0, 4)]).unwrap();
        assert_eq!(tree.height(), 3);
        assert_eq!(RootedTree::singleton().height(), 0);
    }

    #[test]
    fn test_singleton() {
        let tree = RootedTree::from_edges(1, &[]).unwrap();
        assert_eq!(tree, RootedTree::singleton());
        assert!(tree.is_leaf(RootedTree::ROOT));
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_rejects_zero_nodes() {
        assert!(matches!(
            RootedTree::from_edges(0, &[]),
            Err(Error::InvalidTree(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_edge_count() {
        assert!(RootedTree::from_edges(3, &[(0, 1)]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_node() {
        assert!(RootedTree::from_edges(3, &[(0, 1), (1, 3)]).is_err());
    }

    #[test]
    fn test_rejects_self_loop() {
        assert!(RootedTree::from_edges(2, &[(1, 1)]).is_err());
    }

    #[test]
    fn test_rejects_cycle_and_disconnection() {
        // 0-1-2-0 triangle leaves node 3 unreachable
        let err = RootedTree::from_edges(4, &[(0, 1), (1, 2), (2, 0)]).unwrap_err();
        assert!(err.to_string().contains("cycle"));

        // Duplicate edge is a two-node cycle
        assert!(RootedTree::from_edges(3, &[(0, 1), (1, 0)]).is_err());
    }
}
