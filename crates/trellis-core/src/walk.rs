//! Flattening of a tree plus expansion state into drawable rows.
//!
//! The original rendering approach — recursive per-child components — is
//! replaced by a linear walker: a renderer iterates [`visible_rows`] from
//! top to bottom and draws one line per [`Row`], indenting by
//! [`Row::depth`]. This keeps traversal independent of any rendering layer
//! and testable on its own.

use crate::expansion::ExpansionState;
use crate::node::Node;

/// One drawable row: a node reference and its depth in the tree.
///
/// Root-level nodes have depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// The node to draw on this row.
    pub node: &'a Node,
    /// Nesting depth, for indentation.
    pub depth: usize,
}

/// Lazily flatten a tree into a depth-first, pre-order sequence of rows.
///
/// A node's children are included only if its id is in `expansion`;
/// root-level nodes are always included. The sequence is finite (bounded by
/// the total node count) and is recomputed fresh on every call — nothing is
/// incrementally maintained, so arbitrary expansion changes between calls
/// are always reflected correctly.
///
/// Precondition: the nodes form a finite tree rooted at `roots`. The walker
/// does not defend against cycles a caller might introduce through shared
/// mutation elsewhere; on a genuine cycle it will not terminate.
pub fn visible_rows<'a>(
    roots: &'a [Node],
    expansion: &'a ExpansionState,
) -> VisibleRows<'a> {
    VisibleRows {
        stack: vec![roots.iter()],
        expansion,
    }
}

/// Iterator returned by [`visible_rows`].
///
/// Holds one slice iterator per open level; depth is the stack height at the
/// time a node is yielded.
pub struct VisibleRows<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
    expansion: &'a ExpansionState,
}

impl<'a> Iterator for VisibleRows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    let depth = self.stack.len() - 1;
                    // Expansion is only consulted for branches; a leaf id
                    // someone toggled directly stays invisible here.
                    if !node.is_leaf() && self.expansion.is_expanded(node.id()) {
                        self.stack.push(node.children().iter());
                    }
                    return Some(Row { node, depth });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Vec<Node> {
        // A single chain A(B(C)), for collapse/persist scenarios.
        vec![Node::branch(
            "a",
            "A",
            vec![Node::branch("b", "B", vec![Node::leaf("c", "C")])],
        )]
    }

    fn ids(roots: &[Node], expansion: &ExpansionState) -> Vec<(String, usize)> {
        visible_rows(roots, expansion)
            .map(|row| (row.node.id().to_string(), row.depth))
            .collect()
    }

    #[test]
    fn collapsed_tree_shows_roots_only() {
        let roots = nested();
        let expansion = ExpansionState::new();
        assert_eq!(ids(&roots, &expansion), vec![("a".into(), 0)]);
    }

    #[test]
    fn multiple_roots_always_visible() {
        let roots = vec![
            Node::branch("a", "A", vec![Node::leaf("a1", "A1")]),
            Node::leaf("b", "B"),
            Node::branch("c", "C", vec![Node::leaf("c1", "C1")]),
        ];
        let expansion = ExpansionState::new();
        assert_eq!(
            ids(&roots, &expansion),
            vec![("a".into(), 0), ("b".into(), 0), ("c".into(), 0)]
        );
    }

    #[test]
    fn expansion_reveals_children_in_preorder() {
        let roots = vec![Node::branch(
            "root",
            "Root",
            vec![
                Node::branch("x", "X", vec![Node::leaf("x1", "X1")]),
                Node::leaf("y", "Y"),
            ],
        )];
        let mut expansion = ExpansionState::new();
        expansion.expand("root");
        expansion.expand("x");
        assert_eq!(
            ids(&roots, &expansion),
            vec![
                ("root".into(), 0),
                ("x".into(), 1),
                ("x1".into(), 2),
                ("y".into(), 1),
            ]
        );
    }

    #[test]
    fn unexpanded_branch_hides_descendants() {
        let roots = nested();
        let mut expansion = ExpansionState::new();
        expansion.expand("a");
        // b is visible but collapsed, so c must not appear.
        assert_eq!(
            ids(&roots, &expansion),
            vec![("a".into(), 0), ("b".into(), 1)]
        );
    }

    #[test]
    fn descendant_expansion_survives_parent_collapse() {
        let roots = nested();
        let mut expansion = ExpansionState::new();
        expansion.expand("a");
        expansion.expand("b");
        assert_eq!(
            ids(&roots, &expansion),
            vec![("a".into(), 0), ("b".into(), 1), ("c".into(), 2)]
        );
        expansion.collapse("a");
        assert_eq!(ids(&roots, &expansion), vec![("a".into(), 0)]);
        // Re-opening a resurfaces b's prior expansion unchanged.
        expansion.expand("a");
        assert_eq!(
            ids(&roots, &expansion),
            vec![("a".into(), 0), ("b".into(), 1), ("c".into(), 2)]
        );
    }

    #[test]
    fn expanded_leaf_id_has_no_effect() {
        let roots = nested();
        let mut expansion = ExpansionState::new();
        expansion.expand("a");
        expansion.expand("b");
        expansion.expand("c"); // c is a leaf
        assert_eq!(
            ids(&roots, &expansion),
            vec![("a".into(), 0), ("b".into(), 1), ("c".into(), 2)]
        );
    }

    #[test]
    fn stale_ids_are_ignored() {
        let roots = nested();
        let mut expansion = ExpansionState::new();
        expansion.expand("gone");
        expansion.expand("also-gone");
        assert_eq!(ids(&roots, &expansion), vec![("a".into(), 0)]);
    }

    #[test]
    fn walk_is_bounded_by_node_count() {
        let roots = nested();
        let mut expansion = ExpansionState::new();
        expansion.expand("a");
        expansion.expand("b");
        let total: usize = roots.iter().map(Node::subtree_len).sum();
        assert_eq!(visible_rows(&roots, &expansion).count(), total);
    }
}
