//! The tree engine: nodes, expansion state, and event dispatch in one place.

use crate::expansion::ExpansionState;
use crate::node::{find_node, Node};
use crate::walk::{visible_rows, VisibleRows};

/// Caller-supplied hook invoked with the node an event landed on.
pub type NodeHook = Box<dyn FnMut(&Node) + Send>;

/// What a call to [`TreeState::activate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A branch was toggled; the payload is the new state (`true` = expanded).
    Toggled(bool),
    /// A leaf was activated and the click hook (if any) ran.
    Clicked,
    /// The id matched no node; nothing happened.
    Ignored,
}

/// Expansion state and event dispatch for one tree.
///
/// Owns a caller-supplied tree of [`Node`]s, the [`ExpansionState`] for it,
/// and two optional hooks. All operations are synchronous, total state
/// transitions — there is no error taxonomy because nothing can fail: an id
/// that matches no node is simply ignored, and a missing hook is a no-op.
///
/// A rendering layer (for ratatui, see the `trellis-widgets` crate) reads
/// [`visible_rows`](TreeState::visible_rows) each draw cycle and feeds user
/// interactions back in through [`activate`](TreeState::activate) and
/// [`action`](TreeState::action).
///
/// # Example
///
/// ```
/// use trellis_core::{Node, TreeState};
///
/// let mut tree = TreeState::new(vec![Node::branch(
///     "dir",
///     "src",
///     vec![Node::leaf("file", "main.rs")],
/// )]);
///
/// tree.activate("dir"); // branch: toggles expansion
/// assert!(tree.is_expanded("dir"));
/// assert_eq!(tree.visible_rows().count(), 2);
/// ```
pub struct TreeState {
    roots: Vec<Node>,
    expansion: ExpansionState,
    on_click: Option<NodeHook>,
    on_action: Option<NodeHook>,
}

impl TreeState {
    /// Create an engine for the given root nodes, everything collapsed.
    pub fn new(roots: Vec<Node>) -> Self {
        Self {
            roots,
            expansion: ExpansionState::new(),
            on_click: None,
            on_action: None,
        }
    }

    /// Set the hook invoked when a leaf is activated.
    pub fn with_on_click(mut self, hook: impl FnMut(&Node) + Send + 'static) -> Self {
        self.on_click = Some(Box::new(hook));
        self
    }

    /// Set the hook invoked by [`action`](TreeState::action) for any node.
    pub fn with_on_action(mut self, hook: impl FnMut(&Node) + Send + 'static) -> Self {
        self.on_action = Some(Box::new(hook));
        self
    }

    /// The root nodes, in display order.
    pub fn nodes(&self) -> &[Node] {
        &self.roots
    }

    /// Replace the tree, keeping the expansion state.
    ///
    /// Ids present in both trees stay open; ids only in the old tree become
    /// stale, which is harmless — the walker never consults them. Call
    /// [`collapse_all`](TreeState::collapse_all) first for a clean slate.
    pub fn set_nodes(&mut self, roots: Vec<Node>) {
        self.roots = roots;
    }

    /// Shared access to the expansion tracker.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Mutable access to the expansion tracker, for direct toggling.
    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    /// Whether the given id is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Find a node anywhere in the tree by id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        find_node(&self.roots, id)
    }

    /// Primary interaction with a node.
    ///
    /// A branch only ever flips its expansion — the click hook never fires
    /// for branches. A leaf never touches expansion state — the click hook
    /// fires instead, exactly once. An id matching no node does nothing.
    pub fn activate(&mut self, id: &str) -> Activation {
        let Some(node) = find_node(&self.roots, id) else {
            return Activation::Ignored;
        };
        if node.is_leaf() {
            if let Some(hook) = self.on_click.as_mut() {
                hook(node);
            }
            Activation::Clicked
        } else {
            Activation::Toggled(self.expansion.toggle(node.id()))
        }
    }

    /// Secondary interaction with a node (e.g. a context-menu trigger).
    ///
    /// Invokes the action hook regardless of leaf/branch status and never
    /// touches expansion state. Returns whether the id matched a node.
    pub fn action(&mut self, id: &str) -> bool {
        let Some(node) = find_node(&self.roots, id) else {
            return false;
        };
        if let Some(hook) = self.on_action.as_mut() {
            hook(node);
        }
        true
    }

    /// The current flattening of the tree, top to bottom.
    pub fn visible_rows(&self) -> VisibleRows<'_> {
        visible_rows(&self.roots, &self.expansion)
    }

    /// Number of currently visible rows.
    pub fn visible_len(&self) -> usize {
        self.visible_rows().count()
    }

    /// Collapse every branch, clearing the expansion set.
    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    /// Expand every branch in the tree.
    pub fn expand_all(&mut self) {
        fn expand_rec(nodes: &[Node], expansion: &mut ExpansionState) {
            for node in nodes {
                if !node.is_leaf() {
                    expansion.expand(node.id());
                    expand_rec(node.children(), expansion);
                }
            }
        }
        expand_rec(&self.roots, &mut self.expansion);
    }
}

impl std::fmt::Debug for TreeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeState")
            .field("roots", &self.roots.len())
            .field("expansion", &self.expansion)
            .field("on_click", &self.on_click.is_some())
            .field("on_action", &self.on_action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn sample() -> Vec<Node> {
        vec![
            Node::branch(
                "docs",
                "Documents",
                vec![
                    Node::branch("work", "Work", vec![Node::leaf("report", "report.pdf")]),
                    Node::leaf("notes", "notes.txt"),
                ],
            ),
            Node::leaf("readme", "README.md"),
        ]
    }

    fn visible_ids(tree: &TreeState) -> Vec<String> {
        tree.visible_rows()
            .map(|row| row.node.id().to_string())
            .collect()
    }

    #[test]
    fn activate_branch_toggles_and_never_clicks() {
        let (tx, rx) = mpsc::channel();
        let mut tree =
            TreeState::new(sample()).with_on_click(move |node| tx.send(node.id().to_string()).unwrap());

        assert_eq!(tree.activate("docs"), Activation::Toggled(true));
        assert!(tree.is_expanded("docs"));
        assert_eq!(tree.activate("docs"), Activation::Toggled(false));
        assert!(!tree.is_expanded("docs"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn double_activate_restores_expansion_state() {
        let mut tree = TreeState::new(sample());
        tree.activate("docs");
        tree.activate("work");
        let before: Vec<String> = {
            let mut ids: Vec<String> = tree.expansion().ids().map(String::from).collect();
            ids.sort_unstable();
            ids
        };
        tree.activate("docs");
        tree.activate("docs");
        let mut after: Vec<String> = tree.expansion().ids().map(String::from).collect();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn activate_leaf_clicks_once_and_leaves_expansion_alone() {
        let (tx, rx) = mpsc::channel();
        let mut tree =
            TreeState::new(sample()).with_on_click(move |node| tx.send(node.id().to_string()).unwrap());

        assert_eq!(tree.activate("readme"), Activation::Clicked);
        assert_eq!(rx.try_recv().unwrap(), "readme");
        assert!(rx.try_recv().is_err());
        assert!(tree.expansion().is_empty());
    }

    #[test]
    fn activate_unknown_id_is_ignored() {
        let mut tree = TreeState::new(sample());
        assert_eq!(tree.activate("nope"), Activation::Ignored);
        assert!(tree.expansion().is_empty());
    }

    #[test]
    fn missing_hooks_are_noops() {
        let mut tree = TreeState::new(sample());
        assert_eq!(tree.activate("readme"), Activation::Clicked);
        assert!(tree.action("docs"));
    }

    #[test]
    fn action_fires_for_branch_and_leaf_without_touching_expansion() {
        let (tx, rx) = mpsc::channel();
        let mut tree = TreeState::new(sample())
            .with_on_action(move |node| tx.send(node.id().to_string()).unwrap());

        assert!(tree.action("docs"));
        assert!(tree.action("readme"));
        assert!(tree.action("docs"));
        assert!(!tree.action("missing"));

        let fired: Vec<String> = rx.try_iter().collect();
        assert_eq!(fired, vec!["docs", "readme", "docs"]);
        assert!(tree.expansion().is_empty());
    }

    #[test]
    fn collapse_persists_descendant_state() {
        // A single chain: A(B(C)).
        let mut tree = TreeState::new(vec![Node::branch(
            "a",
            "A",
            vec![Node::branch("b", "B", vec![Node::leaf("c", "C")])],
        )]);
        assert_eq!(visible_ids(&tree), vec!["a"]);
        tree.activate("a");
        assert_eq!(visible_ids(&tree), vec!["a", "b"]);
        tree.activate("b");
        assert_eq!(visible_ids(&tree), vec!["a", "b", "c"]);
        tree.activate("a");
        assert_eq!(visible_ids(&tree), vec!["a"]);
        tree.activate("a");
        assert_eq!(visible_ids(&tree), vec!["a", "b", "c"]);
    }

    #[test]
    fn collapse_all_yields_root_only_rows() {
        let mut tree = TreeState::new(sample());
        tree.expand_all();
        assert_eq!(tree.visible_len(), 5);
        tree.collapse_all();
        assert_eq!(visible_ids(&tree), vec!["docs", "readme"]);
    }

    #[test]
    fn expand_all_opens_every_branch() {
        let mut tree = TreeState::new(sample());
        tree.expand_all();
        assert!(tree.is_expanded("docs"));
        assert!(tree.is_expanded("work"));
        // Leaves are never inserted by expand_all.
        assert_eq!(tree.expansion().len(), 2);
    }

    #[test]
    fn set_nodes_keeps_expansion_for_common_ids() {
        let mut tree = TreeState::new(sample());
        tree.activate("docs");
        tree.set_nodes(vec![
            Node::branch("docs", "Documents", vec![Node::leaf("other", "other.txt")]),
        ]);
        // Same id, different shape: still open.
        let ids = visible_ids(&tree);
        assert_eq!(ids, vec!["docs", "other"]);
        // Stale "work"-era expansion would be harmless either way.
        tree.set_nodes(vec![Node::leaf("solo", "solo")]);
        assert_eq!(visible_ids(&tree), vec!["solo"]);
    }
}
