//! The immutable tree record consumed by the engine.

/// A single entry in a hierarchical label tree.
///
/// Nodes are supplied by the caller and never mutated by the engine; all
/// auxiliary state (expansion, cursor position) is tracked externally, keyed
/// by [`id`](Node::id). Ids must be unique across the whole tree — duplicate
/// ids are a caller contract violation, not something the engine detects.
///
/// A node with an empty `children` list is a *leaf*; anything else is a
/// *branch*.
///
/// # Example
///
/// ```
/// use trellis_core::Node;
///
/// let tree = Node::branch(
///     "docs",
///     "Documents",
///     vec![
///         Node::leaf("docs/report", "report.pdf"),
///         Node::leaf("docs/budget", "budget.xlsx"),
///     ],
/// );
/// assert!(!tree.is_leaf());
/// assert_eq!(tree.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    label: String,
    children: Vec<Node>,
}

impl Node {
    /// Create a leaf node (no children).
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a branch node with the given children.
    ///
    /// An empty `children` vector produces a leaf; branch/leaf status is
    /// derived from the children list, never stored separately.
    pub fn branch(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children,
        }
    }

    /// The node's unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node's children, in display order. Empty for leaves.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Find a node by id with a pre-order depth-first search.
///
/// Returns the first match; with unique ids (the caller contract) that is
/// the only match. A free function over the slice, rather than a method on
/// the owning engine, so callers can borrow the roots and other engine
/// fields independently.
pub fn find_node<'a>(roots: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in roots {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}
