//! Expansion tracking for tree nodes.
//!
//! `ExpansionState` owns the set of node ids whose children should currently
//! be displayed. It has no knowledge of the tree shape: every operation is
//! total over arbitrary string ids, and ids that no longer (or never did)
//! correspond to a real node are harmless — the walker simply never asks
//! about them.

use std::collections::HashSet;

/// The set of currently expanded node ids.
///
/// Starts empty; an id is added on expand and removed on collapse. A node's
/// membership is independent of its ancestors' and descendants' membership,
/// so collapsing a parent hides its subtree without clearing the recorded
/// expansion of anything inside it.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    /// Create an empty expansion state (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given id is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip the given id: expand if collapsed, collapse if expanded.
    ///
    /// Returns the new state (`true` = now expanded). Self-inverse: toggling
    /// twice restores the original state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    /// Expand the given id. Returns `true` if it was previously collapsed.
    pub fn expand(&mut self, id: &str) -> bool {
        self.open.insert(id.to_string())
    }

    /// Collapse the given id. Returns `true` if it was previously expanded.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.open.remove(id)
    }

    /// Collapse everything, clearing the set.
    ///
    /// This is also the reclamation path: the set grows in proportion to the
    /// number of ever-expanded ids and is never pruned automatically.
    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    /// Number of currently expanded ids.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Iterate over the expanded ids, in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}
