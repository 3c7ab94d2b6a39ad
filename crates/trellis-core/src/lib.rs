//! Core engine for **trellis** — expandable tree state, independent of
//! rendering.
//!
//! `trellis-core` tracks which nodes of a caller-supplied label tree are
//! expanded and dispatches activate/action events, without knowing anything
//! about how (or whether) the tree is drawn. A rendering layer reads the
//! [`visible_rows`] flattening each draw cycle; the ratatui layer lives in
//! the `trellis-widgets` crate.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Node`] | One entry in the hierarchical label tree (caller-owned, immutable) |
//! | [`ExpansionState`] | The set of node ids whose children should be displayed |
//! | [`visible_rows`] | Lazy depth-first flattening of tree + expansion into `(node, depth)` rows |
//! | [`TreeState`] | Nodes + expansion + event dispatch (activate / action / hooks) |
//! | [`Component`] | Widget contract: update / view / focused |
//! | [`Command`] | Synchronous message carrier returned from `update` |
//! | [`TestComponent`](testing::TestComponent) | Headless harness for unit-testing a [`Component`] |
//!
//! # Concurrency model
//!
//! Everything here is single-threaded and synchronous: operations are total,
//! pure state transitions triggered by discrete events, each running to
//! completion before the next. There is no async runtime, no I/O, and no
//! error taxonomy — an id that matches no node is ignored, and a missing
//! hook is a no-op.
//!
//! # Quick example
//!
//! ```
//! use trellis_core::{Node, TreeState};
//!
//! let mut tree = TreeState::new(vec![Node::branch(
//!     "docs",
//!     "Documents",
//!     vec![Node::leaf("report", "report.pdf")],
//! )]);
//!
//! assert_eq!(tree.visible_len(), 1); // collapsed: root only
//! tree.activate("docs");
//! let rows: Vec<_> = tree
//!     .visible_rows()
//!     .map(|row| (row.node.label().to_string(), row.depth))
//!     .collect();
//! assert_eq!(rows, vec![("Documents".into(), 0), ("report.pdf".into(), 1)]);
//! ```

pub mod command;
pub mod component;
pub mod expansion;
pub mod node;
pub mod testing;
pub mod tree_state;
pub mod walk;

pub use command::Command;
pub use component::Component;
pub use expansion::ExpansionState;
pub use node::{find_node, Node};
pub use tree_state::{Activation, NodeHook, TreeState};
pub use walk::{visible_rows, Row, VisibleRows};
