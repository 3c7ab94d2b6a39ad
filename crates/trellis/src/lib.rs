//! **trellis** — an expandable tree view kit for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! trellis = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`trellis_core`] are available at the crate root
//!   ([`Node`], [`ExpansionState`], [`TreeState`], [`Component`],
//!   [`Command`], [`visible_rows`], etc.).
//! * The [`widgets`] module re-exports everything from [`trellis_widgets`]
//!   (the tree view, key-binding helpers, unicode utilities).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```
//! use trellis::{Node, TreeState};
//!
//! let mut tree = TreeState::new(vec![Node::branch(
//!     "src",
//!     "src",
//!     vec![Node::leaf("main", "main.rs")],
//! )]);
//!
//! tree.activate("src");
//! assert_eq!(tree.visible_len(), 2);
//! ```
//!
//! For the interactive widget, see [`widgets::tree::TreeView`] and the
//! `file_tree` example in `demos/`.

pub use trellis_core::*;
pub mod widgets {
    pub use trellis_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
