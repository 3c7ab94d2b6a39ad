//! Ready-made widgets for **trellis**.
//!
//! Every widget in this crate implements [`trellis_core::Component`], so it
//! can be embedded in any component tree and composed freely within
//! [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tree`] | Expandable tree view over a node hierarchy |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`key`] | Key-binding helpers and the [`KeyMap`](key::KeyMap) help trait |
//! | [`runeutil`] | Unicode-aware string width and truncation utilities |

pub mod key;
pub mod runeutil;
pub mod tree;
