#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/motif-widgets/")]

//! # motif-widgets
//!
//! Reusable TUI components for browsing connectome motif search results,
//! built for [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! A motif search asks for small connectivity patterns of up to three
//! neurons and returns one match per occurrence. This crate provides the
//! presentation side of that workflow: a typed model for the match payload
//! and Elm-architecture components (`update()`/`view()`) for paging and
//! browsing the result set in a terminal.
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`motif`] | Match data model: node labels, cell references, edges |
//! | [`paginator`] | Windowed page bar with pinned first/last pages and ellipses |
//! | [`results`] | Paginated result table with row selection and clipboard export |
//! | [`key`] | Type-safe key bindings and the `KeyMap` help trait |
//!
//! ## Quick start
//!
//! ```rust
//! use motif_widgets::prelude::*;
//! use motif_widgets::motif::{CellRef, MotifMatch, NodeLabel};
//!
//! let matches: Vec<MotifMatch> = (0..45)
//!     .map(|i| {
//!         MotifMatch::new()
//!             .with_cell(NodeLabel::A, CellRef::new(i, format!("PN.{}", i)))
//!             .with_cell(NodeLabel::B, CellRef::new(1000 + i, format!("KC.{}", i)))
//!     })
//!     .collect();
//!
//! let browser = ResultsBrowser::new().with_matches(matches);
//! assert_eq!(browser.paginator().total_pages, 3);
//! println!("{}", browser.view());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! Components follow the Elm Architecture: forward messages from your
//! application's `update()` and compose their `view()` output.
//!
//! ```rust
//! use motif_widgets::prelude::*;
//! use motif_widgets::motif::MotifMatch;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     browser: ResultsBrowser,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let matches: Vec<MotifMatch> = Vec::new(); // filled on fetch
//!         (Self { browser: ResultsBrowser::new().with_matches(matches) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.browser.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.browser.view()
//!     }
//! }
//! ```
//!
//! ## Match payloads
//!
//! [`motif::MotifMatch`] deserializes the matching service's JSON directly;
//! cell IDs are accepted both as strings (the service stringifies 64-bit
//! IDs for JavaScript clients) and as integers.

pub mod key;
pub mod motif;
pub mod paginator;
pub mod results;

pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use motif::{CellRef, EdgeMatch, MotifMatch, NodeLabel};
pub use paginator::{
    visible_pages, Model as Paginator, PageEntry, PaginatorKeyMap, PaginatorStyles,
};
pub use results::{
    copy_to_clipboard, CopiedIdsMsg, CopyErrMsg, Model as ResultsBrowser, PageChangedMsg,
    ResultsKeyMap, ResultsStyles, RowSelectedMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use motif_widgets::prelude::*;
///
/// let paginator = Paginator::new().with_per_page(20).with_total_items(45);
/// assert_eq!(paginator.total_pages, 3);
/// ```
pub mod prelude {
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::motif::{CellRef, EdgeMatch, MotifMatch, NodeLabel};
    pub use crate::paginator::{
        visible_pages, Model as Paginator, PageEntry, PaginatorKeyMap, PaginatorStyles,
    };
    pub use crate::results::{
        copy_to_clipboard, CopiedIdsMsg, CopyErrMsg, Model as ResultsBrowser, PageChangedMsg,
        ResultsKeyMap, ResultsStyles, RowSelectedMsg,
    };
}
