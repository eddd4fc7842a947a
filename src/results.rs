//! A result-browser component for motif search matches.
//!
//! Renders matches as a paginated table with one column per motif position
//! and a highlighted row, and owns all of the view state behind it: the
//! match list, the embedded [`paginator`](crate::paginator) and the row
//! selection. State changes go through explicit messages handled by
//! [`Model::update`], so every transition is observable and testable:
//!
//! - [`PageChangedMsg`] jumps to a page; an accepted jump resets the row
//!   selection to the top of the page. Out-of-range pages are ignored.
//! - [`RowSelectedMsg`] highlights a row on the current page.
//! - Key presses move the selection, flip pages, or copy the selected
//!   match's cell IDs to the clipboard.
//!
//! ```rust
//! use motif_widgets::motif::{CellRef, MotifMatch, NodeLabel};
//! use motif_widgets::results::{Model, PageChangedMsg};
//! use bubbletea_rs::Msg;
//!
//! let matches: Vec<MotifMatch> = (0..45)
//!     .map(|i| {
//!         MotifMatch::new()
//!             .with_cell(NodeLabel::A, CellRef::new(i, format!("PN.{}", i)))
//!             .with_cell(NodeLabel::B, CellRef::new(1000 + i, format!("KC.{}", i)))
//!     })
//!     .collect();
//!
//! let mut browser = Model::new().with_matches(matches);
//! assert_eq!(browser.paginator().total_pages, 3);
//!
//! let jump: Msg = Box::new(PageChangedMsg { page: 2 });
//! browser.update(&jump);
//! assert_eq!(browser.selected_match().unwrap().cell(NodeLabel::A).unwrap().id, 40);
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::motif::{MotifMatch, NodeLabel};
use crate::paginator;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Number of matches shown per page.
pub const RESULTS_PER_PAGE: usize = 20;

/// Message requesting a jump to a page (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangedMsg {
    /// The requested page.
    pub page: usize,
}

/// Message requesting selection of a row on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSelectedMsg {
    /// The requested row, relative to the top of the current page.
    pub row: usize,
}

/// Message produced after the selected match's cell IDs were written to the
/// clipboard. Carries the copied text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedIdsMsg(pub String);

/// Message produced when writing to the clipboard failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyErrMsg(pub String);

/// Key bindings for result navigation.
#[derive(Debug, Clone)]
pub struct ResultsKeyMap {
    /// Move the row selection up. Default keys: Up Arrow, 'k'
    pub row_up: key::Binding,
    /// Move the row selection down. Default keys: Down Arrow, 'j'
    pub row_down: key::Binding,
    /// Copy the selected match's cell IDs. Default key: 'c'
    pub copy_ids: key::Binding,
}

impl Default for ResultsKeyMap {
    fn default() -> Self {
        Self {
            row_up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            row_down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            copy_ids: key::new_binding(vec![
                key::with_keys_str(&["c"]),
                key::with_help("c", "copy cell ids"),
            ]),
        }
    }
}

impl KeyMapTrait for ResultsKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.row_up, &self.row_down, &self.copy_ids]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.row_up, &self.row_down], vec![&self.copy_ids]]
    }
}

/// Styles for the rendered result table.
#[derive(Debug, Clone)]
pub struct ResultsStyles {
    /// Style for the column header line.
    pub header: Style,
    /// Style for the highlighted row.
    pub selected_row: Style,
    /// Style for the result-count status line.
    pub status: Style,
    /// Style for the empty-result message.
    pub no_results: Style,
}

impl Default for ResultsStyles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                }),
            selected_row: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            no_results: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

impl ResultsStyles {
    /// Styles with no colors or attributes, for plain-text rendering.
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            selected_row: Style::new(),
            status: Style::new(),
            no_results: Style::new(),
        }
    }
}

/// A result-browser model: the match list, pagination, and row selection.
#[derive(Debug, Clone)]
pub struct Model {
    matches: Vec<MotifMatch>,
    paginator: paginator::Model,
    selected: usize,

    /// Key bindings.
    pub keymap: ResultsKeyMap,
    /// Styles for the rendered table.
    pub styles: ResultsStyles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            paginator: paginator::Model::new().with_per_page(RESULTS_PER_PAGE),
            selected: 0,
            keymap: ResultsKeyMap::default(),
            styles: ResultsStyles::default(),
        }
    }
}

impl Model {
    /// Creates an empty browser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the match list (builder pattern).
    pub fn with_matches(mut self, matches: Vec<MotifMatch>) -> Self {
        self.set_matches(matches);
        self
    }

    /// Replaces the match list.
    ///
    /// Pagination is recomputed for the new result set and both the page
    /// and the row selection reset to the start.
    pub fn set_matches(&mut self, matches: Vec<MotifMatch>) {
        self.matches = matches;
        self.paginator.set_total_items(self.matches.len());
        self.paginator.page = 0;
        self.selected = 0;
    }

    /// Returns the full match list.
    pub fn matches(&self) -> &[MotifMatch] {
        &self.matches
    }

    /// Returns the number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if there are no matches.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the embedded paginator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Returns the matches on the current page.
    pub fn visible_matches(&self) -> &[MotifMatch] {
        let (start, end) = self.paginator.get_slice_bounds(self.matches.len());
        &self.matches[start..end]
    }

    /// Returns the highlighted row, relative to the top of the current page.
    pub fn selected_row(&self) -> usize {
        self.selected
    }

    /// Returns the highlighted match.
    pub fn selected_match(&self) -> Option<&MotifMatch> {
        let (start, _) = self.paginator.get_slice_bounds(self.matches.len());
        self.matches.get(start + self.selected)
    }

    /// Returns the motif positions that occur in the result set, in label
    /// order. These are the table's columns.
    pub fn labels(&self) -> Vec<NodeLabel> {
        NodeLabel::ALL
            .iter()
            .copied()
            .filter(|l| self.matches.iter().any(|m| m.cell(*l).is_some()))
            .collect()
    }

    /// Jumps to a page. Out-of-range requests are ignored; an accepted jump
    /// resets the row selection to the top of the page, even when the target
    /// is the current page.
    pub fn set_page(&mut self, page: usize) {
        if page < self.paginator.total_pages {
            self.paginator.set_page(page);
            self.selected = 0;
        }
    }

    /// Highlights a row on the current page. Rows past the end of the page
    /// are ignored.
    pub fn select_row(&mut self, row: usize) {
        if row < self.rows_on_page() {
            self.selected = row;
        }
    }

    /// Moves the selection up one row, stopping at the top of the page.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Moves the selection down one row, stopping at the bottom of the page.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows_on_page() {
            self.selected += 1;
        }
    }

    fn rows_on_page(&self) -> usize {
        self.paginator.items_on_page(self.matches.len())
    }

    /// Applies a message to the browser state.
    ///
    /// Handles [`PageChangedMsg`], [`RowSelectedMsg`] and key presses;
    /// everything else is ignored. Page navigation keys are delegated to
    /// the embedded paginator, and any resulting page change resets the
    /// row selection.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(page_msg) = msg.downcast_ref::<PageChangedMsg>() {
            self.set_page(page_msg.page);
            return None;
        }
        if let Some(row_msg) = msg.downcast_ref::<RowSelectedMsg>() {
            self.select_row(row_msg.row);
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.row_up.matches(key_msg) {
                self.select_prev();
            } else if self.keymap.row_down.matches(key_msg) {
                self.select_next();
            } else if self.keymap.copy_ids.matches(key_msg) {
                return self.copy_selected_ids();
            } else {
                let before = self.paginator.page;
                self.paginator.update(msg);
                if self.paginator.page != before {
                    self.selected = 0;
                }
            }
        }
        None
    }

    /// Returns a command copying the selected match's cell IDs to the
    /// clipboard, or `None` when nothing is selected.
    ///
    /// The command resolves to [`CopiedIdsMsg`] on success and
    /// [`CopyErrMsg`] on failure.
    pub fn copy_selected_ids(&self) -> Option<Cmd> {
        self.selected_match().map(|m| copy_to_clipboard(m.id_list()))
    }

    /// Renders the result table: a status line, the column header, one row
    /// per match on the current page, and the page bar.
    pub fn view(&self) -> String {
        if self.matches.is_empty() {
            return self
                .styles
                .no_results
                .clone()
                .render("No results found. Try widening your search.");
        }

        let labels = self.labels();
        let visible = self.visible_matches();

        let mut widths: Vec<usize> = labels.iter().map(|l| l.as_str().width()).collect();
        for m in visible {
            for (i, label) in labels.iter().enumerate() {
                widths[i] = widths[i].max(cell_text(m, *label).width());
            }
        }

        let mut out = String::new();
        let n = self.matches.len();
        out.push_str(&self.styles.status.clone().render(&format!(
            "{} result{}",
            n,
            if n == 1 { "" } else { "s" }
        )));
        out.push('\n');

        let header = labels
            .iter()
            .enumerate()
            .map(|(i, l)| pad(l.as_str(), widths[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str("  ");
        out.push_str(&self.styles.header.clone().render(&header));
        out.push('\n');

        for (row, m) in visible.iter().enumerate() {
            let line = labels
                .iter()
                .enumerate()
                .map(|(i, l)| pad(&cell_text(m, *l), widths[i]))
                .collect::<Vec<_>>()
                .join(" | ");
            if row == self.selected {
                out.push_str("> ");
                out.push_str(&self.styles.selected_row.clone().render(&line));
            } else {
                out.push_str("  ");
                out.push_str(&line);
            }
            out.push('\n');
        }

        out.push_str(&self.paginator.view());
        out
    }
}

fn cell_text(m: &MotifMatch, label: NodeLabel) -> String {
    match m.cell(label) {
        Some(cell) => format!("{} ({})", cell.name, cell.id),
        None => "-".to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    for _ in s.width()..width {
        out.push(' ');
    }
    out
}

/// Returns a command writing `contents` to the system clipboard.
///
/// Resolves to [`CopiedIdsMsg`] on success and [`CopyErrMsg`] on failure.
/// Without the `clipboard-support` feature the command always resolves to
/// an error message.
pub fn copy_to_clipboard(contents: String) -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), move |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<(), String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.set_contents(contents.clone())
                    .map_err(|e| format!("Failed to write clipboard: {}", e))
            })();
            match res {
                Ok(()) => Box::new(CopiedIdsMsg(contents.clone())) as Msg,
                Err(e) => Box::new(CopyErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            let _ = &contents;
            Box::new(CopyErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::CellRef;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn make_matches(n: usize) -> Vec<MotifMatch> {
        (0..n)
            .map(|i| {
                MotifMatch::new()
                    .with_cell(NodeLabel::A, CellRef::new(i as u64, format!("PN.{}", i)))
                    .with_cell(
                        NodeLabel::B,
                        CellRef::new(1000 + i as u64, format!("KC.{}", i)),
                    )
            })
            .collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_set_matches_derives_pages_and_resets_state() {
        let mut browser = Model::new().with_matches(make_matches(45));
        assert_eq!(browser.paginator().total_pages, 3);

        browser.set_page(2);
        browser.select_row(3);
        browser.set_matches(make_matches(10));
        assert_eq!(browser.paginator().total_pages, 1);
        assert_eq!(browser.paginator().page, 0);
        assert_eq!(browser.selected_row(), 0);
    }

    #[test]
    fn test_page_change_resets_selection() {
        let mut browser = Model::new().with_matches(make_matches(45));
        browser.select_row(5);
        assert_eq!(browser.selected_row(), 5);

        let msg: Msg = Box::new(PageChangedMsg { page: 1 });
        browser.update(&msg);
        assert_eq!(browser.paginator().page, 1);
        assert_eq!(browser.selected_row(), 0);
    }

    #[test]
    fn test_out_of_range_page_change_is_ignored() {
        let mut browser = Model::new().with_matches(make_matches(45));
        browser.set_page(1);
        browser.select_row(5);

        let msg: Msg = Box::new(PageChangedMsg { page: 3 });
        browser.update(&msg);
        assert_eq!(browser.paginator().page, 1);
        // A rejected jump leaves the selection alone too.
        assert_eq!(browser.selected_row(), 5);
    }

    #[test]
    fn test_same_page_jump_still_resets_selection() {
        let mut browser = Model::new().with_matches(make_matches(45));
        browser.select_row(5);
        browser.set_page(0);
        assert_eq!(browser.selected_row(), 0);
    }

    #[test]
    fn test_row_selection_bounded_by_page() {
        let mut browser = Model::new().with_matches(make_matches(45));
        browser.set_page(2);
        // Last page holds rows 40..44, so only rows 0..4 are selectable.
        browser.select_row(4);
        assert_eq!(browser.selected_row(), 4);
        browser.select_row(5);
        assert_eq!(browser.selected_row(), 4);

        let msg: Msg = Box::new(RowSelectedMsg { row: 2 });
        browser.update(&msg);
        assert_eq!(browser.selected_row(), 2);
    }

    #[test]
    fn test_selection_keys_clamp_at_page_bounds() {
        let mut browser = Model::new().with_matches(make_matches(45));
        browser.set_page(2);

        browser.update(&key(KeyCode::Up));
        assert_eq!(browser.selected_row(), 0);

        for _ in 0..10 {
            browser.update(&key(KeyCode::Down));
        }
        assert_eq!(browser.selected_row(), 4);
    }

    #[test]
    fn test_page_keys_flip_page_and_reset_selection() {
        let mut browser = Model::new().with_matches(make_matches(45));
        browser.select_row(7);

        browser.update(&key(KeyCode::Right));
        assert_eq!(browser.paginator().page, 1);
        assert_eq!(browser.selected_row(), 0);

        // At the last page the key is a no-op and selection survives.
        browser.update(&key(KeyCode::Right));
        browser.select_row(3);
        browser.update(&key(KeyCode::Right));
        assert_eq!(browser.paginator().page, 2);
        assert_eq!(browser.selected_row(), 3);
    }

    #[test]
    fn test_selected_match_resolves_against_page_offset() {
        let mut browser = Model::new().with_matches(make_matches(45));
        browser.set_page(1);
        browser.select_row(3);
        let m = browser.selected_match().unwrap();
        assert_eq!(m.cell(NodeLabel::A).unwrap().id, 23);
    }

    #[test]
    fn test_selected_match_is_none_when_empty() {
        let browser = Model::new();
        assert!(browser.selected_match().is_none());
        assert!(browser.copy_selected_ids().is_none());
    }

    #[test]
    fn test_visible_matches_slices_current_page() {
        let mut browser = Model::new().with_matches(make_matches(45));
        assert_eq!(browser.visible_matches().len(), 20);
        browser.set_page(2);
        assert_eq!(browser.visible_matches().len(), 5);
    }

    #[test]
    fn test_labels_follow_display_order() {
        let matches = vec![
            MotifMatch::new()
                .with_cell(NodeLabel::C, CellRef::new(3, "c"))
                .with_cell(NodeLabel::A, CellRef::new(1, "a")),
            MotifMatch::new().with_cell(NodeLabel::B, CellRef::new(2, "b")),
        ];
        let browser = Model::new().with_matches(matches);
        assert_eq!(
            browser.labels(),
            vec![NodeLabel::A, NodeLabel::B, NodeLabel::C]
        );
    }

    #[test]
    fn test_view_empty_result_set() {
        let mut browser = Model::new();
        browser.styles = ResultsStyles::plain();
        assert_eq!(
            browser.view(),
            "No results found. Try widening your search."
        );
    }

    #[test]
    fn test_view_renders_rows_and_marks_selection() {
        let mut browser = Model::new().with_matches(make_matches(3));
        browser.styles = ResultsStyles::plain();
        browser.paginator.styles = crate::paginator::PaginatorStyles::plain();
        browser.select_row(1);

        let view = browser.view();
        assert!(view.starts_with("3 results\n"));
        assert!(view.contains("PN.0 (0)"));
        assert!(view.contains("> PN.1 (1)"));
        assert!(view.contains("KC.2 (1002)"));
    }
}
