//! A windowed paginator component for bubbletea-rs.
//!
//! This component tracks pagination state and renders a numbered page bar
//! with pinned first/last pages and ellipses, the kind that sits under a
//! result table. It does not render pages of content itself; use
//! [`Model::get_slice_bounds`] to slice your data for the current page.
//!
//! The page-button computation is exposed separately as [`visible_pages`],
//! a pure function of the pagination state.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::prelude::*;

/// Default width of the contiguous page window.
pub const DEFAULT_MAX_VISIBLE: usize = 7;

/// Character rendered for an ellipsis entry.
pub const ELLIPSIS: &str = "…";

/// One entry of the page bar: a concrete page or an ellipsis placeholder.
///
/// Ellipses carry their position so renderers can key or style the two
/// placeholders independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A concrete, clickable page (zero-based index).
    Page(usize),
    /// Hidden pages between the pinned first page and the window.
    EllipsisBefore,
    /// Hidden pages between the window and the pinned last page.
    EllipsisAfter,
}

impl PageEntry {
    /// Returns the page index for concrete entries.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageEntry::Page(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns true for ellipsis entries.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::EllipsisBefore | PageEntry::EllipsisAfter)
    }
}

/// Computes the page entries to display for the given pagination state.
///
/// When every page fits (`total_pages <= max_visible`) the result is simply
/// all pages in order. Otherwise a window of `max_visible` contiguous pages
/// is placed around `current_page`, the first and last pages are pinned at
/// the ends when not already covered by the window, and ellipses stand in
/// for the hidden ranges. The window is never padded with duplicates: each
/// page index appears at most once.
///
/// Degenerate inputs are clamped rather than rejected: zero `total_pages`
/// or zero `max_visible` yields an empty bar, and `current_page` is clamped
/// into range. `max_visible` values of at least 3 (ideally odd) give the
/// expected ellipsis behavior.
///
/// ```rust
/// use motif_widgets::paginator::{visible_pages, PageEntry};
///
/// let window = visible_pages(20, 10, 7);
/// assert_eq!(
///     window,
///     vec![
///         PageEntry::Page(0),
///         PageEntry::EllipsisBefore,
///         PageEntry::Page(8),
///         PageEntry::Page(9),
///         PageEntry::Page(10),
///         PageEntry::Page(11),
///         PageEntry::Page(12),
///         PageEntry::Page(13),
///         PageEntry::Page(14),
///         PageEntry::EllipsisAfter,
///         PageEntry::Page(19),
///     ]
/// );
/// ```
pub fn visible_pages(total_pages: usize, current_page: usize, max_visible: usize) -> Vec<PageEntry> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let current = current_page.min(total_pages - 1);

    if total_pages <= max_visible {
        return (0..total_pages).map(PageEntry::Page).collect();
    }

    // Signed arithmetic: the flag formulas go negative for small inputs.
    let total = total_pages as isize;
    let max = max_visible as isize;
    let cur = current as isize;

    let show_first = cur > 1;
    let show_last = cur < total - 2;
    let show_ellipsis_before = cur >= max - 2;
    let show_ellipsis_after = cur <= total - (max - 1);

    let start = (cur - max / 2 + 1).max(0) as usize;
    let end = (start + max_visible).min(total_pages);

    let mut entries = Vec::with_capacity(max_visible + 4);
    if show_first && start > 0 {
        entries.push(PageEntry::Page(0));
    }
    if show_ellipsis_before {
        entries.push(PageEntry::EllipsisBefore);
    }
    entries.extend((start..end).map(PageEntry::Page));
    if show_ellipsis_after {
        entries.push(PageEntry::EllipsisAfter);
    }
    if show_last && end < total_pages {
        entries.push(PageEntry::Page(total_pages - 1));
    }
    entries
}

/// Key bindings for paginator navigation.
///
/// # Examples
///
/// ```rust
/// use motif_widgets::paginator::PaginatorKeyMap;
/// use motif_widgets::key;
///
/// let custom = PaginatorKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["a", "left"]),
///         key::with_help("a/←", "previous page"),
///     ]),
///     next_page: key::new_binding(vec![
///         key::with_keys_str(&["d", "right"]),
///         key::with_help("d/→", "next page"),
///     ]),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Key binding for navigating to the previous page.
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Key binding for navigating to the next page.
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Styles for the rendered page bar.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// Style for the current page's number.
    pub active_page: Style,
    /// Style for every other page number.
    pub inactive_page: Style,
    /// Style for ellipsis placeholders.
    pub ellipsis: Style,
    /// Style for the prev/next arrows.
    pub arrow: Style,
    /// Style for an arrow whose direction is exhausted.
    pub disabled_arrow: Style,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued_color = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            active_page: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            inactive_page: Style::new().foreground(subdued_color.clone()),
            ellipsis: Style::new().foreground(very_subdued_color.clone()),
            arrow: Style::new().foreground(subdued_color),
            disabled_arrow: Style::new().foreground(very_subdued_color),
        }
    }
}

impl PaginatorStyles {
    /// Styles with no colors or attributes, for plain-text rendering.
    pub fn plain() -> Self {
        Self {
            active_page: Style::new(),
            inactive_page: Style::new(),
            ellipsis: Style::new(),
            arrow: Style::new(),
            disabled_arrow: Style::new(),
        }
    }
}

/// A paginator model holding pagination state and rendering the page bar.
///
/// Pages are zero-based internally and displayed one-based. A model with
/// zero pages renders nothing.
///
/// # Examples
///
/// ## Basic usage
///
/// ```rust
/// use motif_widgets::paginator::Model;
///
/// let mut paginator = Model::new()
///     .with_per_page(20)
///     .with_total_items(150); // 8 pages
///
/// assert_eq!(paginator.total_pages, 8);
/// assert!(paginator.on_first_page());
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 1);
/// ```
///
/// ## Integration with bubbletea-rs
///
/// ```rust
/// use motif_widgets::paginator::Model as Paginator;
/// use bubbletea_rs::{Model, Cmd, Msg};
///
/// struct App {
///     paginator: Paginator,
///     items: Vec<String>,
/// }
///
/// impl Model for App {
///     fn init() -> (Self, Option<Cmd>) {
///         let items: Vec<String> = (1..=100).map(|i| format!("Item {}", i)).collect();
///         let paginator = Paginator::new()
///             .with_per_page(10)
///             .with_total_items(items.len());
///
///         (Self { paginator, items }, None)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         self.paginator.update(&msg);
///         None
///     }
///
///     fn view(&self) -> String {
///         let (start, end) = self.paginator.get_slice_bounds(self.items.len());
///         format!("{}\n{}", self.items[start..end].join("\n"), self.paginator.view())
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The current page (zero-based).
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages.
    pub total_pages: usize,
    /// Width of the contiguous page window in the rendered bar.
    pub max_visible: usize,

    /// Styles for the rendered bar.
    pub styles: PaginatorStyles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 1,
            total_pages: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
            styles: PaginatorStyles::default(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a new paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern). Clamped to a
    /// minimum of 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total number of items and derives the page count
    /// (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the window width of the rendered bar (builder pattern).
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Sets the number of items per page. Clamped to a minimum of 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Derives the page count from a total item count.
    ///
    /// Zero items means zero pages; the current page is clamped back into
    /// range afterwards.
    ///
    /// ```rust
    /// use motif_widgets::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10);
    ///
    /// paginator.set_total_items(95);
    /// assert_eq!(paginator.total_pages, 10);
    ///
    /// paginator.page = 9;
    /// paginator.set_total_items(31);
    /// assert_eq!(paginator.total_pages, 4);
    /// assert_eq!(paginator.page, 3);
    ///
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 0);
    /// assert_eq!(paginator.page, 0);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page);
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// Jumps to a page.
    ///
    /// Out-of-range requests are ignored rather than reported, matching the
    /// behavior of the arrow keys at the ends of the bar.
    pub fn set_page(&mut self, page: usize) {
        if page < self.total_pages {
            self.page = page;
        }
    }

    /// Moves to the previous page, stopping at the first.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Moves to the next page, stopping at the last.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true if the current page is the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns true if the current page is the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages.saturating_sub(1)
    }

    /// Returns slice bounds for the current page, for data of `length`
    /// items. Usable directly with slice notation.
    ///
    /// ```rust
    /// use motif_widgets::paginator::Model;
    ///
    /// let items: Vec<i32> = (1..=100).collect();
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(items.len());
    ///
    /// paginator.page = 2;
    /// let (start, end) = paginator.get_slice_bounds(items.len());
    /// assert_eq!((start, end), (20, 30));
    /// let _page = &items[start..end];
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Returns the number of items on the current page, which may be less
    /// than `per_page` on the last page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Computes the page entries to display for the current state.
    ///
    /// See [`visible_pages`] for the windowing rules.
    pub fn visible_pages(&self) -> Vec<PageEntry> {
        visible_pages(self.total_pages, self.page, self.max_visible)
    }

    /// Applies prev/next key presses to the pagination state.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Renders the page bar.
    ///
    /// Produces a line like `‹ 1 … 8 9 10 … 20 ›` with the current page in
    /// the active style and the arrows dimmed at their respective bounds.
    /// Returns an empty string when there are no pages.
    pub fn view(&self) -> String {
        if self.total_pages == 0 {
            return String::new();
        }

        let mut parts = Vec::with_capacity(self.max_visible + 6);
        parts.push(if self.on_first_page() {
            self.styles.disabled_arrow.clone().render("‹")
        } else {
            self.styles.arrow.clone().render("‹")
        });

        for entry in self.visible_pages() {
            parts.push(match entry {
                PageEntry::Page(p) if p == self.page => self
                    .styles
                    .active_page
                    .clone()
                    .render(&(p + 1).to_string()),
                PageEntry::Page(p) => self
                    .styles
                    .inactive_page
                    .clone()
                    .render(&(p + 1).to_string()),
                _ => self.styles.ellipsis.clone().render(ELLIPSIS),
            });
        }

        parts.push(if self.on_last_page() {
            self.styles.disabled_arrow.clone().render("›")
        } else {
            self.styles.arrow.clone().render("›")
        });

        parts.join(" ")
    }
}
