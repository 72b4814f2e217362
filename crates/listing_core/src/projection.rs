//! The listing pipeline: query + sort key over an immutable entry list,
//! projected into display order and visibility.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entry::FileEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Enumerated sort criterion and direction for the listing.
///
/// The serde tokens double as the `<select>` option values rendered by the
/// dashboard toolbar.
pub enum SortKey {
    /// Lexicographic by name, ascending.
    NameAsc,
    /// Lexicographic by name, descending.
    NameDesc,
    /// Chronological by modification time, oldest first.
    DateAsc,
    /// Chronological by modification time, newest first.
    DateDesc,
    /// Numeric by size, smallest first.
    SizeAsc,
    /// Numeric by size, largest first.
    SizeDesc,
}

impl SortKey {
    /// Every key in toolbar display order.
    pub const ALL: [SortKey; 6] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::DateAsc,
        SortKey::DateDesc,
        SortKey::SizeAsc,
        SortKey::SizeDesc,
    ];

    /// Parses a select-option token; unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "date-asc" => Some(Self::DateAsc),
            "date-desc" => Some(Self::DateDesc),
            "size-asc" => Some(Self::SizeAsc),
            "size-desc" => Some(Self::SizeDesc),
            _ => None,
        }
    }

    /// Returns the select-option token for this key.
    pub fn token(self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::DateAsc => "date-asc",
            Self::DateDesc => "date-desc",
            Self::SizeAsc => "size-asc",
            Self::SizeDesc => "size-desc",
        }
    }

    /// User-facing label for the toolbar dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::DateAsc => "Oldest first",
            Self::DateDesc => "Newest first",
            Self::SizeAsc => "Smallest first",
            Self::SizeDesc => "Largest first",
        }
    }

    /// Compares two entries under this key.
    ///
    /// Each `-desc` key is the exact reverse of its `-asc` counterpart, so a
    /// stable sort keeps original order for equal keys in both directions.
    pub fn compare(self, a: &FileEntry, b: &FileEntry) -> Ordering {
        match self {
            Self::NameAsc => compare_names(a, b),
            Self::NameDesc => compare_names(a, b).reverse(),
            Self::DateAsc => a.modified_at_unix_ms.cmp(&b.modified_at_unix_ms),
            Self::DateDesc => a.modified_at_unix_ms.cmp(&b.modified_at_unix_ms).reverse(),
            Self::SizeAsc => a.size_bytes.cmp(&b.size_bytes),
            Self::SizeDesc => a.size_bytes.cmp(&b.size_bytes).reverse(),
        }
    }
}

fn compare_names(a: &FileEntry, b: &FileEntry) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pure projection of a [`FileListView`] into display order and visibility.
///
/// `order` lists every entry index in render order; `visible` is indexed by
/// entry index, independent of position in `order`. The renderer applies the
/// projection as an idempotent side effect.
pub struct ListProjection {
    /// Entry indices in display order, covering all entries.
    pub order: Vec<usize>,
    /// Visibility per entry index.
    pub visible: Vec<bool>,
    /// Number of currently visible entries.
    pub visible_count: usize,
    /// Whether the "no results" indicator should be shown: visible count is
    /// zero and the query is non-empty.
    pub show_empty_state: bool,
}

impl ListProjection {
    /// Entry indices in display order, visible entries only.
    pub fn visible_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied().filter(|idx| self.visible[*idx])
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The listing view model: an immutable entry list plus the current query
/// and sort key.
///
/// Entries are never created, destroyed, or mutated here; the view only
/// derives order and visibility for presentation.
pub struct FileListView {
    entries: Vec<FileEntry>,
    query: String,
    sort_key: Option<SortKey>,
}

impl FileListView {
    /// Builds a view over the server-rendered entries in first-render order.
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self {
            entries,
            query: String::new(),
            sort_key: None,
        }
    }

    /// All entries in first-render order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns the entry at `idx`, if in range.
    pub fn entry(&self, idx: usize) -> Option<&FileEntry> {
        self.entries.get(idx)
    }

    /// The current filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current sort key; `None` keeps first-render order.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    /// Replaces the filter query. Empty and whitespace queries are valid.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replaces the sort key.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = Some(key);
    }

    /// Applies a select-option token. Unrecognized tokens are a no-op, so a
    /// stray option value leaves the current ordering untouched.
    pub fn set_sort_token(&mut self, token: &str) {
        if let Some(key) = SortKey::parse(token) {
            self.sort_key = Some(key);
        }
    }

    /// Computes the display projection for the current query and sort key.
    ///
    /// Sorting covers all entries, visible or not; filtering never reorders.
    /// Ties resolve by original index (stable sort over indices).
    pub fn projection(&self) -> ListProjection {
        let needle = self.query.to_lowercase();
        let visible: Vec<bool> = self
            .entries
            .iter()
            .map(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .collect();

        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        if let Some(key) = self.sort_key {
            order.sort_by(|&a, &b| key.compare(&self.entries[a], &self.entries[b]));
        }

        let visible_count = visible.iter().filter(|shown| **shown).count();
        let show_empty_state = visible_count == 0 && !self.query.is_empty();

        ListProjection {
            order,
            visible,
            visible_count,
            show_empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::FileId;

    fn entry(id: &str, name: &str, size_bytes: u64, modified_at_unix_ms: u64) -> FileEntry {
        FileEntry {
            id: FileId::new(id),
            name: name.to_string(),
            size_bytes,
            modified_at_unix_ms,
            content_type: None,
        }
    }

    fn sample_view() -> FileListView {
        FileListView::new(vec![
            entry("1", "b.txt", 300, 30),
            entry("2", "a.txt", 100, 10),
            entry("3", "c.txt", 200, 20),
        ])
    }

    fn visible_names(view: &FileListView) -> Vec<String> {
        let projection = view.projection();
        projection
            .visible_order()
            .map(|idx| view.entries()[idx].name.clone())
            .collect()
    }

    #[test]
    fn empty_query_shows_every_entry() {
        let view = sample_view();
        let projection = view.projection();
        assert_eq!(projection.visible, vec![true, true, true]);
        assert_eq!(projection.visible_count, 3);
        assert!(!projection.show_empty_state);
    }

    #[test]
    fn filter_is_case_insensitive_substring_match() {
        let mut view = FileListView::new(vec![
            entry("1", "Quarterly Report.pdf", 1, 1),
            entry("2", "photo.png", 1, 1),
        ]);
        view.set_query("REPORT");
        let projection = view.projection();
        assert_eq!(projection.visible, vec![true, false]);
        assert_eq!(projection.visible_count, 1);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut view = sample_view();
        view.set_query("a.txt");
        let first = view.projection();
        view.set_query("a.txt");
        let second = view.projection();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_state_requires_a_nonempty_query() {
        let mut view = sample_view();
        view.set_query("zzz");
        let projection = view.projection();
        assert_eq!(projection.visible_count, 0);
        assert!(projection.show_empty_state);

        view.set_query("");
        assert!(!view.projection().show_empty_state);

        let empty = FileListView::new(Vec::new());
        assert!(!empty.projection().show_empty_state);
    }

    #[test]
    fn name_sort_orders_lexicographically_both_directions() {
        let mut view = sample_view();
        view.set_sort_key(SortKey::NameAsc);
        assert_eq!(visible_names(&view), ["a.txt", "b.txt", "c.txt"]);
        view.set_sort_key(SortKey::NameDesc);
        assert_eq!(visible_names(&view), ["c.txt", "b.txt", "a.txt"]);
    }

    #[test]
    fn size_sort_orders_numerically_both_directions() {
        let mut view = sample_view();
        view.set_sort_key(SortKey::SizeAsc);
        let projection = view.projection();
        let sizes: Vec<u64> = projection
            .order
            .iter()
            .map(|&idx| view.entries()[idx].size_bytes)
            .collect();
        assert_eq!(sizes, [100, 200, 300]);

        view.set_sort_key(SortKey::SizeDesc);
        let projection = view.projection();
        let sizes: Vec<u64> = projection
            .order
            .iter()
            .map(|&idx| view.entries()[idx].size_bytes)
            .collect();
        assert_eq!(sizes, [300, 200, 100]);
    }

    #[test]
    fn date_sort_orders_chronologically() {
        let mut view = sample_view();
        view.set_sort_key(SortKey::DateDesc);
        assert_eq!(visible_names(&view), ["b.txt", "c.txt", "a.txt"]);
    }

    #[test]
    fn sort_covers_hidden_entries_and_preserves_visibility() {
        let mut view = sample_view();
        view.set_query("a.txt");
        view.set_sort_key(SortKey::NameDesc);
        let projection = view.projection();
        // All three entries are ordered even though only one is visible.
        assert_eq!(projection.order.len(), 3);
        assert_eq!(projection.visible, vec![false, true, false]);
        assert_eq!(visible_names(&view), ["a.txt"]);
    }

    #[test]
    fn ties_keep_first_render_order_in_both_directions() {
        let mut view = FileListView::new(vec![
            entry("1", "dup.txt", 50, 1),
            entry("2", "dup.txt", 50, 2),
            entry("3", "dup.txt", 50, 3),
        ]);

        view.set_sort_key(SortKey::NameAsc);
        assert_eq!(view.projection().order, vec![0, 1, 2]);
        view.set_sort_key(SortKey::NameDesc);
        assert_eq!(view.projection().order, vec![0, 1, 2]);
        view.set_sort_key(SortKey::SizeAsc);
        assert_eq!(view.projection().order, vec![0, 1, 2]);
    }

    #[test]
    fn name_sort_ignores_case_differences() {
        let mut view = FileListView::new(vec![
            entry("1", "Beta.txt", 1, 1),
            entry("2", "alpha.txt", 1, 1),
        ]);
        view.set_sort_key(SortKey::NameAsc);
        assert_eq!(visible_names(&view), ["alpha.txt", "Beta.txt"]);
    }

    #[test]
    fn unknown_sort_token_is_a_no_op() {
        let mut view = sample_view();
        view.set_sort_token("name-desc");
        assert_eq!(view.sort_key(), Some(SortKey::NameDesc));
        view.set_sort_token("mystery-key");
        assert_eq!(view.sort_key(), Some(SortKey::NameDesc));
        assert_eq!(visible_names(&view), ["c.txt", "b.txt", "a.txt"]);
    }

    #[test]
    fn sort_key_tokens_round_trip_through_parse_and_serde() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.token()), Some(key));
            let json = serde_json::to_string(&key).expect("serialize");
            assert_eq!(json, format!("\"{}\"", key.token()));
        }
        assert_eq!(SortKey::parse(""), None);
    }
}
