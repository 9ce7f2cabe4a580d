//! List derivation pipeline.
//!
//! Every list and board view derives what it shows from the same two inputs:
//! the records handed in by the data layer and the view's [`FilterState`].
//! The pipeline is category filter, then text match, then a stable sort, and
//! optionally a final grouping step ([`board`] for kanban columns,
//! [`day_buckets`] for chat transcripts).
//!
//! Derivation never mutates or clones records. Outputs are new vectors of
//! references into the input slice, recomputed in full on every call.

pub mod board;
pub mod category;
pub mod day_buckets;
pub mod query;
pub mod sort;

pub use board::{group_into_board, Board, Bucket};
pub use category::CategoryFilter;
pub use day_buckets::{group_by_day, DayBucket, DayGrouping, GroupedMessage, Timeline};
pub use query::matches_query;
pub use sort::SortKey;

/// An item shown in a list or board view.
///
/// Only `id` and `search_fields` are required; every other accessor has a
/// neutral default so an entity exposes just the dimensions it has.
pub trait Record {
    /// Stable unique identifier
    fn id(&self) -> &str;

    /// Free-text fields matched by the search box. `None` entries are
    /// optional fields that are absent on this record.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Tag or label strings, each matched independently
    fn tags(&self) -> &[String] {
        &[]
    }

    /// The enum-like value used for exact-match filtering and board buckets
    fn category(&self) -> Option<&str> {
        None
    }

    /// Effective numeric value (after any discount) for value and price sorts
    fn sort_value(&self) -> Option<f64> {
        None
    }

    /// Timestamp in milliseconds for date sorts
    fn sort_date(&self) -> Option<i64> {
        None
    }

    /// Creation timestamp in milliseconds for the `newest` sort
    fn created_at(&self) -> Option<i64> {
        None
    }

    fn is_featured(&self) -> bool {
        false
    }

    fn rating(&self) -> Option<f64> {
        None
    }

    /// Human-readable label used by alphabetical sorts
    fn label(&self) -> &str {
        self.id()
    }
}

/// Apply a percentage discount to a value.
///
/// Every entity with a discount routes through here so value sorts, board
/// totals and cart totals cannot disagree. The discount is clamped to
/// `0..=100`; a missing discount means none.
pub fn effective_value(value: f64, discount_percent: Option<f64>) -> f64 {
    let discount = discount_percent.unwrap_or(0.0).clamp(0.0, 100.0);
    value * (1.0 - discount / 100.0)
}

/// Per-view filter, search and sort parameters.
///
/// Lives only as long as the view that owns it; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    query: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// The stored query, already lowercased
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Clear query and category, keeping `sort`
    pub fn reset(&mut self, sort: SortKey) {
        *self = Self::new(sort);
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a record passes both the category filter and the text match
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.category.matches(record) && matches_query(record, &self.query)
    }
}

/// Filter, match and sort `records` for a list view.
pub fn derive_list<'a, R: Record>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let mut rows: Vec<&R> = records.iter().filter(|r| state.matches(*r)).collect();
    let compare = state.sort.comparator::<R>();
    rows.sort_by(|a, b| compare(*a, *b));
    rows
}

/// Derive a list and partition it into fixed, ordered board buckets.
pub fn derive_board<'a, R, K, F>(records: &'a [R], state: &FilterState, bucket_keys: &[K], aggregate: F) -> Board<'a, R>
where
    R: Record,
    K: AsRef<str>,
    F: Fn(&R) -> f64,
{
    group_into_board(derive_list(records, state), bucket_keys, aggregate)
}
