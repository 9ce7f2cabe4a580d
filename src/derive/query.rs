//! Free-text search predicate.

use super::Record;

/// Case-insensitive substring match of `query` against a record.
///
/// `query` must already be lowercase (see [`super::FilterState::set_query`]).
/// An empty query matches everything. Otherwise the record matches when any
/// present search field, or any single tag, contains the query.
pub fn matches_query<R: Record + ?Sized>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let in_fields = record
        .search_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(query));

    in_fields || record.tags().iter().any(|tag| tag.to_lowercase().contains(query))
}
