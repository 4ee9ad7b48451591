//! The query specification.

use serde::{Deserialize, Serialize};

use crate::{Filters, SearchScope, SortKey};

/// Everything the caller can vary about a query: search text, scope, filter
/// set, and sort key.
///
/// The pipeline recomputes its full output from a `QuerySpec` plus an entity
/// collection on every call; the spec carries no hidden state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    /// Free-text search string. Blank (after trimming) disables matching.
    pub search: String,

    /// Which discussion fields the search applies to.
    pub scope: SearchScope,

    /// Conjunction of optional filter predicates.
    pub filters: Filters,

    /// Result ordering.
    pub sort: SortKey,
}

impl QuerySpec {
    /// Creates a spec with the given search text and all other fields at
    /// their defaults.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    /// Sets the search scope.
    #[must_use]
    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the filter set.
    #[must_use]
    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// The trimmed, lowercased search text, or `None` when blank.
    ///
    /// `None` is the explicit fast path for "no search": the matcher is never
    /// consulted and every entity is retained.
    pub fn normalized_search(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// The sort key to actually apply.
    ///
    /// [`SortKey::Relevance`] requires a non-blank search; with a blank
    /// search it degrades to the default [`SortKey::Newest`].
    pub fn effective_sort(&self) -> SortKey {
        if self.sort == SortKey::Relevance && self.normalized_search().is_none() {
            SortKey::Newest
        } else {
            self.sort
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_normalizes_to_none() {
        assert_eq!(QuerySpec::search("").normalized_search(), None);
        assert_eq!(QuerySpec::search("   \t ").normalized_search(), None);
    }

    #[test]
    fn search_is_trimmed_and_lowercased() {
        let spec = QuerySpec::search("  CaTs  ");
        assert_eq!(spec.normalized_search().as_deref(), Some("cats"));
    }

    #[test]
    fn relevance_degrades_to_newest_without_search() {
        let spec = QuerySpec::default().with_sort(SortKey::Relevance);
        assert_eq!(spec.effective_sort(), SortKey::Newest);

        let spec = QuerySpec::search("cats").with_sort(SortKey::Relevance);
        assert_eq!(spec.effective_sort(), SortKey::Relevance);
    }

    #[test]
    fn non_relevance_sorts_pass_through() {
        let spec = QuerySpec::default().with_sort(SortKey::Views);
        assert_eq!(spec.effective_sort(), SortKey::Views);
    }

    #[test]
    fn spec_deserializes_from_partial_json() {
        let json = r#"{"search": "dogs", "sort": "oldest"}"#;
        let spec: QuerySpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.search, "dogs");
        assert_eq!(spec.sort, SortKey::Oldest);
        assert_eq!(spec.scope, SearchScope::All);
        assert!(spec.filters.is_empty());
    }
}
