//! Query specification for the branches engine.
//!
//! A [`QuerySpec`] is the engine's only configuration input: free-text search,
//! a search scope, a filter set, and a sort key. The presentation layer builds
//! one on every user interaction and hands it to the pipeline.
//!
//! Parsing from strings is deliberately permissive: unknown scope, sort, or
//! date-range names fall back to the documented defaults instead of erroring.
//! Robustness to caller mistakes is worth more here than strictness — a stale
//! UI sending a retired sort name must still get a sensible result.
//!
//! # Example
//!
//! ```
//! use branches_query::{QuerySpec, SearchScope, SortKey};
//!
//! let spec = QuerySpec::search("cats")
//!     .with_scope(SearchScope::Title)
//!     .with_sort(SortKey::Newest);
//! assert_eq!(spec.normalized_search().as_deref(), Some("cats"));
//! ```

#![warn(missing_docs)]

mod filters;
mod scope;
mod sort;
mod spec;

pub use filters::{DateRange, Filters};
pub use scope::SearchScope;
pub use sort::SortKey;
pub use spec::QuerySpec;
