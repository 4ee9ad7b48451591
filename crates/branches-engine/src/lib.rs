//! In-memory search, filter, sort, and ranking over discussions and replies.
//!
//! The engine is a pure library: no I/O, no clock reads, no shared state.
//! Callers hand it a full entity collection plus a
//! [`QuerySpec`](branches_query::QuerySpec) and get the complete recomputed
//! result back, synchronously and deterministically. It is safe to call
//! concurrently over independent snapshots; there is nothing to cancel
//! because nothing suspends.
//!
//! The main entry points are [`run_discussions`] and [`run_replies`], which
//! chain the stages in fixed order: text match → filter → sort → (replies
//! only) tree build and point grouping. The stage primitives are exported
//! for finer composition.
//!
//! Cost is linear in entities times average reply-subtree size for matching
//! and `O(n log n)` for sorting, with no incremental update model — the full
//! output is recomputed on every call. That is the intended ceiling for the
//! expected scale of tens to low hundreds of entities per query.
//!
//! # Example
//!
//! ```
//! use branches_engine::run_discussions;
//! use branches_model::Discussion;
//! use branches_query::{QuerySpec, SearchScope, SortKey};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let discussions = vec![
//!     Discussion::new("d1", "Cats are great", "", "alice", now),
//!     Discussion::new("d2", "Dogs rule", "", "bob", now),
//! ];
//!
//! let spec = QuerySpec::search("cats").with_scope(SearchScope::Title);
//! let out = run_discussions(&discussions, &spec, now).unwrap();
//! assert_eq!(out.matched_count, 1);
//! assert_eq!(out.total, 2);
//! ```

#![warn(missing_docs)]

mod error;
mod fields;
pub mod filter;
pub mod matcher;
mod pipeline;
mod score;
pub mod sort;
pub mod tree;

pub use error::TreeError;
pub use fields::SearchFields;
pub use pipeline::{DiscussionResults, ReplyResults, run_discussions, run_replies};
pub use score::Relevance;
pub use tree::{GroupedRoots, PointGroup, ReplyNode, build_forest, group_roots};
