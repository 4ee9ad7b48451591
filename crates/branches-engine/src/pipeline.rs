//! The query/rank pipeline.
//!
//! Orchestrates the stages in their fixed, non-commutative order:
//! text match → filter → sort → (replies only) tree build and grouping.
//! Both entry points are pure functions: identical inputs, including the
//! explicit `now`, always yield identical output. No caching is performed;
//! callers that debounce or memoize own those policies.

use branches_model::{Discussion, Reply};
use branches_query::{QuerySpec, SearchScope};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::TreeError;
use crate::tree::{self, GroupedRoots};
use crate::{filter, matcher, sort};

/// Discussion query output: the ordered results plus the count summary for
/// "showing N of M" displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscussionResults {
    /// Matching discussions in sort order. Reply lists are pruned to the
    /// matching subtrees when the match came through replies.
    pub results: Vec<Discussion>,
    /// Size of the input collection.
    pub total: usize,
    /// Number of discussions that survived matching and filtering.
    pub matched_count: usize,
}

/// Reply query output: grouped root forests plus the count summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyResults {
    /// The sorted, matching replies as a forest, partitioned by target point.
    pub groups: GroupedRoots,
    /// Size of the input collection.
    pub total: usize,
    /// Number of flat replies that survived matching and filtering.
    pub matched_count: usize,
}

/// Runs the full pipeline over a discussion collection.
///
/// Stage 1 prunes by search text and scope. Under [`SearchScope::All`] a
/// discussion matched only through its reply subtree keeps just the matching
/// reply branches (search drills down); a discussion whose own fields match
/// keeps its full reply list. Under [`SearchScope::Replies`] the reply list
/// is always pruned. Stage 2 applies the filter conjunction, stage 3 the
/// sort comparator.
///
/// Fails only when a reply parent graph within a matched discussion is
/// cyclic.
pub fn run_discussions(
    discussions: &[Discussion],
    spec: &QuerySpec,
    now: DateTime<Utc>,
) -> Result<DiscussionResults, TreeError> {
    let total = discussions.len();
    let query = spec.normalized_search();

    let mut results: Vec<Discussion> = match query.as_deref() {
        // Blank query: no matching stage, every discussion flows through.
        None => discussions.to_vec(),
        Some(q) => {
            let mut matched = Vec::new();
            for discussion in discussions {
                if !matcher::discussion_matches(discussion, q, spec.scope) {
                    continue;
                }
                let mut kept = discussion.clone();
                let prune = match spec.scope {
                    SearchScope::Replies => true,
                    SearchScope::All => !matcher::discussion_self_matches(discussion, q),
                    _ => false,
                };
                if prune {
                    kept.replies = matcher::prune_replies(&discussion.replies, q)?;
                }
                matched.push(kept);
            }
            matched
        }
    };

    results.retain(|d| filter::passes(d, &spec.filters, now));

    let key = spec.effective_sort();
    results.sort_by(|a, b| sort::compare(a, b, key, query.as_deref()));

    let matched_count = results.len();
    Ok(DiscussionResults {
        results,
        total,
        matched_count,
    })
}

/// Runs the full pipeline over a flat reply collection.
///
/// Replies are matched unscoped against their own fields, filtered, sorted
/// flat, and only then assembled into a forest and grouped by target point —
/// so sibling order within the forest is the sort order, and replies whose
/// parents were filtered out surface as roots per the orphan fallback.
pub fn run_replies(
    replies: &[Reply],
    spec: &QuerySpec,
    now: DateTime<Utc>,
) -> Result<ReplyResults, TreeError> {
    let total = replies.len();
    let query = spec.normalized_search();

    let mut flat: Vec<Reply> = match query.as_deref() {
        None => replies.to_vec(),
        Some(q) => replies
            .iter()
            .filter(|r| matcher::matches_fields(*r, q))
            .cloned()
            .collect(),
    };

    flat.retain(|r| filter::passes(r, &spec.filters, now));

    let key = spec.effective_sort();
    flat.sort_by(|a, b| sort::compare(a, b, key, query.as_deref()));

    let matched_count = flat.len();
    let groups = tree::group_roots(tree::build_forest(&flat)?);

    Ok(ReplyResults {
        groups,
        total,
        matched_count,
    })
}
