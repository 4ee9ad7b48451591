//! Case-insensitive substring matching over entities.
//!
//! Matching is plain lowercase substring containment: not tokenized, not
//! fuzzy. Queries arrive pre-normalized (trimmed and lowercased) from
//! [`branches_query::QuerySpec::normalized_search`]; a blank query never
//! reaches this module — the pipeline short-circuits it and retains
//! everything.

use std::collections::HashSet;

use branches_model::{AiPoint, Discussion, FactCheck, Reply};
use branches_query::SearchScope;

use crate::error::TreeError;
use crate::fields::SearchFields;
use crate::tree::{self, ReplyNode};

/// Lowercase substring containment. `needle` must already be lowercased.
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True if any claim's text, status, explanation, or source title contains
/// the query.
pub fn fact_check_matches(fact_check: &FactCheck, query: &str) -> bool {
    fact_check.claims.iter().any(|claim| {
        contains(&claim.text, query)
            || contains(claim.status.as_str(), query)
            || contains(&claim.explanation, query)
            || claim.sources.iter().any(|s| contains(&s.title, query))
    })
}

/// True if any point's text or kind tag contains the query.
pub fn points_match(points: &[AiPoint], query: &str) -> bool {
    points
        .iter()
        .any(|p| contains(&p.text, query) || contains(p.kind.as_str(), query))
}

/// The shared entity predicate: content, author name, fact-check bundle, or
/// AI points contain the query.
///
/// This is the whole predicate for replies; discussions add title and
/// reply-subtree matching on top via [`discussion_matches`].
pub fn matches_fields<T: SearchFields>(entity: &T, query: &str) -> bool {
    contains(entity.content(), query)
        || contains(entity.author_name(), query)
        || entity
            .fact_check()
            .is_some_and(|fc| fact_check_matches(fc, query))
        || points_match(entity.points(), query)
}

/// True if any reply in the list matches the shared predicate.
///
/// The list is a discussion's full flat reply set, so scanning it covers the
/// entire reply subtree.
fn any_reply_matches(replies: &[Reply], query: &str) -> bool {
    replies.iter().any(|r| matches_fields(r, query))
}

/// Scope-aware discussion matching.
///
/// `Title`, `Content`, and `FactCheck` restrict to the single field;
/// `Replies` excludes the discussion's own fields entirely; `All` takes the
/// union of everything including the reply subtree.
pub fn discussion_matches(discussion: &Discussion, query: &str, scope: SearchScope) -> bool {
    match scope {
        SearchScope::Title => contains(&discussion.title, query),
        SearchScope::Content => contains(&discussion.content, query),
        SearchScope::FactCheck => discussion
            .fact_check
            .as_ref()
            .is_some_and(|fc| fact_check_matches(fc, query)),
        SearchScope::Replies => any_reply_matches(&discussion.replies, query),
        SearchScope::All => {
            contains(&discussion.title, query)
                || matches_fields(discussion, query)
                || any_reply_matches(&discussion.replies, query)
        }
    }
}

/// True when the discussion's own fields (title, content, author,
/// fact-check, points) match, ignoring the reply subtree.
///
/// The pipeline uses this to decide whether a match under [`SearchScope::All`]
/// came from the discussion itself (full reply list kept) or only from the
/// subtree (reply list pruned to the matching branches).
pub fn discussion_self_matches(discussion: &Discussion, query: &str) -> bool {
    contains(&discussion.title, query) || matches_fields(discussion, query)
}

/// Prunes a discussion's reply list to the subtrees relevant to a search.
///
/// Search drills down: within a matching discussion, non-matching reply
/// branches are hidden. A reply is retained iff it matches, an ancestor
/// matches (context below a hit is kept), or a descendant matches (the path
/// down to a hit is kept). Input order is preserved.
///
/// Fails only on a cyclic parent graph, like tree construction itself.
pub fn prune_replies(replies: &[Reply], query: &str) -> Result<Vec<Reply>, TreeError> {
    let forest = tree::build_forest(replies)?;

    let mut keep: HashSet<String> = HashSet::new();
    for root in &forest {
        mark_kept(root, false, query, &mut keep);
    }

    Ok(replies
        .iter()
        .filter(|r| keep.contains(&r.id))
        .cloned()
        .collect())
}

/// Marks nodes to keep; returns whether this subtree contains a match.
fn mark_kept(
    node: &ReplyNode,
    ancestor_matched: bool,
    query: &str,
    keep: &mut HashSet<String>,
) -> bool {
    let self_match = matches_fields(&node.reply, query);
    let mut subtree_match = self_match;
    for child in &node.children {
        if mark_kept(child, ancestor_matched || self_match, query, keep) {
            subtree_match = true;
        }
    }
    if subtree_match || ancestor_matched {
        keep.insert(node.reply.id.clone());
    }
    subtree_match
}
