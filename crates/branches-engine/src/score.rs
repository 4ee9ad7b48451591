//! Relevance scoring.
//!
//! Scores combine weighted field matches with a logarithmically diminishing
//! engagement boost. They are pure functions of entity plus query and only
//! consulted when the sort key is relevance and the search is non-blank.
//! Ties are broken newest-first by the comparator, then by stable sort order.

use branches_model::{Discussion, Reply};

use crate::fields::SearchFields;
use crate::matcher;

/// Weight for a title substring match (discussions).
const TITLE_MATCH: f64 = 10.0;
/// Additional weight when the query equals the whole title (discussions).
const TITLE_EXACT_BONUS: f64 = 20.0;
/// Weight per non-overlapping content occurrence (discussions).
const DISCUSSION_CONTENT_OCCURRENCE: f64 = 3.0;
/// Weight for an author-name match (discussions).
const DISCUSSION_AUTHOR_MATCH: f64 = 5.0;
/// Weight for any fact-check match (discussions).
const DISCUSSION_FACT_CHECK_MATCH: f64 = 7.0;
/// Weight for any AI-point match (discussions).
const DISCUSSION_POINTS_MATCH: f64 = 5.0;
/// Flat bonus when any reply in the subtree matches (not per match).
const SUBTREE_MATCH: f64 = 2.0;

/// Weight per non-overlapping content occurrence (replies).
const REPLY_CONTENT_OCCURRENCE: f64 = 5.0;
/// Weight for an author-name match (replies).
const REPLY_AUTHOR_MATCH: f64 = 3.0;
/// Weight for any fact-check match (replies).
const REPLY_FACT_CHECK_MATCH: f64 = 4.0;
/// Weight for any AI-point match (replies).
const REPLY_POINTS_MATCH: f64 = 3.0;

/// Engagement coefficient on net score.
const NET_SCORE_BOOST: f64 = 0.5;
/// Engagement coefficient on views.
const VIEWS_BOOST: f64 = 0.3;
/// Engagement coefficient on reply count.
const REPLY_COUNT_BOOST: f64 = 0.4;
/// Engagement coefficient on a reply's views.
const REPLY_VIEWS_BOOST: f64 = 0.5;

/// Counts non-overlapping occurrences of `query` in `text`, case-insensitive.
/// `query` must already be lowercased and non-empty.
fn count_occurrences(text: &str, query: &str) -> usize {
    text.to_lowercase().matches(query).count()
}

/// Entities that can be relevance-scored against a query.
pub trait Relevance {
    /// Computes the relevance score for a pre-normalized, non-blank query.
    fn relevance(&self, query: &str) -> f64;
}

impl Relevance for Discussion {
    fn relevance(&self, query: &str) -> f64 {
        let mut score = 0.0;

        let title = self.title.trim().to_lowercase();
        if title.contains(query) {
            score += TITLE_MATCH;
            if title == query {
                score += TITLE_EXACT_BONUS;
            }
        }

        score += count_occurrences(&self.content, query) as f64 * DISCUSSION_CONTENT_OCCURRENCE;

        if self.author_name.to_lowercase().contains(query) {
            score += DISCUSSION_AUTHOR_MATCH;
        }
        if self
            .fact_check
            .as_ref()
            .is_some_and(|fc| matcher::fact_check_matches(fc, query))
        {
            score += DISCUSSION_FACT_CHECK_MATCH;
        }
        if matcher::points_match(&self.points, query) {
            score += DISCUSSION_POINTS_MATCH;
        }
        if self.replies.iter().any(|r| matcher::matches_fields(r, query)) {
            score += SUBTREE_MATCH;
        }

        // Negative net score contributes nothing rather than a NaN.
        score += NET_SCORE_BOOST * (self.net_score().max(0) as f64).ln_1p();
        score += VIEWS_BOOST * (self.views as f64).ln_1p();
        score += REPLY_COUNT_BOOST * (self.replies.len() as f64).ln_1p();

        score
    }
}

impl Relevance for Reply {
    fn relevance(&self, query: &str) -> f64 {
        let mut score = 0.0;

        score += count_occurrences(&self.content, query) as f64 * REPLY_CONTENT_OCCURRENCE;

        if self.author_name.to_lowercase().contains(query) {
            score += REPLY_AUTHOR_MATCH;
        }
        if self
            .fact_check()
            .is_some_and(|fc| matcher::fact_check_matches(fc, query))
        {
            score += REPLY_FACT_CHECK_MATCH;
        }
        if matcher::points_match(&self.points, query) {
            score += REPLY_POINTS_MATCH;
        }

        score += REPLY_VIEWS_BOOST * (self.views as f64).ln_1p();

        score
    }
}
