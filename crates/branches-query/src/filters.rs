//! Filter predicates.
//!
//! A [`Filters`] value is a conjunction of independently optional predicates:
//! any field left at its default is skipped entirely during evaluation. The
//! zero value therefore passes every entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Age bucket for the creation-date filter.
///
/// Buckets are measured against an evaluation-time "now" supplied by the
/// caller, so a query re-run later can legitimately return a different set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// No age constraint (default).
    #[default]
    All,
    /// Created within the last day.
    Today,
    /// Created within the last 7 days.
    Week,
    /// Created within the last 30 days.
    Month,
}

impl DateRange {
    /// Parses a bucket name, falling back to [`DateRange::All`] for anything
    /// unrecognized.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "today" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::All,
        }
    }

    /// Maximum entity age in days for this bucket, or `None` for no bound.
    pub fn max_age_days(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Today => Some(1),
            Self::Week => Some(7),
            Self::Month => Some(30),
        }
    }

    /// Returns the canonical wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full filter set attached to a query.
///
/// Predicates that do not apply to an entity kind are skipped for that kind:
/// `points_earned` only constrains replies, `has_replies` and `claim` only
/// constrain discussions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    /// Case-insensitive substring match against the author display name.
    /// Blank ⇒ skipped.
    pub author: String,

    /// Require a fact-check bundle to be present.
    pub has_fact_check: bool,

    /// Require the AI-point list to be non-empty.
    pub has_points: bool,

    /// Require the viewing user to have earned points from the entity.
    /// Replies only; skipped for discussions.
    pub points_earned: bool,

    /// Creation-date age bucket.
    pub date_range: DateRange,

    /// Minimum view count. 0 ⇒ skipped.
    pub min_views: u64,

    /// Minimum net vote score (upvotes − downvotes). 0 ⇒ skipped.
    ///
    /// The UI labels this "minimum likes".
    pub min_net_score: i64,

    /// Require at least one reply. Discussions only; skipped for replies.
    pub has_replies: bool,

    /// Case-insensitive substring match against fact-check claim text.
    /// Discussions only; blank ⇒ skipped.
    pub claim: String,
}

impl Filters {
    /// True when every predicate is at its default, i.e. the filter passes
    /// all entities without inspection.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
