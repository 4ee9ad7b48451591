//! Filter evaluation.
//!
//! A [`Filters`] value is a conjunction of independently optional predicates.
//! Predicates at their default are skipped, and predicates an entity kind
//! does not support (points-earned on discussions, has-replies on replies)
//! are skipped too, never failed.
//!
//! "Now" is an explicit argument rather than a clock read so the whole
//! pipeline stays a pure function. Date buckets measured against a moving
//! "now" legitimately shift between evaluations.

use branches_query::Filters;
use chrono::{DateTime, Duration, Utc};

use crate::fields::SearchFields;
use crate::matcher;

/// Evaluates the full filter conjunction against one entity.
pub fn passes<T: SearchFields>(entity: &T, filters: &Filters, now: DateTime<Utc>) -> bool {
    if !filters.author.is_empty() {
        let author = filters.author.trim().to_lowercase();
        if !entity.author_name().to_lowercase().contains(&author) {
            return false;
        }
    }

    if filters.has_fact_check && entity.fact_check().is_none() {
        return false;
    }

    if filters.has_points && entity.points().is_empty() {
        return false;
    }

    if filters.points_earned && !entity.points_earned().unwrap_or(true) {
        return false;
    }

    if let Some(max_age_days) = filters.date_range.max_age_days()
        && now - entity.created_at() > Duration::days(max_age_days)
    {
        return false;
    }

    if filters.min_views > 0 && entity.views() < filters.min_views {
        return false;
    }

    if filters.min_net_score != 0 && entity.net_score() < filters.min_net_score {
        return false;
    }

    if filters.has_replies && !entity.reply_count().is_none_or(|count| count > 0) {
        return false;
    }

    if !filters.claim.is_empty() {
        let claim = filters.claim.trim().to_lowercase();
        let matched = entity
            .fact_check()
            .is_some_and(|fc| matcher::fact_check_matches(fc, &claim));
        if !matched {
            return false;
        }
    }

    true
}
