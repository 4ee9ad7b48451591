//! Field access for searchable entities.
//!
//! Discussions and replies share most of their searchable surface (content,
//! author, fact-check, AI points, counters) but differ at the edges: only
//! discussions have a title and a reply list, only replies carry the
//! points-earned signal. The [`SearchFields`] trait captures that capability
//! set so the matcher, scorer, filter evaluator, and comparator are written
//! once instead of per entity kind.

use branches_model::{AiPoint, Discussion, FactCheck, Reply};
use chrono::{DateTime, Utc};

/// The capability set the engine needs from an entity.
///
/// Optional capabilities return `Option`: `None` means the entity kind has no
/// such attribute and any predicate over it is skipped, never failed.
pub trait SearchFields {
    /// Title text, for entities that have one.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Body content text.
    fn content(&self) -> &str;

    /// Author display name.
    fn author_name(&self) -> &str;

    /// Attached fact-check bundle, if any.
    fn fact_check(&self) -> Option<&FactCheck>;

    /// Attached AI points.
    fn points(&self) -> &[AiPoint];

    /// Creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;

    /// Net vote score (upvotes − downvotes).
    fn net_score(&self) -> i64;

    /// View count.
    fn views(&self) -> u64;

    /// Number of associated replies, for entities that carry a reply list.
    fn reply_count(&self) -> Option<usize> {
        None
    }

    /// Whether the viewing user earned points from this entity, for entities
    /// that carry that signal.
    fn points_earned(&self) -> Option<bool> {
        None
    }
}

impl SearchFields for Discussion {
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn author_name(&self) -> &str {
        &self.author_name
    }

    fn fact_check(&self) -> Option<&FactCheck> {
        self.fact_check.as_ref()
    }

    fn points(&self) -> &[AiPoint] {
        &self.points
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn net_score(&self) -> i64 {
        self.net_score()
    }

    fn views(&self) -> u64 {
        self.views
    }

    fn reply_count(&self) -> Option<usize> {
        Some(self.replies.len())
    }
}

impl SearchFields for Reply {
    fn content(&self) -> &str {
        &self.content
    }

    fn author_name(&self) -> &str {
        &self.author_name
    }

    fn fact_check(&self) -> Option<&FactCheck> {
        self.fact_check.as_ref()
    }

    fn points(&self) -> &[AiPoint] {
        &self.points
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn net_score(&self) -> i64 {
        self.net_score()
    }

    fn views(&self) -> u64 {
        self.views
    }

    fn points_earned(&self) -> Option<bool> {
        Some(self.points_earned.is_some())
    }
}
