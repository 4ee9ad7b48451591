//! Replies to discussions, other replies, and AI points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AiPoint, FactCheck};

/// A response within a discussion.
///
/// A reply can target three things, encoded by two optional references:
///
/// - `parent_reply_id = None`, `target_point_id = None`: a root reply to the
///   discussion itself
/// - `parent_reply_id = None`, `target_point_id = Some(p)`: a root reply
///   anchored to the AI point `p` (used for point grouping)
/// - `parent_reply_id = Some(r)`: a child of reply `r`; its own
///   `target_point_id` is ignored for grouping since only roots are bucketed
///
/// The parent graph is expected to be acyclic with all parents present in the
/// same discussion's reply set. The engine promotes a reply whose parent is
/// absent to a root rather than dropping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Opaque identifier, unique within the parent discussion.
    pub id: String,

    /// The reply body text.
    #[serde(default)]
    pub content: String,

    /// Author's opaque user id.
    #[serde(default)]
    pub author_id: String,

    /// Author's display name at creation time.
    #[serde(default)]
    pub author_name: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last edit, if any.
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,

    /// The reply this one responds to, or `None` for a root reply.
    #[serde(default)]
    pub parent_reply_id: Option<String>,

    /// The AI point this root reply is anchored to, if any.
    #[serde(default)]
    pub target_point_id: Option<String>,

    /// Raw upvote count.
    #[serde(default)]
    pub upvotes: u64,

    /// Raw downvote count.
    #[serde(default)]
    pub downvotes: u64,

    /// User ids that upvoted, used by callers to prevent double-voting.
    #[serde(default)]
    pub upvoted_by: Vec<String>,

    /// User ids that downvoted.
    #[serde(default)]
    pub downvoted_by: Vec<String>,

    /// View count.
    #[serde(default)]
    pub views: u64,

    /// AI points extracted from this reply, enabling replies to replies
    /// anchored at a point.
    #[serde(default)]
    pub points: Vec<AiPoint>,

    /// Fact-check bundle for this reply, if one was generated.
    #[serde(default)]
    pub fact_check: Option<FactCheck>,

    /// Gamification points the current viewing user earned from this reply.
    ///
    /// `Some(n)` means the viewer earned `n` points; the engine treats this
    /// only as a filterable attribute and never interprets the amount.
    #[serde(default)]
    pub points_earned: Option<u32>,
}

impl Reply {
    /// Creates a minimal root reply; remaining fields start at their defaults.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        author_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author_id: String::new(),
            author_name: author_name.into(),
            created_at,
            edited_at: None,
            parent_reply_id: None,
            target_point_id: None,
            upvotes: 0,
            downvotes: 0,
            upvoted_by: Vec::new(),
            downvoted_by: Vec::new(),
            views: 0,
            points: Vec::new(),
            fact_check: None,
            points_earned: None,
        }
    }

    /// Net vote score: upvotes minus downvotes.
    ///
    /// The application UI labels this "likes"; the raw counters stay separate
    /// and this derived value is what sorting and filtering use.
    pub fn net_score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    /// True if this reply is a root (responds to the discussion, not to
    /// another reply).
    pub fn is_root(&self) -> bool {
        self.parent_reply_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn net_score_subtracts_downvotes() {
        let mut reply = Reply::new(
            "r1",
            "content",
            "alice",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        reply.upvotes = 3;
        reply.downvotes = 5;
        assert_eq!(reply.net_score(), -2);
    }

    #[test]
    fn partial_json_deserializes_with_defaults() {
        let json = r#"{"id": "r1", "created_at": "2024-01-01T00:00:00Z"}"#;
        let reply: Reply = serde_json::from_str(json).unwrap();
        assert!(reply.is_root());
        assert!(reply.content.is_empty());
        assert_eq!(reply.upvotes, 0);
        assert!(reply.fact_check.is_none());
        assert!(reply.points_earned.is_none());
    }

    #[test]
    fn child_reply_is_not_root() {
        let mut reply = Reply::new(
            "r2",
            "nested",
            "bob",
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        );
        reply.parent_reply_id = Some("r1".to_string());
        assert!(!reply.is_root());
    }
}
