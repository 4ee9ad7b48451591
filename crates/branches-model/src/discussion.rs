//! Top-level discussion posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AiPoint, FactCheck, Reply};

/// A top-level post with its associated replies.
///
/// Discussions carry their full flat reply list; the association is ground
/// truth at query time for reply counting, subtree search, and grouping.
/// Counters and voter sets are maintained by external collaborators; the
/// engine reads them and never writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    /// Opaque unique identifier, immutable once created.
    pub id: String,

    /// Title text (≤100 chars by application policy, not enforced here).
    #[serde(default)]
    pub title: String,

    /// Body content.
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

    /// Short labels attached by the author (≤5 by application policy).
    #[serde(default)]
    pub tags: Vec<String>,

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

    /// All replies to this discussion, as a flat list with parent references.
    ///
    /// Sibling order within the list is meaningful: it is the order replies
    /// were created in, and tree construction preserves it.
    #[serde(default)]
    pub replies: Vec<Reply>,

    /// AI points extracted from the discussion, if generated.
    #[serde(default)]
    pub points: Vec<AiPoint>,

    /// Fact-check bundle for the discussion, if one was generated.
    #[serde(default)]
    pub fact_check: Option<FactCheck>,

    /// Permalink slug derived from the title by an external collaborator.
    /// Opaque to the engine.
    #[serde(default)]
    pub slug: Option<String>,
}

impl Discussion {
    /// Creates a minimal discussion; remaining fields start at their defaults.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author_id: String::new(),
            author_name: author_name.into(),
            created_at,
            edited_at: None,
            tags: Vec::new(),
            upvotes: 0,
            downvotes: 0,
            upvoted_by: Vec::new(),
            downvoted_by: Vec::new(),
            views: 0,
            replies: Vec::new(),
            points: Vec::new(),
            fact_check: None,
            slug: None,
        }
    }

    /// Net vote score: upvotes minus downvotes.
    ///
    /// The application UI labels this "likes"; the raw counters stay separate
    /// and this derived value is what sorting and filtering use.
    pub fn net_score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    /// Number of replies currently associated with this discussion.
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}
