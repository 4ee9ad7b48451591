//! Sort key selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ordering applied to query results.
///
/// The application UI labels [`SortKey::NetScore`] as "most liked", but the
/// value actually sorted is upvotes minus downvotes. The alias is accepted by
/// [`SortKey::parse`] and kept out of the type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending by creation timestamp (default).
    #[default]
    Newest,
    /// Ascending by creation timestamp.
    Oldest,
    /// Descending by net vote score (upvotes − downvotes).
    #[serde(rename = "netscore")]
    NetScore,
    /// Descending by view count.
    Views,
    /// Descending by reply count. Discussions only; a no-op key for replies.
    Replies,
    /// Ascending by author display name.
    Author,
    /// Descending by number of attached AI points.
    Points,
    /// Descending by relevance score. Only meaningful with a non-blank
    /// search; a blank search degrades this to [`SortKey::Newest`].
    Relevance,
}

impl SortKey {
    /// Parses a sort key name, falling back to [`SortKey::Newest`] for
    /// anything unrecognized.
    ///
    /// Case-insensitive; `likes` and `most-liked` are accepted as aliases for
    /// [`SortKey::NetScore`].
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "netscore" | "net-score" | "net_score" | "likes" | "most-liked" => Self::NetScore,
            "views" | "most-viewed" => Self::Views,
            "replies" | "most-replied" => Self::Replies,
            "author" | "by-author" => Self::Author,
            "points" | "most-points" => Self::Points,
            "relevance" => Self::Relevance,
            _ => Self::Newest,
        }
    }

    /// Returns the canonical wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::NetScore => "netscore",
            Self::Views => "views",
            Self::Replies => "replies",
            Self::Author => "author",
            Self::Points => "points",
            Self::Relevance => "relevance",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_keys() {
        assert_eq!(SortKey::parse("newest"), SortKey::Newest);
        assert_eq!(SortKey::parse("oldest"), SortKey::Oldest);
        assert_eq!(SortKey::parse("views"), SortKey::Views);
        assert_eq!(SortKey::parse("Relevance"), SortKey::Relevance);
    }

    #[test]
    fn likes_is_an_alias_for_net_score() {
        assert_eq!(SortKey::parse("likes"), SortKey::NetScore);
        assert_eq!(SortKey::parse("most-liked"), SortKey::NetScore);
        assert_eq!(SortKey::parse("netscore"), SortKey::NetScore);
    }

    #[test]
    fn unknown_key_falls_back_to_newest() {
        assert_eq!(SortKey::parse("hotness"), SortKey::Newest);
        assert_eq!(SortKey::parse(""), SortKey::Newest);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in [
            SortKey::Newest,
            SortKey::Oldest,
            SortKey::NetScore,
            SortKey::Views,
            SortKey::Replies,
            SortKey::Author,
            SortKey::Points,
            SortKey::Relevance,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }
}
