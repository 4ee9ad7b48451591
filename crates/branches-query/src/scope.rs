//! Search scope selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which fields of a discussion the search text is matched against.
///
/// Scopes apply to discussion queries only; reply queries always match the
/// reply's own fields (content, author, fact-check, points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Match the discussion itself and its full reply subtree (default).
    #[default]
    All,
    /// Match the title field only.
    Title,
    /// Match the body content only.
    Content,
    /// Match the fact-check bundle only.
    #[serde(rename = "factcheck")]
    FactCheck,
    /// Match only the reply subtree; the discussion's own fields are excluded.
    Replies,
}

impl SearchScope {
    /// Parses a scope name, falling back to [`SearchScope::All`] for anything
    /// unrecognized.
    ///
    /// Case-insensitive; accepts the UI aliases `factcheck` and `fact-check`.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "title" => Self::Title,
            "content" => Self::Content,
            "factcheck" | "fact-check" | "fact_check" => Self::FactCheck,
            "replies" => Self::Replies,
            _ => Self::All,
        }
    }

    /// Returns the canonical wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Title => "title",
            Self::Content => "content",
            Self::FactCheck => "factcheck",
            Self::Replies => "replies",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
