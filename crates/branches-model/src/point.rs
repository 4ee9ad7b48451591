//! AI-extracted points.
//!
//! Points are short statements an external generation collaborator extracts
//! from a discussion or reply. The engine treats them as read-only input:
//! they are matched against search text and used as grouping keys for
//! root-level replies, never created or edited here.

use serde::{Deserialize, Serialize};

/// The category tag attached to an extracted point.
///
/// The set of tags is owned by the generation collaborator; unknown tags are
/// preserved verbatim in [`PointKind::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PointKind {
    /// A factual assertion made in the text.
    Claim,
    /// Supporting material for a claim.
    Evidence,
    /// A suggested course of action.
    Recommendation,
    /// An open question raised by the text.
    Question,
    /// A topic or theme identified in the text.
    Topic,
    /// Any tag this crate does not know about.
    Other(String),
}

impl PointKind {
    /// Returns the wire/display name for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Claim => "claim",
            Self::Evidence => "evidence",
            Self::Recommendation => "recommendation",
            Self::Question => "question",
            Self::Topic => "topic",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PointKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "claim" => Self::Claim,
            "evidence" => Self::Evidence,
            "recommendation" => Self::Recommendation,
            "question" => Self::Question,
            "topic" => Self::Topic,
            _ => Self::Other(s),
        }
    }
}

impl From<PointKind> for String {
    fn from(kind: PointKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A short AI-extracted statement with an identity and a category tag.
///
/// Point text is short by convention (~100 chars); the engine does not
/// enforce the limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiPoint {
    /// Opaque unique identifier, stable across queries.
    pub id: String,
    /// The extracted statement text.
    pub text: String,
    /// Category tag assigned by the generation collaborator.
    #[serde(rename = "type")]
    pub kind: PointKind,
}

impl AiPoint {
    /// Creates a point with the given id, text, and kind.
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: PointKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_round_trip() {
        for (name, kind) in [
            ("claim", PointKind::Claim),
            ("evidence", PointKind::Evidence),
            ("recommendation", PointKind::Recommendation),
            ("question", PointKind::Question),
            ("topic", PointKind::Topic),
        ] {
            assert_eq!(PointKind::from(name.to_string()), kind);
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let kind = PointKind::from("counterpoint".to_string());
        assert_eq!(kind, PointKind::Other("counterpoint".to_string()));
        assert_eq!(kind.as_str(), "counterpoint");
    }

    #[test]
    fn point_serde_uses_type_field() {
        let point = AiPoint::new("p1", "Cats are independent", PointKind::Claim);
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"type\":\"claim\""));

        let back: AiPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
