//! Fact-check bundles.
//!
//! A fact-check is produced by an external AI collaborator and attached to a
//! discussion or reply. The engine only reads it: search text is matched
//! against claim text, status, explanation, and source titles.

use serde::{Deserialize, Serialize};

/// Verification status assigned to a single claim.
///
/// Unknown statuses from the generation collaborator are kept verbatim in
/// [`ClaimStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    /// The claim checks out against the cited evidence.
    Verified,
    /// Parts of the claim check out; parts do not.
    PartiallyVerified,
    /// No supporting evidence was found either way.
    Unverified,
    /// The claim is contradicted by the cited evidence.
    False,
    /// Any status this crate does not know about.
    Other(String),
}

impl ClaimStatus {
    /// Returns the wire/display name for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Verified => "verified",
            Self::PartiallyVerified => "partially_verified",
            Self::Unverified => "unverified",
            Self::False => "false",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "verified" => Self::Verified,
            "partially_verified" => Self::PartiallyVerified,
            "unverified" => Self::Unverified,
            "false" => Self::False,
            _ => Self::Other(s),
        }
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A cited source backing a claim's verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Human-readable source title.
    pub title: String,
    /// Link to the source material.
    #[serde(default)]
    pub url: String,
}

/// A single fact-checked claim with its verdict and supporting material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckClaim {
    /// The claim text as extracted from the entity.
    pub text: String,
    /// The verification verdict.
    pub status: ClaimStatus,
    /// Explanation of how the verdict was reached.
    #[serde(default)]
    pub explanation: String,
    /// Evidence excerpts considered during verification.
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Sources cited for the verdict.
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// The full fact-check result attached to a discussion or reply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactCheck {
    /// The checked claims, in the order the collaborator produced them.
    #[serde(default)]
    pub claims: Vec<FactCheckClaim>,
}

impl FactCheck {
    /// Creates a fact-check bundle from a list of claims.
    pub fn new(claims: Vec<FactCheckClaim>) -> Self {
        Self { claims }
    }
}
