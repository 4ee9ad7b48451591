//! Data model for the branches discussion engine.
//!
//! This crate defines the plain-data entity types the engine operates on:
//!
//! - [`Discussion`]: a top-level post with its flat reply list
//! - [`Reply`]: a response to a discussion, another reply, or an AI point
//! - [`AiPoint`]: a short AI-extracted statement used as a grouping/matching key
//! - [`FactCheck`]: a bundle of verified/unverified claims with sources
//!
//! All types are supplied by external collaborators (persistence, AI
//! generation) and consumed read-only by the engine. They deserialize
//! leniently: absent optional fields and counters default to empty/zero, so
//! partial documents never fail to load.

#![warn(missing_docs)]

mod discussion;
mod factcheck;
mod point;
mod reply;

pub use discussion::Discussion;
pub use factcheck::{ClaimStatus, FactCheck, FactCheckClaim, Source};
pub use point::{AiPoint, PointKind};
pub use reply::Reply;
