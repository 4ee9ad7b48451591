//! Error types for the engine.
//!
//! The engine performs no I/O, so its error surface is a single genuine
//! defect: a cyclic reply-parent graph, which the data model does not
//! structurally forbid. Everything else (missing fields, unknown query
//! strings, orphaned parent references) is absorbed by documented fallbacks.

use thiserror::Error;

/// Errors raised during reply-tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A reply's parent chain loops back on itself.
    ///
    /// The engine fails fast rather than attempting to repair the data;
    /// fixing the graph is the persistence collaborator's job.
    #[error("cyclic parent chain detected at reply {reply_id}")]
    CyclicParentChain {
        /// The reply at which the cycle was detected.
        reply_id: String,
    },
}
