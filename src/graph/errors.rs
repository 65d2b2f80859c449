//! Error types for checked graph construction and mutation.

use thiserror::Error;

/// Errors raised by the checked construction and insertion paths.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Out-of-range ids are never silently clamped: the checked paths reject them
/// before any mutation takes place. Broken internal invariants are defects of
/// this crate, not runtime conditions, and are reported by
/// [`BipartiteGraph::check_consistency`](crate::BipartiteGraph::check_consistency)
/// panicking rather than through this type.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A supplied type-1 node id is not below the current type-1 node count.
    #[error("type-1 node id {id} out of range (graph has {count} type-1 nodes)")]
    OutOfRange1 { id: usize, count: usize },

    /// A supplied type-2 node id is not below the current type-2 node count.
    #[error("type-2 node id {id} out of range (graph has {count} type-2 nodes)")]
    OutOfRange2 { id: usize, count: usize },
}
