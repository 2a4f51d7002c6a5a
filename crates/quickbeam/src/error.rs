//! Error types for Quickbeam operations

use thiserror::Error;

/// Errors raised by the fallible annotation entry points.
///
/// The plain recursive annotation is total over finite trees and never
/// returns these; they only surface from [`Tree::try_annotate`] (depth
/// limits, interruption) and from [`Annotated::verify`].
///
/// [`Tree::try_annotate`]: crate::Tree::try_annotate
/// [`Annotated::verify`]: crate::Annotated::verify
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    /// Recursion depth exceeded the context's limit
    #[error("depth limit exceeded: reached depth {depth}, limit is {max_depth}")]
    DepthLimitExceeded {
        /// Depth at which the traversal gave up
        depth: usize,
        /// Configured limit
        max_depth: usize,
    },

    /// The context's interrupt flag was raised mid-traversal
    #[error("annotation interrupted")]
    Interrupted,

    /// An annotated tree failed invariant verification
    #[error("invalid labelling: {reason}")]
    InvalidLabelling {
        /// Which invariant was violated, human-readable
        reason: String,
    },
}

/// Errors raised when reading or rebuilding an arena tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena has no root node
    #[error("arena is empty")]
    Empty,

    /// A node index does not exist in the arena
    #[error("index {0} is out of bounds")]
    IndexOutOfBounds(usize),

    /// A child index refers back into an already-visited node
    #[error("cycle detected at index {0}")]
    CycleDetected(usize),

    /// A node is not reachable from the root
    #[error("node at index {0} is unreachable from the root")]
    Unreachable(usize),
}

/// Result type alias for Quickbeam operations
pub type Result<T, E = AnnotateError> = std::result::Result<T, E>;
