//! # Quickbeam
//!
//! Immutable generic binary trees with post-order identifier
//! annotation.
//!
//! A [`Tree`] is a sum type over `Leaf` (terminal, no value) and
//! `Branch` (a value plus two owned subtrees). [`Tree::annotate`]
//! produces a structurally identical tree whose branch values are
//! paired with sequential ids, assigned left subtree first, right
//! subtree second, node last - so a tree with N branches numbered
//! from `start` carries exactly the ids `start..start + N`, each once.
//! The next unused id is returned alongside, letting repeated calls
//! compose into one contiguous numbering.
//!
//! ## Architecture
//!
//! - **Tree**: the nested, boxed representation and its queries
//! - **Annotation**: recursive numbering, plus a depth-limited
//!   fallible variant driven by [`AnnotateContext`]
//! - **Arena**: the same tree flattened into a `Vec`, with an
//!   explicit-stack annotation that is safe on arbitrarily deep trees
//! - **Paths**: an alternative labelling by root-to-node turns
//!
//! ## Example
//!
//! ```
//! use quickbeam::Tree;
//!
//! let tree = Tree::branch(
//!     "a",
//!     Tree::branch("b", Tree::leaf(), Tree::leaf()),
//!     Tree::branch(
//!         "c",
//!         Tree::leaf(),
//!         Tree::branch("d", Tree::leaf(), Tree::leaf()),
//!     ),
//! );
//!
//! let (annotated, next) = tree.annotate(0);
//! assert_eq!(next, 4);
//! assert_eq!(annotated.ids(), vec![0, 1, 2, 3]);
//! assert_eq!(annotated.value(), Some(&("a", 3)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotate;
pub mod arena;
pub mod context;
pub mod error;
pub mod tree;

// Re-export main types
pub use annotate::{TreePath, Turn};
pub use arena::{ArenaNode, ArenaTree, NodeIndex};
pub use context::AnnotateContext;
pub use error::{AnnotateError, ArenaError, Result};
pub use tree::{Annotated, IterPost, NodeId, Tree};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
