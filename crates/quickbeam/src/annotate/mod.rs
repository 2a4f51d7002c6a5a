//! Post-order identifier annotation
//!
//! The traversal is strictly sequential: the right subtree's starting
//! id depends on how many ids the left subtree consumed, and a branch
//! takes its own id only after both subtrees are numbered.

pub mod index;
pub mod path;

use tracing::trace;

use crate::context::AnnotateContext;
use crate::error::{AnnotateError, Result};
use crate::tree::{Annotated, NodeId, Tree};

pub use path::{Turn, TreePath};

impl<T> Tree<T> {
    /// Annotate every branch with a sequential id, starting at `start`.
    ///
    /// Returns the fresh annotated tree together with the next unused
    /// id, so repeated calls over several trees compose into one
    /// contiguous numbering. The input is only borrowed and never
    /// mutated; values are cloned into the new nodes. Leaves consume
    /// no id.
    ///
    /// # Example
    ///
    /// ```
    /// use quickbeam::Tree;
    ///
    /// let tree = Tree::branch("b", Tree::leaf(), Tree::leaf());
    /// let (annotated, next) = tree.annotate(0);
    ///
    /// assert_eq!(annotated.value(), Some(&("b", 0)));
    /// assert_eq!(next, 1);
    /// ```
    pub fn annotate(&self, start: NodeId) -> (Annotated<T>, NodeId)
    where
        T: Clone,
    {
        trace!(start, branches = self.len(), "annotate");
        annotate_ref(self, start)
    }

    /// Consuming variant of [`Tree::annotate`], for value types that
    /// are not `Clone`.
    pub fn into_annotated(self, start: NodeId) -> (Annotated<T>, NodeId) {
        annotate_move(self, start)
    }

    /// Annotate under a depth limit and interrupt flag.
    ///
    /// Identical numbering to [`Tree::annotate`] on success. Fails with
    /// [`AnnotateError::DepthLimitExceeded`] when the tree is deeper
    /// than the context allows, or [`AnnotateError::Interrupted`] if
    /// the context's interrupt flag is raised mid-traversal.
    pub fn try_annotate(
        &self,
        start: NodeId,
        ctx: &AnnotateContext,
    ) -> Result<(Annotated<T>, NodeId)>
    where
        T: Clone,
    {
        try_annotate_at(self, start, ctx, 0)
    }
}

fn annotate_ref<T: Clone>(tree: &Tree<T>, start: NodeId) -> (Annotated<T>, NodeId) {
    match tree {
        Tree::Leaf => (Tree::Leaf, start),
        Tree::Branch { value, left, right } => {
            let (left, mid) = annotate_ref(left, start);
            let (right, end) = annotate_ref(right, mid);
            let branch = Tree::Branch {
                value: (value.clone(), end),
                left: Box::new(left),
                right: Box::new(right),
            };
            (branch, end + 1)
        }
    }
}

fn annotate_move<T>(tree: Tree<T>, start: NodeId) -> (Annotated<T>, NodeId) {
    match tree {
        Tree::Leaf => (Tree::Leaf, start),
        Tree::Branch { value, left, right } => {
            let (left, mid) = annotate_move(*left, start);
            let (right, end) = annotate_move(*right, mid);
            let branch = Tree::Branch {
                value: (value, end),
                left: Box::new(left),
                right: Box::new(right),
            };
            (branch, end + 1)
        }
    }
}

fn try_annotate_at<T: Clone>(
    tree: &Tree<T>,
    start: NodeId,
    ctx: &AnnotateContext,
    depth: usize,
) -> Result<(Annotated<T>, NodeId)> {
    if ctx.is_interrupted() {
        return Err(AnnotateError::Interrupted);
    }
    if depth > ctx.max_depth {
        return Err(AnnotateError::DepthLimitExceeded {
            depth,
            max_depth: ctx.max_depth,
        });
    }

    match tree {
        Tree::Leaf => Ok((Tree::Leaf, start)),
        Tree::Branch { value, left, right } => {
            let (left, mid) = try_annotate_at(left, start, ctx, depth + 1)?;
            let (right, end) = try_annotate_at(right, mid, ctx, depth + 1)?;
            let branch = Tree::Branch {
                value: (value.clone(), end),
                left: Box::new(left),
                right: Box::new(right),
            };
            Ok((branch, end + 1))
        }
    }
}

impl<T> Annotated<T> {
    /// Check the labelling invariants.
    ///
    /// A tree with N branches annotated from `start` must carry the ids
    /// `start..start + N` in exact post-order: the k-th branch visited
    /// (left subtree, right subtree, node) holds id `start + k`. That
    /// single condition implies contiguity, uniqueness, and the
    /// ordering property that every branch's id exceeds everything in
    /// its left and right subtrees.
    pub fn verify(&self, start: NodeId) -> Result<()> {
        let mut expected = start;
        for (_, id) in self.iter_post() {
            if *id != expected {
                return Err(AnnotateError::InvalidLabelling {
                    reason: format!("expected id {} in post-order, found {}", expected, id),
                });
            }
            expected += 1;
        }
        Ok(())
    }
}
