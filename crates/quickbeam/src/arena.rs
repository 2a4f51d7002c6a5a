//! Index-based arena representation
//!
//! A [`Tree`] flattened into a single `Vec`, with branches holding
//! child indices instead of boxed subtrees. Conversion and annotation
//! here run on explicit stacks, never on the call stack, so the arena
//! is the representation of choice for pathologically deep trees.

use tracing::trace;

use crate::error::ArenaError;
use crate::tree::{NodeId, Tree};

/// Position of a node inside an arena's node vector.
///
/// Indices are storage addresses; they are unrelated to the sequential
/// [`NodeId`]s handed out by annotation.
pub type NodeIndex = usize;

/// One node of an [`ArenaTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArenaNode<T> {
    /// Terminal node, carries no value
    Leaf,

    /// Internal node: a value and the indices of its two subtrees
    Branch {
        /// The value carried by this branch
        value: T,
        /// Index of the left subtree's root
        left: NodeIndex,
        /// Index of the right subtree's root
        right: NodeIndex,
    },
}

/// A binary tree stored flat in a `Vec`.
///
/// Built from a [`Tree`] via `From`; nodes are laid out pre-order, the
/// root first. The node vector is not otherwise modifiable, so a
/// converted arena is always well formed, but every read still goes
/// through the [`ArenaError`] catalogue rather than indexing blindly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaTree<T> {
    nodes: Vec<ArenaNode<T>>,
    root: Option<NodeIndex>,
}

impl<T> Default for ArenaTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

// Where an unlinked node will hang once its index is known.
enum Slot {
    Root,
    Left(NodeIndex),
    Right(NodeIndex),
}

impl<T> From<Tree<T>> for ArenaTree<T> {
    fn from(tree: Tree<T>) -> Self {
        let mut nodes: Vec<ArenaNode<T>> = Vec::new();
        let mut root = None;

        let mut stack = vec![(tree, Slot::Root)];
        while let Some((node, slot)) = stack.pop() {
            let index = nodes.len();
            match node {
                Tree::Leaf => nodes.push(ArenaNode::Leaf),
                Tree::Branch { value, left, right } => {
                    // Children get patched in as they are popped.
                    nodes.push(ArenaNode::Branch {
                        value,
                        left: 0,
                        right: 0,
                    });
                    stack.push((*right, Slot::Right(index)));
                    stack.push((*left, Slot::Left(index)));
                }
            }
            match slot {
                Slot::Root => root = Some(index),
                Slot::Left(parent) => {
                    if let Some(ArenaNode::Branch { left, .. }) = nodes.get_mut(parent) {
                        *left = index;
                    }
                }
                Slot::Right(parent) => {
                    if let Some(ArenaNode::Branch { right, .. }) = nodes.get_mut(parent) {
                        *right = index;
                    }
                }
            }
        }

        trace!(nodes = nodes.len(), "flattened tree into arena");
        ArenaTree { nodes, root }
    }
}

impl<T> ArenaTree<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total node count, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of branch nodes.
    pub fn branch_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, ArenaNode::Branch { .. }))
            .count()
    }

    /// Index of the root node, if any.
    pub fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&ArenaNode<T>> {
        self.nodes.get(self.root?)
    }

    /// Look up a node by index.
    pub fn get(&self, index: NodeIndex) -> Result<&ArenaNode<T>, ArenaError> {
        self.nodes
            .get(index)
            .ok_or(ArenaError::IndexOutOfBounds(index))
    }

    /// Rebuild the nested [`Tree`].
    ///
    /// Fails on an empty arena, on a child index pointing outside the
    /// node vector, or on a node reached twice (a cycle, or two parents
    /// sharing a subtree).
    pub fn to_tree(&self) -> Result<Tree<T>, ArenaError>
    where
        T: Clone,
    {
        let root = self.root.ok_or(ArenaError::Empty)?;
        let mut visited = vec![false; self.nodes.len()];
        self.build(root, &mut visited)
    }

    fn build(&self, index: NodeIndex, visited: &mut [bool]) -> Result<Tree<T>, ArenaError>
    where
        T: Clone,
    {
        let node = self.get(index)?;
        if visited[index] {
            return Err(ArenaError::CycleDetected(index));
        }
        visited[index] = true;

        match node {
            ArenaNode::Leaf => Ok(Tree::Leaf),
            ArenaNode::Branch { value, left, right } => Ok(Tree::Branch {
                value: value.clone(),
                left: Box::new(self.build(*left, visited)?),
                right: Box::new(self.build(*right, visited)?),
            }),
        }
    }

    /// Annotate every branch with a sequential id, starting at `start`.
    ///
    /// Same numbering as [`Tree::annotate`] - post-order, left before
    /// right, leaves consume nothing - but driven by an explicit stack,
    /// so trees of any depth are safe. The returned arena has the same
    /// layout as `self`, with each branch value paired with its id.
    pub fn annotate(&self, start: NodeId) -> Result<(ArenaTree<(T, NodeId)>, NodeId), ArenaError>
    where
        T: Clone,
    {
        trace!(start, nodes = self.nodes.len(), "annotate arena");

        let mut ids: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut next = start;

        if let Some(root) = self.root {
            let mut pending = vec![false; self.nodes.len()];
            let mut stack = vec![(root, false)];
            while let Some((index, expanded)) = stack.pop() {
                match self.get(index)? {
                    ArenaNode::Leaf => {}
                    ArenaNode::Branch { left, right, .. } => {
                        if expanded {
                            ids[index] = Some(next);
                            next += 1;
                        } else {
                            if pending[index] {
                                return Err(ArenaError::CycleDetected(index));
                            }
                            pending[index] = true;
                            stack.push((index, true));
                            stack.push((*right, false));
                            stack.push((*left, false));
                        }
                    }
                }
            }
        }

        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| match node {
                ArenaNode::Leaf => Ok(ArenaNode::Leaf),
                ArenaNode::Branch { value, left, right } => {
                    let id = ids[index].ok_or(ArenaError::Unreachable(index))?;
                    Ok(ArenaNode::Branch {
                        value: (value.clone(), id),
                        left: *left,
                        right: *right,
                    })
                }
            })
            .collect::<Result<Vec<_>, ArenaError>>()?;

        Ok((
            ArenaTree {
                nodes,
                root: self.root,
            },
            next,
        ))
    }
}
