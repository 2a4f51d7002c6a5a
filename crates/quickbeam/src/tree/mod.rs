//! The immutable binary tree

mod display;
mod iter;

pub use iter::IterPost;

/// Identifier assigned to a branch node by annotation.
///
/// Identifiers are assigned post-order: a branch receives its id only
/// after both of its subtrees have been fully numbered.
pub type NodeId = u64;

/// An immutable binary tree, generic over the branch value type.
///
/// Two variants, in the sum-type style: [`Tree::Leaf`] terminates a
/// subtree and carries nothing; [`Tree::Branch`] carries a value and
/// owns its two subtrees. A tree is built once from constructors and
/// never mutated; every transformation produces a fresh tree.
///
/// # Example
///
/// ```
/// use quickbeam::Tree;
///
/// let tree = Tree::branch(
///     "a",
///     Tree::branch("b", Tree::leaf(), Tree::leaf()),
///     Tree::leaf(),
/// );
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tree<T> {
    /// Terminal node, carries no value
    Leaf,

    /// Internal node: a value and two owned subtrees
    Branch {
        /// The value carried by this branch
        value: T,
        /// Left subtree
        left: Box<Tree<T>>,
        /// Right subtree
        right: Box<Tree<T>>,
    },
}

/// A tree whose branch values have been paired with sequential ids.
///
/// Same shape as the [`Tree`] it was produced from; only the value type
/// changes. See [`Tree::annotate`].
pub type Annotated<T> = Tree<(T, NodeId)>;

impl<T> Tree<T> {
    /// Create a leaf.
    pub fn leaf() -> Self {
        Self::Leaf
    }

    /// Create a branch from a value and two subtrees.
    pub fn branch(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Self::Branch {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf)
    }

    /// Returns true if this node is a branch.
    pub fn is_branch(&self) -> bool {
        matches!(self, Tree::Branch { .. })
    }

    /// Returns true if the tree is a single leaf.
    pub fn is_empty(&self) -> bool {
        self.is_leaf()
    }

    /// The value at this node, if it is a branch.
    pub fn value(&self) -> Option<&T> {
        match self {
            Tree::Leaf => None,
            Tree::Branch { value, .. } => Some(value),
        }
    }

    /// The two subtrees of this node, if it is a branch.
    pub fn children(&self) -> Option<(&Tree<T>, &Tree<T>)> {
        match self {
            Tree::Leaf => None,
            Tree::Branch { left, right, .. } => Some((left, right)),
        }
    }

    /// Number of branch nodes in the tree.
    ///
    /// Leaves are not counted; a bare leaf has length 0.
    pub fn len(&self) -> usize {
        self.iter_post().count()
    }

    /// Number of branch levels on the longest root-to-leaf path.
    ///
    /// A bare leaf has depth 0. Computed with an explicit stack, so it
    /// is safe on arbitrarily deep trees.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, at)) = stack.pop() {
            if let Tree::Branch { left, right, .. } = node {
                max = max.max(at + 1);
                stack.push((left, at + 1));
                stack.push((right, at + 1));
            }
        }
        max
    }

    /// Visit branch values in post-order: left subtree, right subtree,
    /// then the node itself. This is the order annotation assigns ids in.
    pub fn iter_post(&self) -> IterPost<'_, T> {
        IterPost::new(self)
    }

    /// Build a tree of the same shape with every branch value mapped
    /// through `f`.
    pub fn map<U, F>(&self, mut f: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        fn go<T, U, F>(tree: &Tree<T>, f: &mut F) -> Tree<U>
        where
            F: FnMut(&T) -> U,
        {
            match tree {
                Tree::Leaf => Tree::Leaf,
                Tree::Branch { value, left, right } => Tree::Branch {
                    value: f(value),
                    left: Box::new(go(left, f)),
                    right: Box::new(go(right, f)),
                },
            }
        }
        go(self, &mut f)
    }

    /// Consuming variant of [`Tree::map`].
    pub fn map_into<U, F>(self, mut f: F) -> Tree<U>
    where
        F: FnMut(T) -> U,
    {
        fn go<T, U, F>(tree: Tree<T>, f: &mut F) -> Tree<U>
        where
            F: FnMut(T) -> U,
        {
            match tree {
                Tree::Leaf => Tree::Leaf,
                Tree::Branch { value, left, right } => Tree::Branch {
                    value: f(value),
                    left: Box::new(go(*left, f)),
                    right: Box::new(go(*right, f)),
                },
            }
        }
        go(self, &mut f)
    }

    /// Compare leaf/branch topology, ignoring values.
    pub fn same_shape<U>(&self, other: &Tree<U>) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Tree::Leaf, Tree::Leaf) => {}
                (
                    Tree::Branch {
                        left: la,
                        right: ra,
                        ..
                    },
                    Tree::Branch {
                        left: lb,
                        right: rb,
                        ..
                    },
                ) => {
                    stack.push((la, lb));
                    stack.push((ra, rb));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T> Annotated<T> {
    /// Drop the ids, recovering a tree of the original values.
    pub fn strip(&self) -> Tree<T>
    where
        T: Clone,
    {
        self.map(|(value, _)| value.clone())
    }

    /// Branch ids in post-order (the order they were assigned in).
    pub fn ids(&self) -> Vec<NodeId> {
        self.iter_post().map(|(_, id)| *id).collect()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::Leaf
    }
}
