//! Path-based labelling
//!
//! Labels a branch with the turns taken from the root instead of a
//! sequential counter. Paths for independent subtrees do not depend on
//! each other, so this labelling has no left-to-right data dependency,
//! at the cost of instability: rebalancing the tree changes paths.
//! Kept as a distinct type so path labels and sequential ids cannot be
//! confused.

use std::fmt;

use crate::tree::Tree;

/// One step down from a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// Into the left subtree
    Left,
    /// Into the right subtree
    Right,
}

/// The sequence of turns from the root to a branch.
///
/// The root's path is empty. Renders as one letter per turn, e.g. a
/// node reached left, left, right displays as `"llr"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreePath(Vec<Turn>);

impl TreePath {
    /// The empty path (the root).
    pub fn root() -> Self {
        Self::default()
    }

    /// Number of turns from the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The turns, root first.
    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    fn child(&self, turn: Turn) -> Self {
        let mut turns = self.0.clone();
        turns.push(turn);
        Self(turns)
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for turn in &self.0 {
            let c = match turn {
                Turn::Left => 'l',
                Turn::Right => 'r',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Label every branch with its path from the root.
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
    /// let labelled = tree.annotate_paths();
    ///
    /// let (_, path) = labelled.children().unwrap().0.value().unwrap();
    /// assert_eq!(path.to_string(), "l");
    /// ```
    pub fn annotate_paths(&self) -> Tree<(T, TreePath)>
    where
        T: Clone,
    {
        fn go<T: Clone>(tree: &Tree<T>, at: TreePath) -> Tree<(T, TreePath)> {
            match tree {
                Tree::Leaf => Tree::Leaf,
                Tree::Branch { value, left, right } => Tree::Branch {
                    left: Box::new(go(left, at.child(Turn::Left))),
                    right: Box::new(go(right, at.child(Turn::Right))),
                    value: (value.clone(), at),
                },
            }
        }
        go(self, TreePath::root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let tree = Tree::branch(1, Tree::leaf(), Tree::leaf());
        let labelled = tree.annotate_paths();
        let (_, path) = labelled.value().unwrap();
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_paths_follow_turns() {
        let tree = Tree::branch(
            "a",
            Tree::leaf(),
            Tree::branch(
                "c",
                Tree::branch("d", Tree::leaf(), Tree::leaf()),
                Tree::leaf(),
            ),
        );
        let labelled = tree.annotate_paths();

        let paths: Vec<String> = labelled
            .iter_post()
            .map(|(_, path)| path.to_string())
            .collect();
        assert_eq!(paths, vec!["rl", "r", ""]);
    }

    #[test]
    fn test_shape_preserved() {
        let tree = Tree::branch(1, Tree::branch(2, Tree::leaf(), Tree::leaf()), Tree::leaf());
        assert!(tree.same_shape(&tree.annotate_paths()));
    }
}
