//! Display implementation for trees

use std::fmt;

use super::Tree;

/// Renders in constructor-literal form: `Leaf` or `Branch(v, l, r)`.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf => write!(f, "Leaf"),
            Tree::Branch { value, left, right } => {
                write!(f, "Branch({}, {}, {})", value, left, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_leaf() {
        assert_eq!(Tree::<i32>::leaf().to_string(), "Leaf");
    }

    #[test]
    fn test_display_nested() {
        let tree = Tree::branch(1, Tree::branch(2, Tree::leaf(), Tree::leaf()), Tree::leaf());
        assert_eq!(tree.to_string(), "Branch(1, Branch(2, Leaf, Leaf), Leaf)");
    }
}
