//! Post-order traversal over borrowed branch values

use super::Tree;

/// Iterator over branch values in post-order.
///
/// Driven by an explicit stack, so iteration never recurses and is
/// safe on arbitrarily deep trees. Leaves are skipped; only branch
/// values are yielded.
pub struct IterPost<'a, T> {
    // (node, children already expanded)
    stack: Vec<(&'a Tree<T>, bool)>,
}

impl<'a, T> IterPost<'a, T> {
    pub(crate) fn new(root: &'a Tree<T>) -> Self {
        Self {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, T> Iterator for IterPost<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            match node {
                Tree::Leaf => {}
                Tree::Branch { value, left, right } => {
                    if expanded {
                        return Some(value);
                    }
                    // Re-push this node below its children so it is
                    // yielded after both of them, left before right.
                    self.stack.push((node, true));
                    self.stack.push((right, false));
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}

impl<T> std::iter::FusedIterator for IterPost<'_, T> {}
