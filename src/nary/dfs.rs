use std::iter::FusedIterator;

use super::TreeNode;

/// Depth-first pre-order iterator over the values of a [`TreeNode`] and its descendants
pub struct IterDfs<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> IterDfs<'a, T> {
    pub(super) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for IterDfs<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so that the first child is on top of the stack
        self.stack.extend(node.children().iter().rev());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterDfs<'a, T> {}
