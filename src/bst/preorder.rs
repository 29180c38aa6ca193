use std::iter::FusedIterator;

use super::Node;

/// Pre-order iterator over the keys of a [`BinarySearchTree`](super::BinarySearchTree)
///
/// Each key is yielded before every key of its left subtree, which in turn all come before the
/// keys of its right subtree. Collecting this order and inserting it into an empty tree rebuilds
/// the same shape.
///
/// Created by [`BinarySearchTree::iter_preorder`](super::BinarySearchTree::iter_preorder).
pub struct IterPreorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> IterPreorder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for IterPreorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // The stack is popped from the back, so the left child must be pushed last
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every pending subtree yields at least its own root
        (self.stack.len(), None)
    }
}

impl<'a, K> FusedIterator for IterPreorder<'a, K> {}
