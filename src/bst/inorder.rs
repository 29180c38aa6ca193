use std::iter::FusedIterator;

use super::Node;

/// In-order iterator over the keys of a [`BinarySearchTree`](super::BinarySearchTree)
///
/// Keys are yielded in strictly ascending order.
pub struct IterInorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K> IterInorder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(current_node) = current {
            self.stack.push(current_node);
            current = current_node.left();
        }
    }
}

impl<'a, K> Iterator for IterInorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<'a, K> FusedIterator for IterInorder<'a, K> {}
