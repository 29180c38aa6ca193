use std::ptr;
use std::iter::FusedIterator;

use super::Node;

/// Post-order iterator over the keys of a [`BinarySearchTree`](super::BinarySearchTree)
pub struct IterPostorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, K> IterPostorder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        if let Some(root) = root {
            iter.descend(root);
        }
        iter
    }

    /// Walks down the left spine starting at `node`, leaving each node on the stack above its
    /// right child
    fn descend(&mut self, mut node: &'a Node<K>) {
        loop {
            self.stack.extend(node.right());
            self.stack.push(node);

            match node.left() {
                Some(left) => node = left,
                None => break,
            }
        }
    }
}

/// Compares two nodes for equality using pointer equality only
fn node_eq<K>(left: Option<&&Node<K>>, right: &Node<K>) -> bool {
    left.map_or(false, |&left| ptr::eq(left, right))
}

impl<'a, K> IterPostorder<'a, K> {
    /// Returns the next node in post-order, so every node comes after both of its subtrees
    pub(super) fn next_node(&mut self) -> Option<&'a Node<K>> {
        while let Some(node) = self.stack.pop() {
            // If the top of the stack is the current node's right child, the right subtree has
            // not been visited yet
            match node.right() {
                Some(right) if node_eq(self.stack.last(), right) => {
                    self.stack.pop();
                    self.stack.push(node);
                    self.descend(right);
                },

                _ => return Some(node),
            }
        }

        None
    }
}

impl<'a, K> Iterator for IterPostorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::key)
    }
}

impl<'a, K> FusedIterator for IterPostorder<'a, K> {}
