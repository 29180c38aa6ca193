use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::TreeNode;

/// Breadth-first (level-order) iterator over the values of a [`TreeNode`] and its descendants
pub struct IterBfs<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,
}

impl<'a, T> IterBfs<'a, T> {
    pub(super) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for IterBfs<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterBfs<'a, T> {}
