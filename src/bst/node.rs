use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// A single node of the binary search tree
///
/// Each node exclusively owns its children. There are no parent pointers.
pub struct Node<K> {
    key: K,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", self.key())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn with_children(key: K, left: Option<Box<Self>>, right: Option<Box<Self>>) -> Self {
        Self {key, left, right}
    }

    /// Detaches both subtrees, leaving this node a leaf
    pub(crate) fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>) {
        (self.left.take(), self.right.take())
    }

    /// Returns the key of this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }

    /// Number of nodes on the longest path from this node down to a leaf, counting this node
    pub(crate) fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);
        1 + left.max(right)
    }

    /// Checks that every key in this subtree lies strictly inside `(lo, hi)`, tightening the
    /// interval on the way down
    pub(crate) fn is_within(&self, lo: Option<&K>, hi: Option<&K>) -> bool
        where K: Ord,
    {
        if lo.map_or(false, |lo| self.key <= *lo) {
            return false;
        }
        if hi.map_or(false, |hi| self.key >= *hi) {
            return false;
        }

        self.left().map_or(true, |left| left.is_within(lo, Some(&self.key))) &&
            self.right().map_or(true, |right| right.is_within(Some(&self.key), hi))
    }
}

/// Removes the node with the given key from the subtree rooted at `node`
///
/// Takes ownership of the subtree and returns the (possibly different) root that the caller must
/// put back in its own child slot, along with whether a node was removed. A missing key returns
/// the subtree unchanged.
pub(crate) fn delete<K, Q>(node: Option<Box<Node<K>>>, key: &Q) -> (Option<Box<Node<K>>>, bool)
    where K: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let mut node = match node {
        Some(node) => node,
        None => return (None, false),
    };

    match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (left, deleted) = delete(node.left.take(), key);
            node.left = left;
            (Some(node), deleted)
        },

        Ordering::Greater => {
            let (right, deleted) = delete(node.right.take(), key);
            node.right = right;
            (Some(node), deleted)
        },

        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // Covers both the leaf case and the "only a right child" case
            (None, right) => (right, true),
            (left @ Some(_), None) => (left, true),

            (left, mut right) => {
                // Two children: promote the in-order successor (minimum of the right subtree).
                // The successor never has a left child, so unlinking it is the single-child case.
                let successor = take_min(&mut right);
                log::trace!("promoting in-order successor into a node with two children");

                // The node itself stays in place, only its key changes
                node.key = successor;
                node.left = left;
                node.right = right;
                (Some(node), true)
            },
        },
    }
}

/// Unlinks the minimum node of the non-empty subtree in `slot` and returns its key
///
/// Follows left children down from `slot`, then replaces the minimum's slot in its direct parent
/// with the minimum's right child.
fn take_min<K>(slot: &mut Option<Box<Node<K>>>) -> K {
    let mut slot = slot;
    while slot.as_ref().map_or(false, |node| node.has_left()) {
        // The loop condition guarantees `slot` is occupied
        slot = match slot {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    match slot.take() {
        Some(min) => {
            let Node {key, left, right} = *min;
            debug_assert!(left.is_none());
            *slot = right;
            key
        },
        None => unreachable!("bug: `take_min` called on an empty subtree"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Node<i32> {
        Node::new(key)
    }

    fn branch(key: i32, left: Option<Node<i32>>, right: Option<Node<i32>>) -> Node<i32> {
        let mut node = Node::new(key);
        if let Some(left) = left {
            node.set_left(left);
        }
        if let Some(right) = right {
            node.set_right(right);
        }
        node
    }

    fn inorder(node: Option<&Node<i32>>, out: &mut Vec<i32>) {
        if let Some(node) = node {
            inorder(node.left(), out);
            out.push(*node.key());
            inorder(node.right(), out);
        }
    }

    #[test]
    fn height_counts_nodes() {
        assert_eq!(leaf(1).height(), 1);

        //   2
        // 1   3
        //       4
        let node = branch(2, Some(leaf(1)), Some(branch(3, None, Some(leaf(4)))));
        assert_eq!(node.height(), 3);
    }

    #[test]
    fn is_within_catches_deep_violation() {
        // A right-left grandchild smaller than the root passes a check against immediate
        // children only:
        //    5
        //      8
        //    3
        let node = branch(5, None, Some(branch(8, Some(leaf(3)), None)));
        assert!(!node.is_within(None, None));

        let node = branch(5, None, Some(branch(8, Some(leaf(6)), None)));
        assert!(node.is_within(None, None));
    }

    #[test]
    fn is_within_rejects_equal_keys() {
        let node = branch(5, Some(leaf(5)), None);
        assert!(!node.is_within(None, None));

        let node = branch(5, None, Some(leaf(5)));
        assert!(!node.is_within(None, None));
    }

    #[test]
    fn take_min_relinks_right_child() {
        //     10
        //   5
        //     7
        //   6
        let mut slot = Some(Box::new(branch(10, Some(branch(5, None, Some(branch(7, Some(leaf(6)), None)))), None)));
        assert_eq!(take_min(&mut slot), 5);

        let mut keys = Vec::new();
        inorder(slot.as_deref(), &mut keys);
        assert_eq!(keys, &[6, 7, 10]);

        // The minimum's right subtree took its place as the left child of 10
        let root = slot.as_deref().unwrap();
        assert_eq!(root.left().map(|node| *node.key()), Some(7));
    }

    #[test]
    fn take_min_at_root_of_slot() {
        let mut slot = Some(Box::new(branch(1, None, Some(leaf(2)))));
        assert_eq!(take_min(&mut slot), 1);
        assert_eq!(slot.as_deref().map(|node| *node.key()), Some(2));
    }

    #[test]
    fn delete_missing_key_leaves_subtree() {
        let node = Some(Box::new(branch(2, Some(leaf(1)), Some(leaf(3)))));
        let (node, deleted) = delete(node, &4);
        assert!(!deleted);

        let mut keys = Vec::new();
        inorder(node.as_deref(), &mut keys);
        assert_eq!(keys, &[1, 2, 3]);
    }

    #[test]
    fn delete_from_empty_subtree() {
        let (node, deleted) = delete::<i32, i32>(None, &1);
        assert!(node.is_none());
        assert!(!deleted);
    }
}
