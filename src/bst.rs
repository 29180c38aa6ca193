mod node;
mod preorder;
mod inorder;
mod postorder;

pub use node::Node;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;

use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FromIterator;

/// An unbalanced binary search tree (BST) of keys
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than `k`
///
/// Duplicate keys are not stored. Inserting a key that is already present leaves the tree as it
/// was. No rebalancing is ever performed, so the shape of the tree depends on insertion order.
pub struct BinarySearchTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K> Drop for BinarySearchTree<K> {
    fn drop(&mut self) {
        // Children are detached before their parent's box is freed so that a degenerate chain
        // does not drop one nested box per stack frame
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
    }
}

impl<K: Clone> Clone for BinarySearchTree<K> {
    fn clone(&self) -> Self {
        // Nodes are rebuilt in post-order. Both subtrees of a node are finished before the node
        // itself, so their copies sit on top of `built`, right above left.
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        let mut nodes = IterPostorder::new(self.root.as_deref());
        while let Some(node) = nodes.next_node() {
            let right = if node.has_right() { built.pop() } else { None };
            let left = if node.has_left() { built.pop() } else { None };
            built.push(Box::new(Node::with_children(node.key().clone(), left, right)));
        }

        debug_assert!(built.len() <= 1);
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for BinarySearchTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("root", &self.root.as_deref())
            .finish()
    }
}

impl<K: Ord> PartialEq for BinarySearchTree<K> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same keys may be shaped differently depending on insertion
        // order, so compare their in-order sequences instead of their structure.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<K: Ord> Eq for BinarySearchTree<K> {}

impl<K: Ord> BinarySearchTree<K> {
    /// Creates an empty `BinarySearchTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::BinarySearchTree;
    /// let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the tree (i.e. the number of nodes)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Inserts a key into the tree
    ///
    /// Returns `true` if a new node was placed, or `false` if the key was already present, in
    /// which case the tree is left unchanged.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(37));
    /// assert!(!tree.insert(37));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let mut current = match self.root.as_deref_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Box::new(Node::new(key)));

                debug_assert_eq!(self.len, 0);
                self.len = 1;
                return true;
            },
        };

        while let Some(node) = current.take() {
            match key.cmp(node.key()) {
                Ordering::Less => {
                    if !node.has_left() {
                        // Key not found, insert where we stopped
                        node.set_left(Node::new(key));
                        break;
                    }
                    current = node.left_mut();
                },

                Ordering::Greater => {
                    if !node.has_right() {
                        // Key not found, insert where we stopped
                        node.set_right(Node::new(key));
                        break;
                    }
                    current = node.right_mut();
                },

                // Equal under the ordering is a duplicate
                Ordering::Equal => return false,
            }
        }

        self.len += 1;
        log::trace!("placed new leaf, tree now has {} nodes", self.len);
        true
    }

    /// Returns the node holding the given key, or `None` if no such key exists in the tree
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let node = tree.find(&2).unwrap();
    /// assert_eq!(node.left().map(|node| *node.key()), Some(1));
    /// assert_eq!(node.right().map(|node| *node.key()), Some(3));
    /// assert!(tree.find(&4).is_none());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&Node<K>>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Returns `true` if the tree contains the given key
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.contains("abc"));
    /// assert!(!tree.contains("def"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty
    ///
    /// Time complexity: `O(height)`
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }

        Some(node.key())
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty
    ///
    /// Time complexity: `O(height)`
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }

        Some(node.key())
    }

    /// Removes a key from the tree. Returns whether the key was present.
    ///
    /// A node with two children is not unlinked. Instead it takes the key of its in-order
    /// successor (the smallest key of its right subtree) and the successor's node is removed
    /// in its place.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.inorder(), vec![&1, &3]);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let (root, deleted) = node::delete(self.root.take(), key);
        self.root = root;

        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Removes every key from the tree
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf
    ///
    /// An empty tree has height 0 and a single node has height 1.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::BinarySearchTree;
    ///
    /// // Sorted input degenerates into a chain
    /// let tree: BinarySearchTree<_> = (0..5).collect();
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Verifies the BST property over the whole tree
    ///
    /// Each node is checked against the open interval of keys its ancestors allow, not only
    /// against its immediate children.
    ///
    /// Time complexity: `O(n)`
    pub fn is_valid_bst(&self) -> bool {
        self.root().map_or(true, |root| root.is_within(None, None))
    }

    /// Lazily performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, K> {
        IterPreorder::new(self.root())
    }

    /// Lazily performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<'_, K> {
        IterInorder::new(self.root())
    }

    /// Lazily performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, K> {
        IterPostorder::new(self.root())
    }

    /// Returns the keys in pre-order (node, left subtree, right subtree)
    pub fn preorder(&self) -> Vec<&K> {
        self.iter_preorder().collect()
    }

    /// Returns the keys in in-order, which is strictly ascending
    pub fn inorder(&self) -> Vec<&K> {
        self.iter_inorder().collect()
    }

    /// Returns the keys in post-order (left subtree, right subtree, node)
    pub fn postorder(&self) -> Vec<&K> {
        self.iter_postorder().collect()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// The root depends on insertion and deletion order. For a guaranteed ordering, use the
    /// various iteration methods.
    ///
    /// This is a low-level API meant to be used for implementing custom traversals.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> Extend<K> for BinarySearchTree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for BinarySearchTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K: Ord> IntoIterator for &'a BinarySearchTree<K> {
    type Item = &'a K;
    type IntoIter = IterInorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}
