//! A general rooted tree where every node owns an ordered list of children

mod dfs;
mod bfs;

pub use dfs::*;
pub use bfs::*;

/// A node of an n-ary tree
///
/// Each node exclusively owns its children, in the order they were added. There are no parent
/// pointers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<TreeNode<T>>,
}

impl<T> From<T> for TreeNode<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> TreeNode<T> {
    /// Creates a node with no children
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the children of this node in insertion order
    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in the subtree rooted at this node, including this node
    pub fn len(&self) -> usize {
        self.iter_dfs().count()
    }

    /// Appends `child` as the last child of this node and returns it, now owned by this node, so
    /// that construction can be chained
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::TreeNode;
    ///
    /// let mut root = TreeNode::new("root");
    /// root.add(TreeNode::new("A")).add(TreeNode::new("A1"));
    /// root.add(TreeNode::new("B"));
    ///
    /// let values: Vec<_> = root.iter_dfs().copied().collect();
    /// assert_eq!(values, &["root", "A", "A1", "B"]);
    /// ```
    pub fn add(&mut self, child: TreeNode<T>) -> &mut TreeNode<T> {
        self.children.push(child);
        let index = self.children.len() - 1;
        &mut self.children[index]
    }

    /// Lazily visits this node, then each child's subtree from first to last
    pub fn iter_dfs(&self) -> IterDfs<'_, T> {
        IterDfs::new(Some(self))
    }

    /// Lazily visits nodes in order of non-decreasing depth, children in insertion order
    pub fn iter_bfs(&self) -> IterBfs<'_, T> {
        IterBfs::new(Some(self))
    }
}

/// Returns the values of the tree in depth-first pre-order. An absent root yields nothing.
///
/// # Examples
///
/// ```
/// use trees::{TreeNode, nary::dfs_preorder};
///
/// let mut root = TreeNode::new(1);
/// root.add(TreeNode::new(2)).add(TreeNode::new(3));
/// root.add(TreeNode::new(4));
///
/// assert_eq!(dfs_preorder(Some(&root)), vec![&1, &2, &3, &4]);
/// assert!(dfs_preorder::<i32>(None).is_empty());
/// ```
pub fn dfs_preorder<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    IterDfs::new(root).collect()
}

/// Returns the values of the tree level by level. An absent root yields nothing.
///
/// # Examples
///
/// ```
/// use trees::{TreeNode, nary::bfs_level_order};
///
/// let mut root = TreeNode::new(1);
/// root.add(TreeNode::new(2)).add(TreeNode::new(3));
/// root.add(TreeNode::new(4));
///
/// assert_eq!(bfs_level_order(Some(&root)), vec![&1, &2, &4, &3]);
/// ```
pub fn bfs_level_order<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    IterBfs::new(root).collect()
}
