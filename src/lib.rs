//! Two textbook trees: an unbalanced [`BinarySearchTree`] and a general n-ary [`TreeNode`]
//!
//! Both trees use exclusive ownership along every parent-to-child edge. Nodes are boxed (or
//! stored in a `Vec` for n-ary children) and there are no parent pointers, so dropping a tree
//! drops every node in it.

pub mod bst;
pub mod nary;

pub use bst::BinarySearchTree;
pub use nary::TreeNode;

/// Creates a [`BinarySearchTree`] by inserting each key in order
///
/// # Examples
///
/// ```
/// use trees::bst;
///
/// let tree = bst![7, 3, 9, 3];
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.inorder(), vec![&3, &7, &9]);
/// ```
#[macro_export(local_inner_macros)]
macro_rules! bst {
    // trailing comma case
    ($($key:expr,)+) => { bst!($($key),+) };

    ($($key:expr),*) => {
        {
            let mut _tree = $crate::BinarySearchTree::new();
            $(
                let _ = _tree.insert($key);
            )*
            _tree
        }
    };
}
