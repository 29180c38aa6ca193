//! Builds a sample binary search tree and n-ary tree and prints their traversals
//!
//! Set `RUST_LOG=trace` to also see the structural edits made by the trees.

use log::info;

use trees::{BinarySearchTree, TreeNode, nary};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut bst: BinarySearchTree<_> = vec![7, 3, 9, 1, 5, 8, 10, 4, 6].into_iter().collect();
    info!("built binary search tree with {} keys", bst.len());

    println!("inorder: {:?}", bst.inorder());
    println!("min/max: {:?} {:?}", bst.min(), bst.max());
    println!("contains 5: {}", bst.contains(&5));
    println!("height: {} valid: {}", bst.height(), bst.is_valid_bst());

    let deleted = bst.delete(&3);
    info!("delete 3 removed a node: {}", deleted);
    println!("after delete 3: {:?}", bst.inorder());

    let mut root = TreeNode::new("root");
    let a = root.add(TreeNode::new("A"));
    a.add(TreeNode::new("A1"));
    a.add(TreeNode::new("A2"));
    let b = root.add(TreeNode::new("B"));
    b.add(TreeNode::new("B1"));
    info!("built n-ary tree with {} nodes", root.len());

    println!("DFS: {:?}", nary::dfs_preorder(Some(&root)));
    println!("BFS: {:?}", nary::bfs_level_order(Some(&root)));
}
