use rand::prelude::*;

use trees::{BinarySearchTree, TreeNode, nary};

#[test]
fn bst_sample_scenario() {
    let mut tree: BinarySearchTree<_> = vec![7, 3, 9, 1, 5, 8, 10, 4, 6].into_iter().collect();

    let inorder: Vec<_> = tree.iter_inorder().copied().collect();
    assert_eq!(inorder, &[1, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&10));
    assert!(tree.contains(&5));
    assert_eq!(tree.height(), 4);
    assert!(tree.is_valid_bst());

    assert!(tree.delete(&3));
    let inorder: Vec<_> = tree.iter_inorder().copied().collect();
    assert_eq!(inorder, &[1, 4, 5, 6, 7, 8, 9, 10]);
    assert!(!tree.contains(&3));
}

#[test]
fn nary_sample_scenario() {
    let mut root = TreeNode::new("root");
    let a = root.add(TreeNode::new("A"));
    a.add(TreeNode::new("A1"));
    a.add(TreeNode::new("A2"));
    let b = root.add(TreeNode::new("B"));
    b.add(TreeNode::new("B1"));

    assert_eq!(nary::dfs_preorder(Some(&root)), vec![&"root", &"A", &"A1", &"A2", &"B", &"B1"]);
    assert_eq!(nary::bfs_level_order(Some(&root)), vec![&"root", &"A", &"B", &"A1", &"A2", &"B1"]);
}

#[test]
fn bst_properties_hold_for_shuffled_inputs() {
    let mut rng = StdRng::seed_from_u64(45930923092);

    for size in [0usize, 1, 2, 10, 100, 500].iter().copied() {
        let mut keys: Vec<i64> = (0..size as i64).map(|i| i * 10).collect();
        keys.shuffle(&mut rng);

        let mut tree: BinarySearchTree<_> = keys.iter().copied().collect();
        assert_eq!(tree.len(), size);
        assert!(tree.is_valid_bst());

        let inorder: Vec<_> = tree.iter_inorder().copied().collect();
        assert!(inorder.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(tree.min(), inorder.first());
        assert_eq!(tree.max(), inorder.last());
        assert!(tree.height() <= size);

        // Deleting absent keys changes nothing
        for absent in keys.iter().map(|key| key + 5) {
            assert!(!tree.delete(&absent));
        }
        assert_eq!(tree.iter_inorder().copied().collect::<Vec<_>>(), inorder);

        // Delete half the keys in random order
        let (deleted, kept) = keys.split_at(size / 2);
        for key in deleted {
            assert!(tree.delete(key));
            assert!(!tree.contains(key));
            assert!(tree.is_valid_bst());
        }
        for key in kept {
            assert!(tree.contains(key));
        }

        let mut expected = kept.to_vec();
        expected.sort_unstable();
        assert_eq!(tree.inorder().into_iter().copied().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn sorted_insertions_degenerate_into_a_chain() {
    let tree: BinarySearchTree<_> = (0..100).collect();
    assert_eq!(tree.height(), 100);
    assert!(tree.is_valid_bst());

    // Every node only has a right child
    let mut node = tree.root();
    while let Some(current) = node {
        assert!(!current.has_left());
        node = current.right();
    }
}

#[test]
fn long_sorted_chain_can_be_cloned_and_dropped() {
    // Sorted insertion is quadratic, so the chain stays short enough for debug builds. The unit
    // tests in `bst` cover chains of a million nodes.
    const LEN: i32 = 20_000;

    let tree: BinarySearchTree<_> = (0..LEN).collect();
    let mut cloned = tree.clone();
    assert_eq!(cloned.len(), LEN as usize);
    assert!(tree.iter_postorder().eq(cloned.iter_postorder()));
    drop(tree);

    let mut descending: BinarySearchTree<_> = (0..LEN).rev().collect();
    assert_eq!(descending, cloned);
    descending.clear();
    assert!(descending.is_empty());

    cloned.clear();
    assert_eq!(cloned.iter_inorder().count(), 0);
}
