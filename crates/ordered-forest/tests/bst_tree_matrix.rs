use ordered_forest::bst::{self, BstNode, BstTree};
use ordered_forest::{Arena, DuplicatePolicy, TreeConfig};

fn keys(tree: &BstTree) -> Vec<i64> {
    tree.inorder().collect()
}

#[test]
fn bst_fixture_matrix() {
    let mut tree = BstTree::new();
    for k in [55, 35, 75, 25, 45, 65, 85] {
        assert!(tree.insert(k));
    }
    assert_eq!(keys(&tree), vec![25, 35, 45, 55, 65, 75, 85]);
    assert!(tree.search(45));
    assert!(!tree.search(95));

    assert!(tree.delete(35));
    assert_eq!(keys(&tree), vec![25, 45, 55, 65, 75, 85]);
    tree.assert_valid().unwrap();

    assert!(tree.delete(55));
    assert_eq!(keys(&tree), vec![25, 45, 65, 75, 85]);
    // Two children: the successor's key moved up into the root slot.
    assert_eq!(tree.root_key(), Some(65));
    tree.assert_valid().unwrap();
}

#[test]
fn bst_duplicate_and_missing_matrix() {
    let mut tree: BstTree = [3, 1, 2].into_iter().collect();
    assert!(!tree.insert(2));
    assert_eq!(tree.len(), 3);
    assert!(!tree.delete(7));
    assert_eq!(keys(&tree), vec![1, 2, 3]);

    let mut multi = BstTree::with_config(TreeConfig::unique().with_duplicates(DuplicatePolicy::AllowRight));
    for k in [5, 5, 3, 5] {
        assert!(multi.insert(k));
    }
    assert_eq!(keys(&multi), vec![3, 5, 5, 5]);
    multi.assert_valid().unwrap();
    assert!(multi.delete(5));
    assert_eq!(keys(&multi), vec![3, 5, 5]);
    multi.assert_valid().unwrap();
}

#[test]
fn bst_sorted_input_degrades_without_recursion_matrix() {
    let mut tree = BstTree::new();
    for k in 0..20_000 {
        tree.insert(k);
    }
    assert_eq!(tree.height(), 20_000);
    assert_eq!(tree.inorder().count(), 20_000);
    assert!(tree.search(19_999));
    tree.assert_valid().unwrap();

    for k in 0..20_000 {
        assert!(tree.delete(k));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.inorder().next(), None);
}

#[test]
fn bst_exhaustive_delete_matrix() {
    let order = [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15];
    let mut tree: BstTree = order.into_iter().collect();
    for k in [8, 1, 15, 4, 12, 6, 10, 2, 14, 3, 5, 7, 9, 11, 13] {
        assert!(tree.delete(k));
        assert!(!tree.search(k));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn bst_util_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    for k in [2, 1, 3] {
        let n = arena.alloc(BstNode::new(k));
        root = bst::insert(&mut arena, root, n);
    }
    assert_eq!(root, Some(0));

    let removed = bst::remove(&mut arena, root, 2).unwrap();
    assert_eq!(removed.root, Some(0));
    assert_eq!(removed.released, 2);
    assert_eq!(arena[0].k, 3);
    assert!(bst::remove(&mut arena, removed.root, 2).is_none());

    let out = bst::print(&arena, removed.root, "");
    assert!(out.starts_with("Node[0] bst { 3 }"));
}
