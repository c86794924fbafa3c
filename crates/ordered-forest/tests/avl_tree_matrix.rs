use std::collections::BTreeSet;

use ordered_forest::avl::{self, AvlNode, AvlTree};
use ordered_forest::{Arena, DuplicatePolicy, InvariantError, TreeConfig};
use ordered_forest_util::{Fuzzer, TraceOp};

fn keys(tree: &AvlTree) -> Vec<i64> {
    tree.inorder().collect()
}

fn max_avl_height(n: usize) -> usize {
    // 1.44 * log2(n + 2), rounded up with slack.
    (1.45 * ((n + 2) as f64).log2()).ceil() as usize
}

#[test]
fn avl_fixture_seven_keys_matrix() {
    let mut tree = AvlTree::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        assert!(tree.insert(k));
        tree.assert_valid().unwrap();
    }
    assert_eq!(keys(&tree), vec![20, 30, 40, 50, 60, 70, 80]);
    assert!(tree.search(40));
    assert!(!tree.search(90));
    assert_eq!(tree.root_key(), Some(50));
    assert_eq!(tree.height(), 3);

    assert!(tree.delete(30));
    assert_eq!(keys(&tree), vec![20, 40, 50, 60, 70, 80]);
    tree.assert_valid().unwrap();

    assert!(tree.delete(50));
    assert_eq!(keys(&tree), vec![20, 40, 60, 70, 80]);
    assert_eq!(tree.root_key(), Some(60));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_fixture_nine_keys_matrix() {
    let mut tree = AvlTree::new();
    for k in [9, 5, 10, 0, 6, 11, -1, 1, 2] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    assert_eq!(keys(&tree), vec![-1, 0, 1, 2, 5, 6, 9, 10, 11]);
    assert_eq!(tree.root_key(), Some(9));

    assert!(tree.delete(10));
    assert_eq!(keys(&tree), vec![-1, 0, 1, 2, 5, 6, 9, 11]);
    // Removing 10 leaves 9 left-heavy by two; a single right rotation lifts 1.
    assert_eq!(tree.root_key(), Some(1));
    tree.assert_valid().unwrap();

    assert!(tree.delete(5));
    assert_eq!(keys(&tree), vec![-1, 0, 1, 2, 6, 9, 11]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_rotation_cases_matrix() {
    // left-left, right-right, left-right, right-left
    for (input, root) in [
        ([3, 2, 1], 2),
        ([1, 2, 3], 2),
        ([3, 1, 2], 2),
        ([1, 3, 2], 2),
    ] {
        let tree: AvlTree = input.into_iter().collect();
        assert_eq!(tree.root_key(), Some(root), "input {input:?}");
        assert_eq!(tree.height(), 2);
        tree.assert_valid().unwrap();
    }
}

#[test]
fn avl_delete_rebalances_every_ancestor_matrix() {
    // Fibonacci-shaped tree: removing the shallowest leaf forces rotations
    // on more than one level of the path back to the root.
    let mut tree = AvlTree::new();
    for k in [8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1] {
        tree.insert(k);
    }
    tree.assert_valid().unwrap();
    let before = tree.height();

    assert!(tree.delete(12));
    tree.assert_valid().unwrap();
    assert!(tree.height() <= before);
    assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.height() <= max_avl_height(300));

    for i in (0..300).step_by(3) {
        assert!(tree.delete(i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(tree.search(i), i % 3 != 0);
    }
}

#[test]
fn avl_fuzzer_trace_matrix() {
    for seed in 0..8 {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for op in fuzzer.trace(2_000, -100, 100) {
            match op {
                TraceOp::Insert(k) => assert_eq!(tree.insert(k), model.insert(k)),
                TraceOp::Delete(k) => assert_eq!(tree.delete(k), model.remove(&k)),
                TraceOp::Search(k) => assert_eq!(tree.search(k), model.contains(&k)),
            }
            tree.assert_valid().unwrap();
        }
        assert_eq!(keys(&tree), model.iter().copied().collect::<Vec<_>>());
        assert!(tree.height() <= max_avl_height(tree.len()));

        let mut remaining: Vec<i64> = model.iter().copied().collect();
        fuzzer.shuffle(&mut remaining);
        for k in remaining {
            assert!(tree.delete(k));
            tree.assert_valid().unwrap();
        }
        assert!(tree.is_empty());
    }
}

#[test]
fn avl_duplicates_allowed_matrix() {
    let config = TreeConfig::unique().with_duplicates(DuplicatePolicy::AllowRight);
    let mut tree = AvlTree::with_config(config);
    for _ in 0..50 {
        assert!(tree.insert(7));
        tree.assert_valid().unwrap();
    }
    for k in [1, 9, 7, 3] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 54);
    assert!(tree.height() <= max_avl_height(54));

    let mut removed = 0;
    while tree.delete(7) {
        removed += 1;
        tree.assert_valid().unwrap();
    }
    assert_eq!(removed, 51);
    assert_eq!(keys(&tree), vec![1, 3, 9]);
}

#[test]
fn avl_validator_detects_corruption_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    for k in [2, 1, 3] {
        let n = arena.alloc(AvlNode::new(k));
        root = avl::insert(&mut arena, root, n);
    }
    avl::assert_avl_tree(&arena, root, true).unwrap();

    let r = root.unwrap();
    arena[r].h = 5;
    assert_eq!(
        avl::assert_avl_tree(&arena, root, true),
        Err(InvariantError::HeightMismatch {
            key: 2,
            cached: 5,
            actual: 2
        })
    );

    let out = avl::print(&arena, root, "");
    assert!(out.starts_with("Node[0] [h=5] { 2 }"));
}
