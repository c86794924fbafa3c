use std::collections::BTreeMap;

use log::LevelFilter;
use ordered_forest::red_black::{self, Color, RbNode, RbTree, NIL};
use ordered_forest::{Arena, InvariantError, TreeConfig};
use ordered_forest_util::{Fuzzer, TraceOp};
use simplelog::{Config, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn keys(tree: &RbTree) -> Vec<i64> {
    tree.inorder().collect()
}

fn max_rb_height(n: usize) -> usize {
    // 2 * log2(n + 1)
    (2.0 * ((n + 1) as f64).log2()).floor() as usize
}

#[test]
fn rb_fixture_matrix() {
    init_logging();
    let mut tree = RbTree::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    assert_eq!(keys(&tree), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.root_color(), Some(Color::Black));
    assert_eq!(
        tree.colored().collect::<Vec<_>>(),
        vec![
            (20, Color::Red),
            (30, Color::Black),
            (40, Color::Red),
            (50, Color::Black),
            (60, Color::Red),
            (70, Color::Black),
            (80, Color::Red),
        ]
    );
    assert!(tree.search(40));
    assert!(!tree.search(90));

    assert!(tree.delete(30));
    assert_eq!(keys(&tree), vec![20, 40, 50, 60, 70, 80]);
    tree.assert_valid().unwrap();

    assert!(tree.delete(50));
    assert_eq!(keys(&tree), vec![20, 40, 60, 70, 80]);
    assert_eq!(tree.root_key(), Some(60));
    assert_eq!(tree.root_color(), Some(Color::Black));
    tree.assert_valid().unwrap();
}

#[test]
fn rb_colored_listing_matrix() {
    let tree: RbTree = [2, 1, 3].into_iter().collect();
    let listing: Vec<String> = tree.colored().map(|(k, c)| format!("{k}({c})")).collect();
    assert_eq!(listing.join(" "), "1(R) 2(B) 3(R)");
    assert_eq!(tree.color_of(2), Some(Color::Black));
    assert_eq!(tree.color_of(4), None);
}

#[test]
fn rb_insert_cases_matrix() {
    // Ascending input exercises the red-uncle recolor and the outer-child
    // rotation; zig-zag input exercises the inner-child rotation.
    for input in [
        (1..=64).collect::<Vec<i64>>(),
        (1..=64).rev().collect(),
        vec![10, 5, 7, 20, 15, 17, 1, 3, 2],
    ] {
        let mut tree = RbTree::new();
        for &k in &input {
            tree.insert(k);
            tree.assert_valid().unwrap();
        }
        assert!(tree.height() <= max_rb_height(tree.len()));
        let mut sorted = input.clone();
        sorted.sort_unstable();
        assert_eq!(keys(&tree), sorted);
    }
}

#[test]
fn rb_duplicates_kept_matrix() {
    let mut tree = RbTree::new();
    for k in [5, 5, 5, 3, 5, 8] {
        assert!(tree.insert(k));
        tree.assert_valid().unwrap();
    }
    assert_eq!(keys(&tree), vec![3, 5, 5, 5, 5, 8]);
    assert_eq!(tree.len(), 6);

    assert!(tree.delete(5));
    assert_eq!(keys(&tree), vec![3, 5, 5, 5, 8]);
    tree.assert_valid().unwrap();

    let mut unique = RbTree::with_config(TreeConfig::unique());
    assert!(unique.insert(5));
    assert!(!unique.insert(5));
    assert_eq!(unique.len(), 1);
    unique.assert_valid().unwrap();
}

#[test]
fn rb_ladder_insert_delete_matrix() {
    let mut tree = RbTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);

    for i in (0..300).step_by(3) {
        assert!(tree.delete(i));
        tree.assert_valid().unwrap();
    }
    for i in 0..300 {
        assert_eq!(tree.search(i), i % 3 != 0);
    }

    for i in (0..300).rev().filter(|i| i % 3 != 0) {
        assert!(tree.delete(i));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root_color(), None);
}

#[test]
fn rb_fuzzer_multiset_trace_matrix() {
    for seed in 0..8 {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut tree = RbTree::new();
        let mut model: BTreeMap<i64, usize> = BTreeMap::new();

        for op in fuzzer.trace(2_000, -60, 60) {
            match op {
                TraceOp::Insert(k) => {
                    assert!(tree.insert(k));
                    *model.entry(k).or_default() += 1;
                }
                TraceOp::Delete(k) => {
                    let count = model.get(&k).copied().unwrap_or(0);
                    if count == 1 {
                        model.remove(&k);
                    } else if count > 1 {
                        model.insert(k, count - 1);
                    }
                    assert_eq!(tree.delete(k), count > 0);
                }
                TraceOp::Search(k) => assert_eq!(tree.search(k), model.contains_key(&k)),
            }
            tree.assert_valid().unwrap();
        }

        let expected: Vec<i64> = model
            .iter()
            .flat_map(|(&k, &count)| std::iter::repeat(k).take(count))
            .collect();
        assert_eq!(keys(&tree), expected);

        let mut remaining = expected;
        fuzzer.shuffle(&mut remaining);
        for k in remaining {
            assert!(tree.delete(k));
            tree.assert_valid().unwrap();
        }
        assert!(tree.is_empty());
        assert_eq!(keys(&tree), Vec::<i64>::new());
    }
}

#[test]
fn rb_fuzzer_live_key_delete_matrix() {
    for seed in 0..8 {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut live = fuzzer.keys(200, -40, 40);
        let mut tree: RbTree = live.iter().copied().collect();
        tree.assert_valid().unwrap();

        for _ in 0..400 {
            if live.is_empty() || fuzzer.random_bool(0.4) {
                let k = fuzzer.random_int(-40, 40);
                assert!(tree.insert(k));
                live.push(k);
            } else {
                // Deletes always target a stored key, duplicates included.
                let k = *fuzzer.pick(&live);
                assert!(tree.delete(k));
                let pos = live.iter().position(|&x| x == k).unwrap();
                live.swap_remove(pos);
            }
            tree.assert_valid().unwrap();
            assert_eq!(tree.len(), live.len());
        }

        live.sort_unstable();
        assert_eq!(keys(&tree), live);
    }
}

#[test]
fn rb_clear_and_reuse_matrix() {
    let mut tree: RbTree = (0..32).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    tree.assert_valid().unwrap();

    tree.extend([3, 1, 2]);
    assert_eq!(keys(&tree), vec![1, 2, 3]);
    tree.assert_valid().unwrap();
}

#[test]
fn rb_util_transplant_and_rotate_matrix() {
    let mut arena = Arena::with_sentinel(RbNode::sentinel());
    let mut root = None;
    for k in [2, 1, 3] {
        let n = arena.alloc(RbNode::new(k));
        root = red_black::insert(&mut arena, root, n);
    }
    red_black::assert_red_black_tree(&arena, root, true).unwrap();
    assert_eq!(root, Some(1));

    let mut r = root.unwrap();
    red_black::rotate_left(&mut arena, &mut r, 1);
    assert_eq!(r, 3);
    assert_eq!(arena[3].l, 1);
    assert_eq!(arena[1].p, 3);
    assert_eq!(arena[3].p, NIL);
    red_black::rotate_right(&mut arena, &mut r, 3);
    assert_eq!(r, 1);

    // Replace the right leaf with the sentinel.
    red_black::transplant(&mut arena, &mut r, 3, NIL);
    assert_eq!(arena[1].r, NIL);
    assert_eq!(arena[NIL].c, Color::Black);
    assert_eq!(arena[NIL].p, NIL);
}

#[test]
fn rb_validator_detects_corruption_matrix() {
    let mut arena = Arena::with_sentinel(RbNode::sentinel());
    let mut root = None;
    for k in [2, 1, 3] {
        let n = arena.alloc(RbNode::new(k));
        root = red_black::insert(&mut arena, root, n);
    }
    let r = root.unwrap();

    arena[r].c = Color::Red;
    assert_eq!(
        red_black::assert_red_black_tree(&arena, root, true),
        Err(InvariantError::RootNotBlack)
    );

    arena[r].c = Color::Black;
    arena[2].c = Color::Black;
    assert_eq!(
        red_black::assert_red_black_tree(&arena, root, true),
        Err(InvariantError::BlackHeightMismatch {
            key: 2,
            left: 1,
            right: 0
        })
    );

    let out = red_black::print(&arena, root, "");
    assert!(out.starts_with("Node[1] black { 2 }"));
}
