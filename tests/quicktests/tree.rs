use ordtree::{Insertion, Tree};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removals we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                assert_eq!(bst.insert(v.clone()).is_inserted(), set.insert(v.clone()));
            }
            Op::InsertRecursively(v) => {
                assert_eq!(
                    bst.insert_recursively(v.clone()).is_inserted(),
                    set.insert(v.clone())
                );
            }
            Op::Remove(v) => {
                assert_eq!(bst.remove(v), set.take(v));
            }
        }
        assert_eq!(bst.len(), set.len());
    }
}

fn is_strictly_ascending<T: Ord>(xs: &[&T]) -> bool {
    xs.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.validate().is_ok() && tree.dfs_in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_ascending(xs: Vec<i16>) -> bool {
    let iterative: Tree<_> = xs.iter().copied().collect();
    let mut recursive = Tree::new();
    for x in &xs {
        recursive.insert_recursively(*x);
    }

    is_strictly_ascending(&iterative.dfs_in_order())
        && is_strictly_ascending(&recursive.dfs_in_order())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
        && xs.iter().all(|x| tree.find_recursively(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursively(x).is_none())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.clone();
    let duplicate = xs[pick % xs.len()];

    TestResult::from_bool(
        tree.insert(duplicate) == Insertion::Duplicate
            && tree.insert_recursively(duplicate) == Insertion::Duplicate
            && tree == before,
    )
}

#[quickcheck]
fn remove_drops_exactly_one_value(xs: Vec<i8>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let target = xs[pick % xs.len()];

    let mut expected: Vec<i8> = tree.dfs_in_order().into_iter().copied().collect();
    expected.retain(|x| *x != target);

    let removed = tree.remove(&target);
    let remaining: Vec<i8> = tree.dfs_in_order().into_iter().copied().collect();

    TestResult::from_bool(
        removed == Some(target)
            && tree.find(&target).is_none()
            && remaining == expected
            && tree.len() == expected.len(),
    )
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - drop each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn insert_kinds_build_the_same_tree(xs: Vec<i8>) -> bool {
    let iterative: Tree<_> = xs.iter().copied().collect();
    let mut recursive = Tree::new();
    for x in &xs {
        recursive.insert_recursively(*x);
    }

    iterative == recursive
        && iterative.dfs_pre_order() == recursive.dfs_pre_order()
        && iterative.dfs_post_order() == recursive.dfs_post_order()
        && iterative.bfs() == recursive.bfs()
}

#[quickcheck]
fn increasing_runs_are_unbalanced(len: u8) -> TestResult {
    if len < 3 {
        return TestResult::discard();
    }
    let tree: Tree<_> = (0..len).collect();

    TestResult::from_bool(!tree.is_balanced())
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let in_order: BTreeSet<_> = tree.dfs_in_order().into_iter().collect();

    let traversals = [tree.dfs_pre_order(), tree.dfs_post_order(), tree.bfs()];
    let all_match = traversals.into_iter().all(|visited| {
        visited.len() == tree.len() && visited.into_iter().collect::<BTreeSet<_>>() == in_order
    });
    all_match
}
