use bst_set::iterative::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same set of values as the reference.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(tree.insert(*x), set.insert(*x));
            }
            Op::Remove(x) => {
                assert_eq!(tree.remove(x), set.take(x));
            }
            Op::Find(x) => {
                assert_eq!(tree.find(x), set.get(x));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == None)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    // Each value is stored at most once, so anything inserted and never
    // deleted must still be present.
    let still_present: Vec<i8> = xs
        .into_iter()
        .filter(|x| !deletes.contains(x))
        .collect();

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn iteration_matches_a_btree_set(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let reference: BTreeSet<i8> = xs.into_iter().collect();

    tree.iter().copied().eq(reference)
}
