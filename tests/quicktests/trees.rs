use std::collections::BTreeMap;

use classic_collections::{traverse, AvlTree, OrderedTree, TreeNode, UnbalancedTree};
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and to a multiset model.
/// This way we can ensure that after a random smattering of inserts
/// and removes both hold the same values with the same counts.
fn do_ops<T: OrderedTree<i8>>(ops: &[Op<i8>], tree: &mut T, model: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x);
                *model.entry(x).or_default() += 1;
            }
            Op::Remove(x) => {
                tree.remove(&x);
                if let Some(count) = model.get_mut(&x) {
                    *count -= 1;
                    if *count == 0 {
                        model.remove(&x);
                    }
                }
            }
        }
    }
}

fn matches_model<T: OrderedTree<i8>>(tree: &T, model: &BTreeMap<i8, usize>) -> bool {
    let mut in_tree: Vec<(i8, usize)> = traverse::preorder(tree.head())
        .map(|node| (*node.value(), node.count()))
        .collect();
    in_tree.sort_unstable();

    tree.size() == model.values().sum::<usize>()
        && in_tree.into_iter().eq(model.iter().map(|(&x, &count)| (x, count)))
        && model.keys().all(|x| tree.contains(x))
}

fn is_ordered_and_linked<T: OrderedTree<i8>>(tree: &T) -> bool {
    tree.head().map_or(true, |head| head.parent().is_none())
        && traverse::preorder(tree.head()).all(|node| {
            node.left()
                .map_or(true, |l| l.value() < node.value() && l.parent() == Some(node))
                && node
                    .right()
                    .map_or(true, |r| r.value() > node.value() && r.parent() == Some(node))
        })
}

fn is_balanced(tree: &AvlTree<i8>) -> bool {
    traverse::preorder(tree.head()).all(|node| {
        let left = node.left().map_or(0, |l| l.height());
        let right = node.right().map_or(0, |r| r.height());
        node.height() == 1 + left.max(right)
            && node.balance_factor() == left as isize - right as isize
            && node.balance_factor().abs() <= 1
    })
}

#[quickcheck]
fn avl_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model);
    matches_model(&tree, &model) && is_ordered_and_linked(&tree) && is_balanced(&tree)
}

#[quickcheck]
fn unbalanced_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = UnbalancedTree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model);
    matches_model(&tree, &model) && is_ordered_and_linked(&tree)
}

#[quickcheck]
fn avl_balanced_after_every_operation(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut model = BTreeMap::new();

    ops.iter().all(|op| {
        do_ops(std::slice::from_ref(op), &mut tree, &mut model);
        is_ordered_and_linked(&tree) && is_balanced(&tree)
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: AvlTree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
        && nots
            .iter()
            .filter(|x| !xs.contains(*x))
            .all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_then_remove_restores_values(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: AvlTree<i8> = xs.iter().copied().collect();
    let before: Vec<(i8, usize)> = {
        let mut v: Vec<_> = traverse::preorder(tree.head())
            .map(|n| (*n.value(), n.count()))
            .collect();
        v.sort_unstable();
        v
    };

    tree.insert(x).remove(&x);

    let mut after: Vec<_> = traverse::preorder(tree.head())
        .map(|n| (*n.value(), n.count()))
        .collect();
    after.sort_unstable();
    after == before && tree.size() == xs.len() && is_balanced(&tree)
}
