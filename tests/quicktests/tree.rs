use validated_bst::{tree, Node, Tree};

use std::collections::HashSet;

use crate::{init_logging, Op};

fn build(xs: &[i8]) -> Tree {
    xs.iter().map(|&x| i64::from(x)).collect()
}

/// Applies a set of operations to a tree and a plain list.
/// This way we can ensure that after a random smattering of inserts
/// the tree holds exactly what the list holds.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree, model: &mut Vec<i64>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                bst.insert(i64::from(k));
                model.push(i64::from(k));
            }
            Op::SoftInsert(k) => {
                tree::insert(Some(&mut *bst), k.map(i64::from));
                model.extend(k.map(i64::from));
            }
            Op::Find(k) => {
                let k = i64::from(k);
                if bst.find(k).map(Node::value) != model.iter().find(|&&x| x == k).copied() {
                    return false;
                }
            }
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut model = Vec::new();

    let finds_agree = do_ops(&ops, &mut tree, &mut model);

    let mut in_tree: Vec<i64> = tree.iter().map(Node::value).collect();
    in_tree.sort_unstable();
    model.sort_unstable();

    finds_agree && in_tree == model && tree.validate().is_ok() == !model.is_empty()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter()
        .all(|&x| tree.find(i64::from(x)).map(Node::value) == Some(i64::from(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| tree.find(i64::from(x)).is_none())
}

#[quickcheck]
fn boundary_find_agrees(xs: Vec<i8>, x: i8) -> bool {
    init_logging();
    let tree = build(&xs);
    let x = i64::from(x);

    tree::find(Some(&tree), Some(x)).map(Node::value) == tree.find(x).map(Node::value)
        && tree::find(Some(&tree), None).is_none()
}

#[quickcheck]
fn shape_is_independent_of_entry_point(xs: Vec<i8>) -> bool {
    let mut soft = Tree::new();
    for &x in &xs {
        tree::insert(Some(&mut soft), Some(i64::from(x)));
    }

    soft == build(&xs) && soft.len() == xs.len()
}

/// Every value equal to a node sits in that node's left subtree.
#[quickcheck]
fn duplicates_never_go_right(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.iter().all(|node| {
        let mut right: Vec<&Node> = node.right().into_iter().collect();
        while let Some(n) = right.pop() {
            if n.value() == node.value() {
                return false;
            }
            right.extend(n.left());
            right.extend(n.right());
        }
        true
    })
}

#[quickcheck]
fn levels_hold_every_node(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let levels = tree.levels();

    levels.len() == tree.height()
        && levels.iter().map(Vec::len).sum::<usize>() == xs.len()
        && tree.render().to_string().lines().count() == tree.height()
}
