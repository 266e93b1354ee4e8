use validated_bst::{validate, Bounds, Node, Tree, TreeError};

use quickcheck::TestResult;

fn build(xs: &[i64]) -> Tree {
    xs.iter().copied().collect()
}

/// The bounds of the first node holding `value`, found in pre-order by
/// plain recursion.
fn bounds_of(node: Option<&Node>, value: i64, bounds: Bounds) -> Option<Bounds> {
    let node = node?;
    if node.value() == value {
        return Some(bounds);
    }
    let left = Bounds {
        upper: Some(node.value()),
        ..bounds
    };
    let right = Bounds {
        lower: Some(node.value()),
        ..bounds
    };
    bounds_of(node.left(), value, left).or_else(|| bounds_of(node.right(), value, right))
}

#[quickcheck]
fn any_insertion_order_validates(xs: Vec<i64>) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }

    TestResult::from_bool(build(&xs).validate().is_ok())
}

#[quickcheck]
fn empty_tree_is_structurally_invalid(xs: Vec<i64>) -> bool {
    let expected = if xs.is_empty() {
        Err(TreeError::InvalidStructure)
    } else {
        Ok(())
    };

    validate::validate(Some(&build(&xs))) == expected
}

#[quickcheck]
fn corrupting_one_node_is_reported(xs: Vec<i16>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let xs: Vec<i64> = xs.into_iter().map(i64::from).collect();
    let target = xs[pick % xs.len()];
    let mut tree = build(&xs);

    let bounds = bounds_of(tree.root(), target, Bounds::UNBOUNDED).unwrap();
    let corrupt = match (bounds.lower, bounds.upper) {
        (_, Some(upper)) if upper < i64::MAX => upper + 1,
        (Some(lower), _) if lower > i64::MIN => lower - 1,
        // The root can hold anything.
        _ => return TestResult::discard(),
    };
    tree.find_mut(target).unwrap().set_value(corrupt);

    TestResult::from_bool(
        tree.validate()
            == Err(TreeError::InvalidValue {
                value: corrupt,
                lower: bounds.lower,
                upper: bounds.upper,
            }),
    )
}

#[quickcheck]
fn equal_to_a_bound_stays_valid(xs: Vec<i16>, pick: usize, high: bool) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let xs: Vec<i64> = xs.into_iter().map(i64::from).collect();
    let target = xs[pick % xs.len()];
    let mut tree = build(&xs);

    let bounds = bounds_of(tree.root(), target, Bounds::UNBOUNDED).unwrap();
    // Moving a node to a bound only keeps its own subtree in order when the
    // side it moves towards is empty.
    let node = tree.find(target).unwrap();
    let edge = match (high, bounds.lower, bounds.upper) {
        (true, _, Some(upper)) if node.right().is_none() => upper,
        (false, Some(lower), _) if node.left().is_none() => lower,
        _ => return TestResult::discard(),
    };
    tree.find_mut(target).unwrap().set_value(edge);

    TestResult::from_bool(tree.validate().is_ok())
}
