//! Proving the BST invariant.
//!
//! Every node inherits an inclusive range from its ancestors: going left
//! caps the range at the parent's value, going right floors it there. The
//! validator walks the tree in pre-order carrying that range and returns the
//! first node that falls outside it. Nothing past that node is inspected.
//!
//! Because the bounds are inclusive, a value equal to an ancestor is fine on
//! either side of it.

use std::fmt;

use tracing::{debug, instrument};

use crate::error::{Limit, Result, TreeError};
use crate::tree::{Node, Tree};

/// An inclusive range a node's value must lie in.
///
/// A side without a limit is `None`. The root of a tree starts with both
/// sides open; every step down closes one side at the parent's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest allowed value, if any.
    pub lower: Option<i64>,
    /// Largest allowed value, if any.
    pub upper: Option<i64>,
}

impl Bounds {
    /// No limit on either side. The root of a tree starts with these.
    pub const UNBOUNDED: Bounds = Bounds {
        lower: None,
        upper: None,
    };

    /// Bounds from `lower` to `upper`, both inclusive.
    pub fn new(lower: i64, upper: i64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Whether `value` lies within these bounds.
    pub fn contains(&self, value: i64) -> bool {
        self.lower.map_or(true, |lower| lower <= value)
            && self.upper.map_or(true, |upper| value <= upper)
    }

    fn left_of(self, value: i64) -> Self {
        Self {
            upper: Some(value),
            ..self
        }
    }

    fn right_of(self, value: i64) -> Self {
        Self {
            lower: Some(value),
            ..self
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", Limit::lower(self.lower), Limit::upper(self.upper))
    }
}

/// Proves that `tree` exists, has a root, and satisfies the BST invariant.
///
/// # Errors
///
/// [`TreeError::InvalidStructure`] when there is no tree or no root, or
/// [`TreeError::InvalidValue`] for the first node, in pre-order, whose value
/// is outside its inherited bounds.
///
/// # Examples
///
/// ```
/// use validated_bst::{validate::validate, Tree, TreeError};
///
/// let tree: Tree = vec![2, 1, 3].into_iter().collect();
/// assert_eq!(validate(Some(&tree)), Ok(()));
///
/// assert_eq!(validate(None), Err(TreeError::InvalidStructure));
/// assert_eq!(validate(Some(&Tree::new())), Err(TreeError::InvalidStructure));
/// ```
pub fn validate(tree: Option<&Tree>) -> Result<()> {
    check_structure(tree)?.validate()
}

/// The structural half of validation: the tree must exist and have a root.
pub fn check_structure(tree: Option<&Tree>) -> Result<&Tree> {
    match tree {
        Some(tree) if !tree.is_empty() => Ok(tree),
        _ => Err(TreeError::InvalidStructure),
    }
}

impl Tree {
    /// Proves the BST invariant over the whole tree, starting from
    /// [`Bounds::UNBOUNDED`] at the root.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use validated_bst::{Tree, TreeError};
    ///
    /// let mut tree: Tree = vec![10, 5, 13, 3, 6, 11, 15].into_iter().collect();
    /// assert_eq!(tree.validate(), Ok(()));
    ///
    /// tree.find_mut(11).unwrap().set_value(20);
    /// assert_eq!(
    ///     tree.validate(),
    ///     Err(TreeError::InvalidValue { value: 20, lower: Some(10), upper: Some(15) })
    /// );
    /// ```
    #[instrument(level = "debug", skip(self))]
    pub fn validate(&self) -> Result<()> {
        self.validate_within(Bounds::UNBOUNDED)
    }

    /// Like [`validate`][Tree::validate] but the root must already lie
    /// within `bounds`. Useful for a subtree about to be placed under
    /// ancestors that impose their own range.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    #[instrument(level = "debug", skip(self))]
    pub fn validate_within(&self, bounds: Bounds) -> Result<()> {
        let root = self.root().ok_or(TreeError::InvalidStructure)?;
        check_nodes(root, bounds)
    }
}

fn check_nodes(root: &Node, bounds: Bounds) -> Result<()> {
    let mut stack = vec![(root, bounds)];
    while let Some((node, bounds)) = stack.pop() {
        let value = node.value();
        if !bounds.contains(value) {
            debug!(value, %bounds, "node out of bounds");
            return Err(TreeError::InvalidValue {
                value,
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }

        // Right first so that the left subtree is checked first.
        if let Some(right) = node.right() {
            stack.push((right, bounds.right_of(value)));
        }
        if let Some(left) = node.left() {
            stack.push((left, bounds.left_of(value)));
        }
    }
    Ok(())
}
