//! The tree model plus insertion and lookup.
//!
//! A [`Tree`] owns at most one [`Node`] and every `Node` owns its children.
//! Nothing in here rebalances: the shape of the tree is entirely decided by
//! insertion order, so sorted input gives a tree shaped like a linked list.
//! All walks therefore use an explicit stack instead of recursion.
//!
//! # Examples
//!
//! ```
//! use validated_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(1).is_none());
//!
//! tree.insert(1);
//! tree.insert(1);
//!
//! // The duplicate went to the left.
//! let root = tree.root().unwrap();
//! assert_eq!(root.left().map(|n| n.value()), Some(1));
//! assert!(root.right().is_none());
//! ```

use std::fmt;

use tracing::{debug, error, instrument};

use crate::error::InvalidInsertValue;
use crate::validate;

/// A single value in a [`Tree`] with its two (possibly empty) subtrees.
pub struct Node {
    value: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns this node with `left` as its left child, replacing any
    /// previous one. No ordering is checked.
    pub fn with_left(mut self, left: Node) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Returns this node with `right` as its right child, replacing any
    /// previous one. No ordering is checked.
    pub fn with_right(mut self, right: Node) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Overwrites the value stored in this node. The tree is not
    /// reordered, so this can break the BST invariant.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// The left child, whose subtree should hold values `<=` this one.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child, whose subtree should hold values `>=` this one.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Mutable access to the left child.
    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child.
    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach the children first so each popped node drops as a leaf.
        let mut stack: Vec<Box<Node>> = self.left.take().into_iter().collect();
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Two nodes are equal when their subtrees have the same shape and the same
/// values. Compared pairwise with an explicit stack.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

/// Shows the value and the values of the direct children only.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// An unbalanced Binary Search Tree of `i64`s.
#[derive(Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wraps an already built subtree. The subtree is taken as is; call
    /// [`validate`][Tree::validate] before trusting its ordering.
    pub fn with_root(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Mutable access to the root node.
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The number of levels in the tree. An empty tree has a height of 0
    /// and a lone root a height of 1.
    pub fn height(&self) -> usize {
        self.walk().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Inserts `value` into the tree. Values less than or equal to a node
    /// go into its left subtree, greater values into its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10);
    /// tree.insert(5);
    /// tree.insert(13);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), 10);
    /// assert_eq!(root.left().map(|n| n.value()), Some(5));
    /// assert_eq!(root.right().map(|n| n.value()), Some(13));
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i64) {
        let mut node = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Box::new(Node::new(value)));
                debug!(value, "tree root created");
                return;
            }
        };

        loop {
            let slot = if value <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            match slot {
                Some(child) => node = &mut **child,
                None => {
                    *slot = Some(Box::new(Node::new(value)));
                    return;
                }
            }
        }
    }

    /// Finds the first node holding `value`, searching depth first: a node,
    /// then its left subtree, then its right subtree. The BST ordering is
    /// deliberately not used to prune, so this also works on trees that
    /// have not been validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated_bst::Tree;
    ///
    /// let tree: Tree = vec![10, 5, 13].into_iter().collect();
    ///
    /// assert_eq!(tree.find(13).map(|n| n.value()), Some(13));
    /// assert!(tree.find(99).is_none());
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, value: i64) -> Option<&Node> {
        self.iter().find(|node| node.value == value)
    }

    /// Like [`find`][Tree::find] but hands out the node mutably.
    pub fn find_mut(&mut self, value: i64) -> Option<&mut Node> {
        let mut stack: Vec<&mut Node> = self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.value == value {
                return Some(node);
            }
            let Node { left, right, .. } = node;
            stack.extend(right.as_deref_mut());
            stack.extend(left.as_deref_mut());
        }
        None
    }

    /// Iterates over every node in pre-order (node, left, right).
    pub fn iter(&self) -> Iter<'_> {
        Iter { walk: self.walk() }
    }

    /// Pre-order walk yielding each node with its depth (the root is 0).
    pub(crate) fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.root().map(|root| (0, root)).into_iter().collect(),
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("levels", &self.levels())
            .finish()
    }
}

impl std::iter::FromIterator<i64> for Tree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i64> for Tree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the nodes of a [`Tree`].
pub struct Iter<'a> {
    walk: Walk<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|(_, node)| node)
    }
}

pub(crate) struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        if let Some(right) = node.right() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = node.left() {
            self.stack.push((depth + 1, left));
        }
        Some((depth, node))
    }
}

/// Inserts `value` into `tree`, tolerating missing input.
///
/// A missing tree or a missing value is logged as an error and the call
/// does nothing. This never fails; use it where a stream of possibly bad
/// inserts must not stop the caller.
///
/// # Examples
///
/// ```
/// use validated_bst::{tree, Tree};
///
/// let mut t = Tree::new();
/// tree::insert(Some(&mut t), Some(5));
/// tree::insert(Some(&mut t), None);
/// tree::insert(None, Some(6));
///
/// assert_eq!(t.len(), 1);
/// ```
pub fn insert(tree: Option<&mut Tree>, value: Option<i64>) {
    let tree = match tree {
        Some(tree) => tree,
        None => {
            error!("tree not defined");
            return;
        }
    };

    match check_value(value) {
        Ok(value) => tree.insert(value),
        Err(e) => error!(error = %e, "value is not valid"),
    }
}

fn check_value(value: Option<i64>) -> Result<i64, InvalidInsertValue> {
    value.ok_or(InvalidInsertValue::Missing)
}

/// Finds the first node holding `value` in `tree`, tolerating missing input.
///
/// The tree must pass the structural precheck of
/// [`validate`][crate::validate::validate] (it exists and has a root) and a
/// value must be given. Otherwise the problem is logged as an error and
/// `None` is returned, exactly as if nothing matched.
pub fn find(tree: Option<&Tree>, value: Option<i64>) -> Option<&Node> {
    let tree = match validate::check_structure(tree) {
        Ok(tree) => tree,
        Err(e) => {
            error!(error = %e, "tree is not valid");
            return None;
        }
    };

    let value = match value {
        Some(value) => value,
        None => {
            error!("value not provided");
            return None;
        }
    };

    tree.find(value)
}
