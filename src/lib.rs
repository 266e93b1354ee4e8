//! This crate provides an unbalanced, integer-keyed Binary Search Tree (BST)
//! together with a validator that proves or disproves the BST invariant.
//!
//! ## Binary Search Tree
//!
//! A BST is built out of `Node`s. Each `Node` stores a value and may have a
//! left and a right child. The invariant kept here is the inclusive one:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! Insertion routes equal values to the left, so any tree built through
//! [`Tree::insert`] satisfies the invariant. Trees can also be assembled (or
//! corrupted) by hand, which is what [`Tree::validate`] exists for: it walks
//! the whole tree carrying the bounds every node inherits from its ancestors
//! and stops at the first node that falls outside them.
//!
//! ## Two failure policies
//!
//! The boundary functions [`tree::insert`] and [`tree::find`] accept missing
//! input and degrade to a no-op or "not found", reporting the problem through
//! `tracing`. Validation is the opposite: [`validate::validate`] returns the
//! first violation as a [`TreeError`] and looks no further.
//!
//! # Examples
//!
//! ```
//! use validated_bst::{Tree, TreeError};
//!
//! let mut tree: Tree = [10, 5, 13, 3, 6, 11, 15].iter().copied().collect();
//! assert_eq!(tree.validate(), Ok(()));
//!
//! tree.find_mut(5).unwrap().set_value(12);
//! assert_eq!(
//!     tree.validate(),
//!     Err(TreeError::InvalidValue { value: 12, lower: None, upper: Some(10) })
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod render;
pub mod tree;
pub mod validate;


pub use error::{InvalidInsertValue, Result, TreeError};
pub use tree::{Node, Tree};
pub use validate::Bounds;
