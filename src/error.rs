//! Error types for tree validation and insertion.

use std::fmt;

use thiserror::Error;

/// Why a tree failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// There is no tree, or the tree has no root.
    #[error("tree, root, or root value does not exist")]
    InvalidStructure,

    /// A node's value lies outside the bounds inherited from its ancestors.
    #[error(
        "{value} does not fall within valid range. \
         Node value: {value}, Lower bound: {}, Upper bound: {}",
        lower_limit(.lower),
        upper_limit(.upper)
    )]
    InvalidValue {
        /// The offending node's value.
        value: i64,
        /// Inclusive lower bound the node had to respect, `None` if unbounded.
        lower: Option<i64>,
        /// Inclusive upper bound the node had to respect, `None` if unbounded.
        upper: Option<i64>,
    },
}

/// Why a value was refused by [`insert`][crate::tree::insert].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInsertValue {
    /// No value was supplied.
    #[error("value does not exist")]
    Missing,
}

/// Result type alias for validation.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Displays one side of a range, spelling a missing limit as an infinity.
pub(crate) struct Limit {
    value: Option<i64>,
    infinity: &'static str,
}

impl Limit {
    pub(crate) fn lower(value: Option<i64>) -> Self {
        Self {
            value,
            infinity: "-inf",
        }
    }

    pub(crate) fn upper(value: Option<i64>) -> Self {
        Self {
            value,
            infinity: "+inf",
        }
    }
}

fn lower_limit(value: &Option<i64>) -> Limit {
    Limit::lower(*value)
}

fn upper_limit(value: &Option<i64>) -> Limit {
    Limit::upper(*value)
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(n) => write!(f, "{}", n),
            None => f.write_str(self.infinity),
        }
    }
}
