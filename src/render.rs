//! A rough, depth-grouped listing of a tree for debugging.
//!
//! Each depth gets one line. Shallower lines are indented further so the
//! output leans into a triangle, and each line lists the values at that
//! depth in the order a pre-order walk discovers them.
//!
//! ```
//! use validated_bst::Tree;
//!
//! let tree: Tree = vec![10, 5, 13, 3, 6, 11, 15].into_iter().collect();
//!
//! assert_eq!(
//!     tree.render().to_string(),
//!     "   [10]\n  [5, 13]\n [3, 6, 11, 15]\n"
//! );
//! ```

use std::fmt;

use crate::tree::Tree;

/// A [`Tree`] ready to be printed. Built by [`Tree::render`].
pub struct Rendered<'a> {
    tree: &'a Tree,
}

impl Tree {
    /// The values of the tree grouped by depth, root first.
    pub fn levels(&self) -> Vec<Vec<i64>> {
        let mut levels: Vec<Vec<i64>> = Vec::new();
        for (depth, node) in self.walk() {
            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            levels[depth].push(node.value());
        }
        levels
    }

    /// Displays the tree one depth per line.
    pub fn render(&self) -> Rendered<'_> {
        Rendered { tree: self }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = self.tree.levels();
        let max_depth = levels.len();
        for (depth, values) in levels.iter().enumerate() {
            writeln!(f, "{:indent$}{:?}", "", values, indent = max_depth - depth)?;
        }
        Ok(())
    }
}
