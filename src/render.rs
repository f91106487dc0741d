//! Drawing a [`Tree`] on a 2D canvas.
//!
//! The tree itself only produces positions via [`Tree::layout`]; everything
//! that actually touches a screen goes through the [`Canvas`] trait. That
//! keeps the data structure free of graphics concerns and lets tests record
//! draw calls instead of rendering them.
//!
//! # Examples
//!
//! ```
//! use bst_set::iterative::Tree;
//! use bst_set::render::{draw, Canvas};
//!
//! #[derive(Default)]
//! struct Labels(Vec<String>);
//!
//! impl Canvas for Labels {
//!     fn draw_node(&mut self, label: &str, _x: i32, _y: i32, _selected: bool) {
//!         self.0.push(label.to_string());
//!     }
//!     fn draw_edge(&mut self, _from: (i32, i32), _to: (i32, i32)) {}
//! }
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8] {
//!     tree.insert(x);
//! }
//!
//! let mut labels = Labels::default();
//! draw(&tree, &mut labels, None);
//! assert_eq!(labels.0, ["5", "3", "8"]);
//! ```

use std::fmt::Display;

use crate::iterative::Tree;

/// Horizontal center of the root node.
const ROOT_X: i32 = 400;
/// Vertical center of the root node.
const ROOT_Y: i32 = 40;
/// Vertical distance between consecutive levels.
const LEVEL_HEIGHT: i32 = 80;
/// Initial horizontal spread. It halves at every level.
const SPACING: i32 = 400;

/// The draw calls needed to put a tree on screen. Implement this for a
/// graphics backend (a labeled circle plus a connecting line is enough) or
/// for a recorder in tests.
pub trait Canvas {
    /// Draw one labeled node centered at `(x, y)`. A `selected` node should
    /// be visually distinguished from the rest.
    fn draw_node(&mut self, label: &str, x: i32, y: i32, selected: bool);

    /// Draw the edge between a parent node at `from` and its child at `to`.
    fn draw_edge(&mut self, from: (i32, i32), to: (i32, i32));
}

/// Draws the whole tree onto `canvas`, highlighting the node whose value
/// equals `selected`, if any.
pub fn draw<T, C>(tree: &Tree<T>, canvas: &mut C, selected: Option<&T>)
where
    T: Ord + Display,
    C: Canvas,
{
    for placed in tree.layout(ROOT_X, SPACING) {
        let y = ROOT_Y + placed.depth as i32 * LEVEL_HEIGHT;
        if let Some(parent_x) = placed.parent_x {
            canvas.draw_edge((parent_x, y - LEVEL_HEIGHT), (placed.x, y));
        }
        let highlight = selected == Some(placed.value);
        canvas.draw_node(&placed.value.to_string(), placed.x, y, highlight);
    }
}
