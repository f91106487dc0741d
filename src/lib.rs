//! This crate exposes an unbalanced Binary Search Tree (BST) storing a set
//! of distinct, ordered values, mostly for educational purposes, along with
//! a small layer for putting the tree on a 2D canvas.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The invariants here are strict, so every value is stored at most once and
//! the tree behaves as a set. Searching takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). This
//! tree does no rebalancing, so inserting values in sorted order degenerates
//! it into a chain and `height` becomes the number of values. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree; see [`iterative::Tree::iter`].
//!
//! ## Drawing
//!
//! The tree itself knows nothing about graphics. It hands out node positions
//! through [`iterative::Tree::layout`], and the [`render`] module turns that
//! sequence into draw calls against whatever [`render::Canvas`] backend the
//! caller plugs in.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iterative;
pub mod render;
