//! This crate exposes a plain, owned Binary Search Tree (BST) along with the
//! classic traversals and a couple of structural queries.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and may have up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. This tree does **not** rebalance
//! itself, so the height depends entirely on insertion order: inserting an
//! ascending run produces a chain. [`Tree::is_balanced`] only reports on the
//! current shape.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Insertion, Tree};
//!
//! let mut tree = Tree::new();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.insert(4), Insertion::Duplicate);
//! assert_eq!(tree.dfs_in_order(), vec![&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(tree.bfs(), vec![&5, &3, &8, &1, &4, &7, &9]);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.find_second_highest(), Some(&8));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;
mod util;

pub use error::InvariantError;
pub use tree::{Insertion, Node, Tree};
