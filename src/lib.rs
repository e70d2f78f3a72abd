//! This crate exposes an unbalanced Binary Search Tree (BST) together with a
//! second, purely structural construction mode that reproduces an array's
//! layout as a complete binary tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! find, and delete stored keys. BSTs are typically defined recursively using
//! the notion of a `Node`. A `Node` stores a key and sometimes has child
//! `Node`s. The most important invariants of the trees built here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than *or equal to* its own key. Equal keys always descend
//!    right, so duplicates are kept rather than rejected.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). Nothing here
//! rebalances: the height stays `O(lg N)` for friendly insertion orders and
//! degenerates to `O(N)` for adversarial ones such as sorted input. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree - that is exactly what the in-order
//! traversal does.
//!
//! ## Complete-tree layout
//!
//! [`Tree::from_complete`][tree::Tree::from_complete] ignores key ordering
//! entirely and only reproduces an array's layout as a tree: the node holding
//! array index `i` owns the nodes for indices `2i + 1` and `2i + 2`, truncated
//! at the array's length. Every level except possibly the last is full, which
//! caps the depth at `⌈lg(N + 1)⌉`.
//!
//! Absence is always a sentinel, never an error: the empty tree, a failed
//! lookup, and the minimum or maximum of an empty tree are all represented by
//! [`Tree::Leaf`][tree::Tree::Leaf] or `None`.

#![deny(missing_docs)]

pub mod tree;

mod util;

#[cfg(test)]
mod test;
