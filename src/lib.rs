//! An AVL tree: a Binary Search Tree (BST) that rebalances itself after every
//! insert and delete so that lookups stay `O(lg N)` no matter the order keys
//! arrive in.
//!
//! ## Binary Search Tree
//!
//! A BST is made of `Node`s. Each `Node` stores a key and may have a left and
//! a right child. For every `Node`:
//!
//! 1. Every key in its left subtree sorts at or before its own key.
//! 2. Every key in its right subtree sorts at or after its own key.
//!
//! > Equal keys are allowed. A new key equal to an existing one is routed to
//! > the right, so the tree behaves like a sorted multiset.
//!
//! Searching walks a single path from the root, so it takes `O(height)`.
//! Visiting the left subtree, then the node, then the right subtree yields the
//! keys in sorted order.
//!
//! ## AVL
//!
//! Inserting ascending keys into a plain BST produces a linked list with
//! height `N`. An AVL tree caches each node's height and, for every node,
//! keeps the heights of its two subtrees within one of each other. Whenever
//! a mutation breaks that, one or two rotations restore it. The resulting
//! height is at most about `1.44 lg(N + 2)`.
//!
//! ```
//! use avl_bst::Tree;
//!
//! let tree: Tree<u32> = (0..1000).collect();
//!
//! assert_eq!(tree.len(), 1000);
//! assert!(tree.height() <= 15);
//! assert!(tree.check().is_ok());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod print;
mod tree;

pub use error::InvariantError;
pub use iter::Iter;
pub use node::Node;
pub use tree::Tree;
