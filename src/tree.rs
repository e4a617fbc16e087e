//! An owned AVL tree. Every mutation walks down to the affected position and then fixes heights
//! and rebalances each ancestor on the way back up, so the tree is balanced whenever control
//! returns to the caller.
//!
//! # Examples
//!
//! ```
//! use avl_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! // Ascending inserts would make a plain BST into a linked list.
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 3);
//!
//! // Deleting returns the removed key.
//! assert_eq!(tree.delete(&4), Some(4));
//! assert!(!tree.search(&4));
//!
//! // Deleting something that isn't there does nothing.
//! assert_eq!(tree.delete(&4), None);
//! assert_eq!(tree.inorder_traversal(), vec![1, 2, 3, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::mem;

use log::{debug, trace};

use crate::error::InvariantError;
use crate::iter::Iter;
use crate::node::{height, Link, Node};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of keys.
///
/// Equal keys are kept as separate nodes, so the tree behaves like a sorted multiset.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a `Tree` holding exactly `key`.
    pub fn with_key(key: T) -> Self {
        Self {
            root: Some(Node::new_boxed(key)),
            len: 1,
        }
    }

    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of levels in the tree. An empty tree has height 0 and a single node has height 1.
    /// This is `O(1)` since every node caches its height.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The balance factor of the root: height of its left subtree minus height of its right
    /// subtree. Always in `-1..=1`; 0 for an empty tree.
    pub fn balance(&self) -> isize {
        self.root().map_or(0, Node::balance)
    }

    /// The node with the smallest key, or `None` for an empty tree.
    pub fn get_min_value_node(&self) -> Option<&Node<T>> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node)
    }

    /// The node with the largest key, or `None` for an empty tree.
    pub fn get_max_value_node(&self) -> Option<&Node<T>> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node)
    }

    /// An ascending iterator over the keys.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// All keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(tree.inorder_traversal(), vec![1, 1, 2, 3]);
    /// ```
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns whether a node with the given key is in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &T) -> bool
    where
        T: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// Inserts the given key. Inserting a key that is already present adds another node for it,
    /// placed after the existing ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.inorder_traversal(), vec![2, 2]);
    /// ```
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        insert(&mut self.root, key);
        self.len += 1;
    }

    /// Deletes one node containing the given key from the tree and returns its key. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::Tree;
    ///
    /// let mut tree = Tree::with_key(1);
    ///
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert!(!tree.search(&1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let deleted = delete(&mut self.root, key);
        match deleted {
            Some(_) => self.len -= 1,
            None => debug!("delete of absent key left the tree unchanged"),
        }
        deleted
    }

    /// Walks the entire tree verifying cached heights, the AVL balance bound, key order, and the
    /// cached length. Returns the first violation found.
    pub fn check(&self) -> Result<(), InvariantError>
    where
        T: Ord,
    {
        let counted = check_subtree(&self.root, 0)?;
        if counted != self.len {
            return Err(InvariantError::LengthMismatch {
                cached: self.len,
                counted,
            });
        }

        let out_of_order = self
            .iter()
            .zip(self.iter().skip(1))
            .position(|(prev, next)| next < prev);
        match out_of_order {
            Some(position) => Err(InvariantError::OutOfOrder {
                position: position + 1,
            }),
            None => Ok(()),
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert<T: Ord>(link: &mut Link<T>, key: T) {
    match link {
        None => {
            *link = Some(Node::new_boxed(key));
            return;
        }
        // Ties go right.
        Some(node) if key < node.key => insert(&mut node.left, key),
        Some(node) => insert(&mut node.right, key),
    }

    rebalance(link);
}

fn delete<T: Ord>(link: &mut Link<T>, key: &T) -> Option<T> {
    let node = link.as_mut()?;
    let deleted = match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key)?,
        Ordering::Greater => delete(&mut node.right, key)?,
        Ordering::Equal => match (node.left.is_some(), node.right.is_some()) {
            // With both children present, this node stays where it is and takes over its in-order
            // successor's key. The successor has no left child so unlinking it is simple.
            (true, true) => {
                let successor = remove_min(&mut node.right)?;
                mem::replace(&mut node.key, successor.key)
            }
            // Otherwise splice in the only child (or nothing). That child is an untouched AVL
            // subtree so there's nothing to rebalance at this level.
            (false, _) => {
                let mut deleted = link.take()?;
                *link = deleted.right.take();
                return Some(deleted.key);
            }
            (true, false) => {
                let mut deleted = link.take()?;
                *link = deleted.left.take();
                return Some(deleted.key);
            }
        },
    };

    rebalance(link);
    Some(deleted)
}

/// Unlinks the leftmost node of the subtree, rebalancing every ancestor it passed through.
fn remove_min<T>(link: &mut Link<T>) -> Option<Box<Node<T>>> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let min = remove_min(&mut node.left);
        rebalance(link);
        return min;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Recomputes the height of the subtree root and, if its children differ in height by two,
/// rotates it back into balance. Expects both children to already be valid AVL trees.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
fn rebalance<T>(link: &mut Link<T>) {
    let Some(node) = link.as_mut() else {
        return;
    };

    node.fix_height();
    match node.balance() {
        // Left-heavy. If the left child leans right this is the left-right case.
        b if b > 1 => {
            if node.left().map_or(0, Node::balance) < 0 {
                rotate_left(&mut node.left);
            }
            rotate_right(link);
        }
        // Right-heavy. If the right child leans left this is the right-left case.
        b if b < -1 => {
            if node.right().map_or(0, Node::balance) > 0 {
                rotate_right(&mut node.right);
            }
            rotate_left(link);
        }
        _ => {}
    }

    if cfg!(debug_assertions) {
        let Some(node) = link.as_deref() else {
            return;
        };
        assert_eq!(
            node.height,
            height(&node.left).max(height(&node.right)) + 1
        );
        assert!(node.balance().abs() <= 1);
    }
}

/// Rotate the subtree to the right. This moves the left child up vertically and the old root down
/// vertically. Used to rebalance the tree when the left child is too tall. As such, it must only
/// be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///       old_root               new_root
///        /     \                /     \
///   new_root    z   rotate ->  x    old_root
///    /   \                            /  \
///   x     y                          y    z
/// ```
fn rotate_right<T>(link: &mut Link<T>) {
    let Some(mut old_root) = link.take() else {
        return;
    };
    let mut new_root = old_root.left.take().expect("Rotate right => left child");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    trace!("rotated right, subtree height is now {}", new_root.height);

    *link = Some(new_root);
}

/// The mirror image of [`rotate_right`]. Must only be called when there is a right child.
fn rotate_left<T>(link: &mut Link<T>) {
    let Some(mut old_root) = link.take() else {
        return;
    };
    let mut new_root = old_root.right.take().expect("Rotate left => right child");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    trace!("rotated left, subtree height is now {}", new_root.height);

    *link = Some(new_root);
}

/// Verifies heights and balance below `link`, returning how many nodes it holds.
fn check_subtree<T>(link: &Link<T>, depth: usize) -> Result<usize, InvariantError> {
    let Some(node) = link else {
        return Ok(0);
    };

    let left = check_subtree(&node.left, depth + 1)?;
    let right = check_subtree(&node.right, depth + 1)?;

    let actual = height(&node.left).max(height(&node.right)) + 1;
    if node.height != actual {
        return Err(InvariantError::HeightMismatch {
            depth,
            cached: node.height,
            actual,
        });
    }

    let balance = node.balance();
    if balance.abs() > 1 {
        return Err(InvariantError::Unbalanced { depth, balance });
    }

    Ok(left + right + 1)
}
