//! The cell a [`Tree`][crate::Tree] is built out of.

use std::cmp::Ordering;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Height of a possibly empty subtree. Empty subtrees have a height of 0.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// A `Node` holds a key and exclusively owns up to two children.
///
/// Nodes compare to each other by key only. To compare a node against a bare key use
/// [`Node::cmp_key`].
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(key: T) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// The left child, if any. Every key in it sorts at or before this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any. Every key in it sorts at or after this node's key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The cached height of the subtree rooted here.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Height of the left subtree minus height of the right subtree. Positive means left-heavy.
    pub fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Compares this node's key against a bare key.
    pub fn cmp_key(&self, key: &T) -> Ordering
    where
        T: Ord,
    {
        self.key.cmp(key)
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
