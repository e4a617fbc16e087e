use thiserror::Error;

/// A broken structural invariant reported by [`Tree::check`][crate::Tree::check].
///
/// The public operations never leave a tree in a state that produces one of these. They exist
/// so tests (and paranoid callers) can verify that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A node's cached height disagrees with its children.
    #[error("cached height {cached} at depth {depth} should be {actual}")]
    HeightMismatch {
        /// Distance from the root, the root being at depth 0.
        depth: usize,
        /// The height stored in the node.
        cached: usize,
        /// `1 + max(height(left), height(right))`.
        actual: usize,
    },
    /// A node's subtrees differ in height by more than one.
    #[error("balance factor {balance} at depth {depth} is outside [-1, 1]")]
    Unbalanced {
        /// Distance from the root, the root being at depth 0.
        depth: usize,
        /// `height(left) - height(right)`.
        balance: isize,
    },
    /// The in-order walk found a key smaller than the one before it.
    #[error("in-order position {position} is smaller than its predecessor")]
    OutOfOrder {
        /// Zero-based index in the in-order sequence.
        position: usize,
    },
    /// The cached length disagrees with the number of reachable nodes.
    #[error("tree claims {cached} nodes but {counted} are reachable")]
    LengthMismatch {
        /// The length stored in the tree.
        cached: usize,
        /// The nodes actually found.
        counted: usize,
    },
}
