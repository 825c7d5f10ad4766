//! Errors reported when a tree's structure is inspected with [`Tree::validate`].
//!
//! [`Tree::validate`]: crate::Tree::validate

use thiserror::Error;

/// A structural invariant that does not hold for a tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// The in-order walk produced a value that is not strictly greater than the one before
    /// it. `position` is the zero based index of the offending value in that walk.
    #[error("in-order value at position {position} is not greater than its predecessor")]
    OutOfOrder {
        /// Index of the offending value in the in-order sequence.
        position: usize,
    },
    /// The cached length does not match the number of reachable nodes.
    #[error("tree reports {cached} values but holds {counted} nodes")]
    LengthMismatch {
        /// The length the tree believes it has.
        cached: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}
