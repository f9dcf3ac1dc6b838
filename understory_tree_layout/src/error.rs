// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition errors for structural operations.

use crate::types::NodeId;

/// Broad category of a [`TreeError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The operation does not apply to the target node, for example appending to a
    /// fixed-arity node.
    InvalidOperation,
    /// An argument is outside the range the target node accepts.
    InvalidArgument,
}

/// Error returned by structural operations on a [`Tree`](crate::Tree).
///
/// Every variant is a caller bug. The tree is left unchanged when one is returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// The identifier was not issued by this tree.
    #[error("node {0:?} is not part of this tree")]
    UnknownNode(NodeId),
    /// `insert_child` was called on a variable-arity node.
    #[error("insert_child needs a fixed-arity parent")]
    NotFixedArity,
    /// `push_child` was called on a fixed-arity node.
    #[error("push_child needs a variable-arity parent")]
    NotVariableArity,
    /// The slot index is past the end of a fixed-arity node.
    #[error("slot {index} is out of range for a node with {arity} slots")]
    IndexOutOfRange {
        /// Requested slot.
        index: usize,
        /// Number of slots on the parent.
        arity: usize,
    },
    /// The slot already holds a child.
    #[error("slot {index} already holds a child")]
    SlotOccupied {
        /// Requested slot.
        index: usize,
    },
    /// The source description does not fit the arity of the target root.
    #[error("source shape does not match the arity of the target root")]
    ShapeMismatch,
    /// The target root already has children.
    #[error("copy target already has children")]
    NotEmpty,
}

impl TreeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFixedArity | Self::NotVariableArity | Self::ShapeMismatch | Self::NotEmpty => {
                ErrorKind::InvalidOperation
            }
            Self::UnknownNode(_) | Self::IndexOutOfRange { .. } | Self::SlotOccupied { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
