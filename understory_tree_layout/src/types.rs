// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the layout tree: node identifiers, child arity, and level directions.

/// Identifier for a node in a [`Tree`](crate::Tree).
///
/// Trees are append-only, so an identifier stays valid for as long as the tree
/// that issued it exists. Queries return `None` (or an empty slice) for
/// identifiers outside the tree, and fallible operations report
/// [`TreeError::UnknownNode`](crate::TreeError::UnknownNode).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// How a node stores its children.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Arity {
    /// A fixed number of slots, created empty and filled by index.
    ///
    /// Slots may be filled in any order and may stay empty. The slot list never
    /// grows or shrinks.
    Fixed(usize),
    /// A growable list of children, filled by appending. Never has holes.
    Variable,
}

impl Arity {
    /// Returns the arity for a node with `len` children slots.
    ///
    /// A length of `0` selects [`Arity::Variable`].
    #[must_use]
    pub const fn fixed(len: usize) -> Self {
        if len == 0 {
            Self::Variable
        } else {
            Self::Fixed(len)
        }
    }

    /// Returns `true` for [`Arity::Fixed`].
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// `Fixed(0)` has no usable slots, so it behaves as `Variable`.
    pub(crate) const fn normalized(self) -> Self {
        match self {
            Self::Fixed(len) => Self::fixed(len),
            Self::Variable => Self::Variable,
        }
    }
}

impl From<usize> for Arity {
    fn from(len: usize) -> Self {
        Self::fixed(len)
    }
}

/// Which part of a level [`Tree::level_length`](crate::Tree::level_length) counts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LevelDirection {
    /// The whole level.
    #[default]
    Both,
    /// The start node and every node to its left.
    Left,
    /// The start node and every node to its right.
    Right,
}
