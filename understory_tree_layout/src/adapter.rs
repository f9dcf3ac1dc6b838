// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy an external tree-shaped value into a [`Tree`].
//!
//! The external value only needs to be reachable through plain accessors: one
//! for the payload and one or more for the children. A [`CopyConfig`] bundles
//! those accessors and says whether the source has a fixed number of child
//! fields (a binary tree, a linked list) or a single growable collection (a
//! general tree).
//!
//! Copied nodes keep a shared borrow of the source node they came from in
//! [`Tree::bind`], which makes it easy to map a laid-out node back to the
//! value it draws.
//!
//! ```rust
//! use understory_tree_layout::{ChildFields, CopyConfig, Tree};
//!
//! struct Dir {
//!     name: &'static str,
//!     entries: Vec<Dir>,
//! }
//!
//! impl Dir {
//!     fn name(&self) -> &'static str {
//!         self.name
//!     }
//!
//!     fn entries(&self) -> &[Dir] {
//!         &self.entries
//!     }
//! }
//!
//! let src = Dir {
//!     name: "/",
//!     entries: vec![
//!         Dir { name: "bin", entries: vec![] },
//!         Dir { name: "usr", entries: vec![Dir { name: "lib", entries: vec![] }] },
//!     ],
//! };
//!
//! let config = CopyConfig {
//!     data: Dir::name,
//!     children: ChildFields::Variable(Dir::entries),
//! };
//! let tree = Tree::from_source(&src, &config);
//!
//! let names: Vec<_> = tree.iter().map(|id| *tree.data(id).unwrap()).collect();
//! assert_eq!(names, ["/", "bin", "usr", "lib"]);
//! assert!(core::ptr::eq(*tree.bind(tree.root()).unwrap(), &src));
//! ```

use alloc::vec::Vec;

use crate::error::TreeError;
use crate::tree::{ROOT, Slot, Tree};
use crate::types::{Arity, NodeId};

/// Where the children of a source node live.
pub enum ChildFields<'c, S> {
    /// A fixed list of child fields, one accessor per slot.
    ///
    /// A field that returns `None` leaves a hole in the copied node.
    Fixed(&'c [fn(&S) -> Option<&S>]),
    /// A single growable collection of children.
    Variable(fn(&S) -> &[S]),
}

impl<S> Clone for ChildFields<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ChildFields<'_, S> {}

impl<S> core::fmt::Debug for ChildFields<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(fields) => f.debug_tuple("Fixed").field(&fields.len()).finish(),
            Self::Variable(_) => f.debug_tuple("Variable").finish(),
        }
    }
}

impl<S> ChildFields<'_, S> {
    /// The arity a copied node needs for this source shape.
    #[must_use]
    pub fn arity(&self) -> Arity {
        match self {
            Self::Fixed(fields) => Arity::fixed(fields.len()),
            Self::Variable(_) => Arity::Variable,
        }
    }

    /// Returns true if a node of `arity` can hold the children of this shape.
    fn fits(&self, arity: Arity) -> bool {
        match (self, arity) {
            (Self::Fixed(fields), _) if fields.is_empty() => true,
            (Self::Fixed(fields), Arity::Fixed(len)) => len >= fields.len(),
            (Self::Variable(_), Arity::Variable) => true,
            _ => false,
        }
    }
}

/// Describes how to read an external tree of `S` values.
pub struct CopyConfig<'c, S, T> {
    /// Reads the payload of a source node.
    pub data: fn(&S) -> T,
    /// Reads the children of a source node.
    pub children: ChildFields<'c, S>,
}

impl<S, T> core::fmt::Debug for CopyConfig<'_, S, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CopyConfig")
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

impl<'a, S, T> Tree<T, &'a S> {
    /// Build a tree mirroring `source`.
    ///
    /// The root gets the arity implied by `config`, and every node binds the
    /// source node it was copied from.
    pub fn from_source(source: &'a S, config: &CopyConfig<'_, S, T>) -> Self {
        let arity = config.children.arity();
        let mut tree = Self::with_root((config.data)(source), Some(source), arity);
        tree.copy_below(ROOT, source, config);
        tree
    }

    /// Copy `source` into this tree, starting at the root.
    ///
    /// The root's payload and bind are overwritten from `source`; everything
    /// below it is created. Fixed fields keep their slot index (empty fields
    /// stay holes), and collection children are appended in order.
    ///
    /// # Errors
    ///
    /// - [`TreeError::ShapeMismatch`] if the root's arity cannot hold the
    ///   source's children: `config` has fixed fields but the root is variable
    ///   (or has fewer slots), or `config` has a collection but the root is fixed.
    /// - [`TreeError::NotEmpty`] if the root already has children.
    pub fn copy_data(
        &mut self,
        source: &'a S,
        config: &CopyConfig<'_, S, T>,
    ) -> Result<(), TreeError> {
        let root = self.node(ROOT);
        if !config.children.fits(root.arity) {
            return Err(TreeError::ShapeMismatch);
        }
        if root.children.iter().any(Option::is_some) {
            return Err(TreeError::NotEmpty);
        }
        let root = self.node_mut(ROOT);
        root.data = (config.data)(source);
        root.bind = Some(source);
        self.copy_below(ROOT, source, config);
        Ok(())
    }

    /// Create the descendants of `source` under `at`.
    ///
    /// Shape has been checked, so every attach fits its parent.
    fn copy_below(&mut self, at: NodeId, source: &'a S, config: &CopyConfig<'_, S, T>) {
        log::trace!("copying source children ({:?}) below {at:?}", config.children);
        let mut stack: Vec<(NodeId, &'a S)> = alloc::vec![(at, source)];
        let mut created: Vec<(NodeId, &'a S)> = Vec::new();
        while let Some((id, src)) = stack.pop() {
            match config.children {
                ChildFields::Fixed(fields) => {
                    for (index, field) in fields.iter().enumerate() {
                        if let Some(child) = field(src) {
                            let data = (config.data)(child);
                            let node = self.attach(id, Slot::At(index), data, Some(child));
                            created.push((node, child));
                        }
                    }
                }
                ChildFields::Variable(children) => {
                    for child in children(src) {
                        let node = self.attach(id, Slot::Append, (config.data)(child), Some(child));
                        created.push((node, child));
                    }
                }
            }
            // Visit the first child next.
            stack.extend(created.drain(..).rev());
        }
    }
}
