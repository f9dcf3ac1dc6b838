// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, insertion, queries.

use alloc::{string::String, vec::Vec};
use core::fmt::{Display, Write as _};

use kurbo::Point;
use smallvec::SmallVec;

use crate::error::TreeError;
use crate::types::{Arity, NodeId};

/// Child slots of a node. `None` marks a hole in a fixed-arity node.
pub(crate) type Slots = SmallVec<[Option<NodeId>; 4]>;

/// The root always occupies the first slot of the arena.
pub(crate) const ROOT: NodeId = NodeId::new(0);

/// A rooted tree whose nodes also link to their neighbors on the same level.
///
/// Besides `parent` and `children`, every node knows the node directly to its
/// left and right at the same depth, even when that node sits in a different
/// subtree (a cousin). These links are kept up to date on every insertion and
/// drive the level-by-level walks of [`Tree::update_graphics`].
///
/// The tree owns all of its nodes and hands out [`NodeId`]s. It is append-only:
/// nodes are never removed and never change parent.
///
/// The type parameter `T` is the payload. `B` is an optional back-reference to
/// an external value the node was copied from; see [`Tree::from_source`].
///
/// ## Example
///
/// ```rust
/// use understory_tree_layout::{Arity, Tree};
///
/// let mut tree = Tree::new("root", Arity::Variable);
/// let a = tree.push_child(tree.root(), "a").unwrap();
/// let b = tree.push_child(tree.root(), "b").unwrap();
/// let a1 = tree.push_child(a, "a1").unwrap();
/// let b1 = tree.push_child(b, "b1").unwrap();
///
/// // `a1` and `b1` are cousins, yet they are linked on their level.
/// assert_eq!(tree.right_of(a1), Some(b1));
/// assert_eq!(tree.left_of(b1), Some(a1));
/// assert_eq!(tree.depth_of(b1), Some(2));
/// ```
pub struct Tree<T, B = ()> {
    /// slots, the root first
    nodes: Vec<Node<T, B>>,
}

impl<T, B> core::fmt::Debug for Tree<T, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let depth = self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0);
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("levels", &depth)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T, B> {
    pub(crate) data: T,
    pub(crate) bind: Option<B>,
    pub(crate) arity: Arity,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Slots,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) depth: usize,
    pub(crate) position: Point,
}

impl<T, B> Node<T, B> {
    fn new(data: T, bind: Option<B>, arity: Arity, parent: Option<NodeId>, depth: usize) -> Self {
        let children = match arity {
            Arity::Fixed(len) => SmallVec::from_elem(None, len),
            Arity::Variable => SmallVec::new(),
        };
        Self {
            data,
            bind,
            arity,
            parent,
            children,
            left: None,
            right: None,
            depth,
            position: Point::ZERO,
        }
    }
}

/// Where a new child goes in its parent's slot list.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Slot {
    At(usize),
    Append,
}

impl<T> Tree<T> {
    /// Create a tree holding a single root node.
    ///
    /// `arity` decides how the root (and every node added below it) stores
    /// children. Passing a `usize` works too: `0` selects [`Arity::Variable`],
    /// any other length selects [`Arity::Fixed`].
    pub fn new(data: T, arity: impl Into<Arity>) -> Self {
        Self::with_root(data, None, arity.into())
    }
}

impl<T, B> Tree<T, B> {
    /// Create a tree whose root carries a back-reference to an external value.
    pub fn with_bind(data: T, arity: impl Into<Arity>, bind: B) -> Self {
        Self::with_root(data, Some(bind), arity.into())
    }

    pub(crate) fn with_root(data: T, bind: Option<B>, arity: Arity) -> Self {
        Self {
            nodes: alloc::vec![Node::new(data, bind, arity.normalized(), None, 0)],
        }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// Number of nodes in the tree, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if `id` was issued by this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// Insert a new child into slot `index` of a fixed-arity `parent`.
    ///
    /// The child gets the same fixed arity as its parent. Its `left`/`right`
    /// links are resolved immediately, and the neighbors it lands between are
    /// re-pointed at it.
    ///
    /// # Errors
    ///
    /// - [`TreeError::UnknownNode`] if `parent` is not part of this tree.
    /// - [`TreeError::NotFixedArity`] if `parent` has variable arity.
    /// - [`TreeError::IndexOutOfRange`] if `index` is not a slot of `parent`.
    /// - [`TreeError::SlotOccupied`] if the slot already holds a child.
    pub fn insert_child(&mut self, parent: NodeId, data: T, index: usize) -> Result<NodeId, TreeError> {
        let node = self.get(parent).ok_or(TreeError::UnknownNode(parent))?;
        let Arity::Fixed(arity) = node.arity else {
            return Err(TreeError::NotFixedArity);
        };
        if index >= arity {
            return Err(TreeError::IndexOutOfRange { index, arity });
        }
        if node.children[index].is_some() {
            return Err(TreeError::SlotOccupied { index });
        }
        Ok(self.attach(parent, Slot::At(index), data, None))
    }

    /// Append a new child to a variable-arity `parent`.
    ///
    /// The child is variable arity too. Its `left`/`right` links are resolved
    /// immediately.
    ///
    /// # Errors
    ///
    /// - [`TreeError::UnknownNode`] if `parent` is not part of this tree.
    /// - [`TreeError::NotVariableArity`] if `parent` has fixed arity.
    pub fn push_child(&mut self, parent: NodeId, data: T) -> Result<NodeId, TreeError> {
        let node = self.get(parent).ok_or(TreeError::UnknownNode(parent))?;
        if node.arity.is_fixed() {
            return Err(TreeError::NotVariableArity);
        }
        Ok(self.attach(parent, Slot::Append, data, None))
    }

    /// Create a child under `parent` without checking preconditions.
    ///
    /// Callers guarantee that `parent` is live and that `slot` fits its arity.
    pub(crate) fn attach(&mut self, parent: NodeId, slot: Slot, data: T, bind: Option<B>) -> NodeId {
        let (arity, depth) = {
            let p = self.node(parent);
            (p.arity, p.depth + 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes
            .push(Node::new(data, bind, arity, Some(parent), depth));
        let children = &mut self.node_mut(parent).children;
        match slot {
            Slot::At(index) => children[index] = Some(id),
            Slot::Append => children.push(Some(id)),
        }
        self.update_links(id);
        id
    }

    /// Returns the payload of a node.
    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(|n| &n.data)
    }

    /// Returns the payload of a node mutably.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.idx()).map(|n| &mut n.data)
    }

    /// Returns the external value a node was copied from, if any.
    pub fn bind(&self, id: NodeId) -> Option<&B> {
        self.get(id).and_then(|n| n.bind.as_ref())
    }

    /// Returns how a node stores its children.
    pub fn arity_of(&self, id: NodeId) -> Option<Arity> {
        self.get(id).map(|n| n.arity)
    }

    /// Returns the parent of a node, or `None` for the root and unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get the child slots of a node, or an empty slice for unknown ids.
    ///
    /// Fixed-arity nodes always expose all of their slots; empty ones are `None`.
    pub fn children_of(&self, id: NodeId) -> &[Option<NodeId>] {
        self.get(id).map_or(&[], |n| &n.children)
    }

    /// Returns the depth of a node. The root is at depth `0`.
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        self.get(id).map(|n| n.depth)
    }

    /// Returns the node directly to the left on the same level.
    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.left)
    }

    /// Returns the node directly to the right on the same level.
    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.right)
    }

    /// Returns the position assigned by the last [`Tree::update_graphics`].
    ///
    /// Nodes start at the origin.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.get(id).map(|n| n.position)
    }

    /// Returns the first occupied child slot of a node.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children_of(id).iter().flatten().next().copied()
    }

    /// Returns the last occupied child slot of a node.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children_of(id).iter().rev().flatten().next().copied()
    }

    /// Walk up from `id` until reaching `depth`.
    ///
    /// With `None`, or a depth that is not above `id`, this returns the root.
    /// Returns `None` only for unknown ids.
    pub fn ancestor(&self, id: NodeId, depth: Option<usize>) -> Option<NodeId> {
        let mut current = self.get(id).map(|_| id)?;
        while let Some(parent) = self.node(current).parent {
            if Some(self.node(current).depth) == depth {
                break;
            }
            current = parent;
        }
        Some(current)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T, B>> {
        self.nodes.get(id.idx())
    }

    /// Access a node; panics if `id` is not part of this tree.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T, B> {
        self.nodes.get(id.idx()).expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is not part of this tree.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T, B> {
        self.nodes.get_mut(id.idx()).expect("dangling NodeId")
    }

    /// Render the tree as an indented outline, one node per line.
    ///
    /// Each line shows the payload and position. The `highlight` node is wrapped
    /// in `<…>`, every other node in `[…]`.
    pub fn outline(&self, highlight: Option<NodeId>) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for id in self.iter() {
            let node = self.node(id);
            let (open, close) = if Some(id) == highlight {
                ('<', '>')
            } else {
                ('[', ']')
            };
            for _ in 0..node.depth {
                out.push_str("   ");
            }
            // Writing into a `String` cannot fail.
            let _ = writeln!(
                out,
                "{open}{}{close} - x: {}, y: {}",
                node.data, node.position.x, node.position.y
            );
        }
        out
    }
}
