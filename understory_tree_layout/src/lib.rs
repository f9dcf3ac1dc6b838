// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_layout --heading-base-level=0

//! Understory Tree Layout: a level-linked tree and a two-pass tidy layout.
//!
//! Understory Tree Layout turns an arbitrary rooted tree into 2-D node positions for drawing
//! diagrams: data structure visualizers, org charts, file trees, parse trees.
//!
//! - Keeps every node linked to its neighbors on the same level, across subtrees.
//! - Assigns each node a position that respects minimum gaps and centers parents over their children.
//! - Optionally spreads out siblings that a deep, lopsided subtree left packed to one side.
//! - Copies external tree-shaped values (linked lists, binary trees, general trees) into a layout tree.
//!
//! ## Levels and cross links
//!
//! Each node knows its `parent` and its `children`, and also the node directly to its `left` and
//! `right` at the same depth. That neighbor may be a sibling or a cousin in a different subtree.
//! Links are resolved as nodes are inserted, so each level always forms one doubly linked list.
//! The layout walks these lists level by level instead of searching the tree.
//!
//! Children live in slots. A node of [`Arity::Fixed`] has a fixed number of slots that can be
//! filled in any order and may stay empty (a binary tree with a missing left child). A node of
//! [`Arity::Variable`] grows by appending. Children inherit the arity of their parent.
//!
//! ## Not a renderer
//!
//! This crate only computes positions. Drawing boxes and edges, panning, and animating between
//! layouts are left to the caller. Positions are box centers as [`kurbo::Point`]s, and
//! [`Tree::update_graphics`] returns the [`kurbo::Rect`] covering every box so the drawing can be
//! framed.
//!
//! ## API overview
//!
//! - [`Tree`]: arena owning all nodes of one rooted tree.
//! - [`NodeId`]: handle of a node; valid for the life of its tree.
//! - [`Arity`]: fixed slots or a growable list.
//! - [`LayoutConfig`]: node size and gaps for a layout run.
//! - [`CopyConfig`] / [`ChildFields`]: accessors describing an external tree.
//! - [`TreeError`] / [`ErrorKind`]: precondition failures of structural operations.
//!
//! Key operations:
//! - [`Tree::insert_child`] and [`Tree::push_child`] → [`NodeId`]
//! - [`Tree::update_graphics`] → bounds; then read [`Tree::position`].
//! - [`Tree::from_source`] and [`Tree::copy_data`] copy an external tree.
//! - [`Tree::pre_order`] / [`Tree::iter`] walk a subtree; [`Tree::first_on_level`] and
//!   [`Tree::last_on_level`] give its left and right edges.
//! - [`Tree::left_of`] / [`Tree::right_of`], [`Tree::level_length`], and [`Tree::ancestor`] query levels.
//! - [`Tree::outline`] renders an indented text dump for debugging.
//!
//! ## Example
//!
//! ```rust
//! use understory_tree_layout::{Arity, LayoutConfig, Tree};
//!
//! let mut tree = Tree::new('a', Arity::Fixed(2));
//! let root = tree.root();
//! let b = tree.insert_child(root, 'b', 0).unwrap();
//! let c = tree.insert_child(root, 'c', 1).unwrap();
//! let d = tree.insert_child(b, 'd', 1).unwrap();
//! let e = tree.insert_child(c, 'e', 0).unwrap();
//!
//! // `d` and `e` are cousins and linked on their level.
//! assert_eq!(tree.right_of(d), Some(e));
//!
//! tree.update_graphics(LayoutConfig::default());
//! let (pd, pe) = (tree.position(d).unwrap(), tree.position(e).unwrap());
//! assert!(pe.x - pd.x >= 120.0 + 80.0);
//! assert_eq!(tree.position(root).unwrap().y, 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `kurbo/std`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod error;
mod layout;
mod links;
mod traverse;
mod tree;
mod types;

#[cfg(test)]
mod fixtures;

pub use adapter::{ChildFields, CopyConfig};
pub use error::{ErrorKind, TreeError};
pub use layout::LayoutConfig;
pub use traverse::PreOrder;
pub use tree::Tree;
pub use types::{Arity, LevelDirection, NodeId};
