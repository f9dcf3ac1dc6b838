// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-order traversal and the per-level summaries built on it.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::tree::Tree;
use crate::types::NodeId;

/// Lazy pre-order iterator over a subtree.
///
/// Yields a node, then the pre-order sequence of each occupied child slot in
/// slot order. Created by [`Tree::pre_order`] and [`Tree::iter`]. Every call
/// creates fresh, independent state.
pub struct PreOrder<'a, T, B = ()> {
    tree: &'a Tree<T, B>,
    stack: SmallVec<[NodeId; 16]>,
}

impl<T, B> core::fmt::Debug for PreOrder<'_, T, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PreOrder")
            .field("pending", &self.stack.as_slice())
            .finish_non_exhaustive()
    }
}

impl<T, B> Iterator for PreOrder<'_, T, B> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Push in reverse so the first slot is visited first.
        self.stack
            .extend(self.tree.node(id).children.iter().rev().flatten().copied());
        Some(id)
    }
}

impl<T, B> Tree<T, B> {
    /// Iterate the subtree rooted at `id` in pre-order.
    ///
    /// Empty slots are skipped. An unknown `id` yields nothing.
    pub fn pre_order(&self, id: NodeId) -> PreOrder<'_, T, B> {
        let mut stack = SmallVec::new();
        if self.contains(id) {
            stack.push(id);
        }
        PreOrder { tree: self, stack }
    }

    /// Iterate the whole tree in pre-order.
    pub fn iter(&self) -> PreOrder<'_, T, B> {
        self.pre_order(self.root())
    }

    /// For each depth, the first node of `id`'s subtree visited at that depth.
    ///
    /// The result is indexed by absolute depth, so depths above `id` are `None`.
    /// The entries at and below `id`'s depth are the left edge of the subtree.
    pub fn first_on_level(&self, id: NodeId) -> Vec<Option<NodeId>> {
        self.collect_levels(id, false)
    }

    /// For each depth, the last node of `id`'s subtree visited at that depth.
    ///
    /// Indexed like [`Tree::first_on_level`]; the entries are the right edge of
    /// the subtree.
    pub fn last_on_level(&self, id: NodeId) -> Vec<Option<NodeId>> {
        self.collect_levels(id, true)
    }

    fn collect_levels(&self, id: NodeId, keep_last: bool) -> Vec<Option<NodeId>> {
        let mut levels = Vec::new();
        for n in self.pre_order(id) {
            let depth = self.node(n).depth;
            if levels.len() <= depth {
                levels.resize(depth + 1, None);
            }
            if keep_last || levels[depth].is_none() {
                levels[depth] = Some(n);
            }
        }
        levels
    }
}

impl<'a, T, B> IntoIterator for &'a Tree<T, B> {
    type Item = NodeId;
    type IntoIter = PreOrder<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
