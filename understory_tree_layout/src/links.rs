// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Same-level neighbor links: resolution on insertion, sibling and cousin lookups.

use crate::tree::Tree;
use crate::types::{LevelDirection, NodeId};

/// One of the two horizontal directions along a level.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl<T, B> Tree<T, B> {
    /// Returns the first occupied slot to the left of `id` in its parent.
    pub fn first_sibling_on_left(&self, id: NodeId) -> Option<NodeId> {
        self.first_sibling(id, Side::Left)
    }

    /// Returns the first occupied slot to the right of `id` in its parent.
    pub fn first_sibling_on_right(&self, id: NodeId) -> Option<NodeId> {
        self.first_sibling(id, Side::Right)
    }

    /// Returns the left-most child of `id`.
    ///
    /// If `id` has no children, the search moves on to the nodes to its right on
    /// the same level, so the result is the closest node one level down,
    /// looking from `id`'s left edge.
    pub fn closest_child_to_left(&self, id: NodeId) -> Option<NodeId> {
        self.contains(id).then(|| self.closest_child(id, Side::Left))?
    }

    /// Returns the right-most child of `id`.
    ///
    /// If `id` has no children, the search moves on to the nodes to its left on
    /// the same level.
    pub fn closest_child_to_right(&self, id: NodeId) -> Option<NodeId> {
        self.contains(id).then(|| self.closest_child(id, Side::Right))?
    }

    /// Count the nodes on `id`'s level.
    ///
    /// The count follows `left`/`right` links from `id` and includes `id` itself.
    /// Returns `0` for unknown ids.
    pub fn level_length(&self, id: NodeId, direction: LevelDirection) -> usize {
        if !self.contains(id) {
            return 0;
        }
        let mut count = 1;
        if direction != LevelDirection::Right {
            count += self.walk(id, Side::Left).count();
        }
        if direction != LevelDirection::Left {
            count += self.walk(id, Side::Right).count();
        }
        count
    }

    /// Resolve both neighbor links of a freshly attached node.
    pub(crate) fn update_links(&mut self, id: NodeId) {
        self.update_link(id, Side::Left);
        self.update_link(id, Side::Right);
    }

    pub(crate) fn neighbor(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let node = self.node(id);
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    /// Iterate the nodes beyond `id` on its level, nearest first.
    pub(crate) fn walk(&self, id: NodeId, side: Side) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(self.neighbor(id, side), move |&n| self.neighbor(n, side))
    }

    fn set_neighbor(&mut self, id: NodeId, side: Side, to: Option<NodeId>) {
        let node = self.node_mut(id);
        match side {
            Side::Left => node.left = to,
            Side::Right => node.right = to,
        }
    }

    fn update_link(&mut self, id: NodeId, side: Side) {
        self.set_neighbor(id, side, None);
        let Some(parent) = self.node(id).parent else {
            return;
        };
        // A sibling wins; otherwise look for a cousin under the parent's neighbor.
        let found = self.first_sibling(id, side).or_else(|| {
            let uncle = self.neighbor(parent, side)?;
            self.closest_child(uncle, side.opposite())
        });
        if let Some(other) = found {
            self.set_neighbor(id, side, Some(other));
            self.set_neighbor(other, side.opposite(), Some(id));
        }
    }

    fn first_sibling(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let parent = self.parent_of(id)?;
        let siblings = &self.node(parent).children;
        let pos = siblings.iter().position(|&c| c == Some(id))?;
        match side {
            Side::Left => siblings[..pos].iter().rev().flatten().next().copied(),
            Side::Right => siblings[pos + 1..].iter().flatten().next().copied(),
        }
    }

    /// Find the child nearest to the `edge` side of `id`.
    ///
    /// Childless nodes hand the search to their neighbor away from `edge`, so
    /// `closest_child(n, Side::Right)` walks left until some node has children.
    fn closest_child(&self, id: NodeId, edge: Side) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(n) = current {
            let children = &self.node(n).children;
            let found = match edge {
                Side::Left => children.iter().flatten().next(),
                Side::Right => children.iter().rev().flatten().next(),
            };
            if let Some(&child) = found {
                return Some(child);
            }
            current = self.neighbor(n, edge.opposite());
        }
        None
    }
}
