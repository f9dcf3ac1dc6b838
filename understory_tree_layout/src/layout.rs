// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pass layout: assign every node a position.
//!
//! ## Pass 1: respect spacing
//!
//! Levels are visited from the deepest up to the root, each one left to right
//! along the `right` links. A node is first centered over its first and last
//! child (leaves start at `x = 0`). Then its whole subtree is pushed right by
//! the largest amount any node on the subtree's left edge needs to clear its
//! left neighbor:
//!
//! ```text
//! min_translation_on_left(n) = left.x + width + gap - n.x
//! ```
//!
//! where `gap` is the sibling gap when `n` and `left` share a parent and the
//! cousin gap otherwise. Finally `y = depth * (height + parent/child gap)`.
//!
//! Pass 1 only depends on the shape of the tree, so running it again yields
//! the same positions.
//!
//! ## Pass 2: even out siblings
//!
//! A deep subtree can push a node far away from its left sibling while the
//! siblings in between stay packed to the left. For such a node, the
//! *anchor point* is the first node on its left edge (below itself) that sits
//! exactly at its minimum distance: the node that caused the push. Walking up
//! from the anchor's left neighbor to the node's depth gives the *left anchor*.
//! The siblings strictly between the left anchor and the node are then spread
//! out evenly, right to left.
//!
//! Each move is clamped to the free room of the moved subtree on both sides,
//! so the pass never introduces an overlap. Whatever a clamp keeps back is
//! left for the siblings further left, since every share is computed from the
//! positions already placed.
//!
//! ```rust
//! use understory_tree_layout::{Arity, LayoutConfig, Tree};
//!
//! let mut tree = Tree::new("root", Arity::Variable);
//! let a = tree.push_child(tree.root(), "a").unwrap();
//! let b = tree.push_child(tree.root(), "b").unwrap();
//!
//! let bounds = tree.update_graphics(LayoutConfig::default());
//!
//! // Siblings sit one box plus the sibling gap apart; the parent is centered.
//! assert_eq!(tree.position(a).unwrap().x, 0.0);
//! assert_eq!(tree.position(b).unwrap().x, 160.0);
//! assert_eq!(tree.position(tree.root()).unwrap().x, 80.0);
//! assert_eq!(tree.position(b).unwrap().y, 200.0);
//! assert_eq!(bounds.width(), 280.0);
//! ```

use kurbo::{Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::links::Side;
use crate::tree::{ROOT, Tree};
use crate::types::NodeId;

/// Tolerance for comparing positions produced by repeated halving.
const EPS: f64 = 1e-6;

/// Sizes and gaps used by [`Tree::update_graphics`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Width and height of every node box.
    pub node_size: Size,
    /// Minimum horizontal gap between two nodes with the same parent.
    pub space_between_siblings: f64,
    /// Minimum horizontal gap between adjacent nodes with different parents.
    pub space_between_cousins: f64,
    /// Vertical gap between a node box and the boxes of its children.
    pub space_between_parent_and_child: f64,
    /// Skip the second pass that evens out siblings.
    pub ignore_uneven_siblings: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: Size::new(120.0, 120.0),
            space_between_siblings: 40.0,
            space_between_cousins: 80.0,
            space_between_parent_and_child: 80.0,
            ignore_uneven_siblings: false,
        }
    }
}

impl LayoutConfig {
    /// Default gaps around boxes of `node_size`.
    #[must_use]
    pub fn new(node_size: Size) -> Self {
        Self {
            node_size,
            ..Self::default()
        }
    }

    /// Set the gap between siblings.
    #[must_use]
    pub const fn with_sibling_space(mut self, space: f64) -> Self {
        self.space_between_siblings = space;
        self
    }

    /// Set the gap between cousins.
    #[must_use]
    pub const fn with_cousin_space(mut self, space: f64) -> Self {
        self.space_between_cousins = space;
        self
    }

    /// Set the vertical gap between a parent and its children.
    #[must_use]
    pub const fn with_parent_child_space(mut self, space: f64) -> Self {
        self.space_between_parent_and_child = space;
        self
    }

    /// Enable or disable the sibling evening pass.
    #[must_use]
    pub const fn with_ignore_uneven_siblings(mut self, ignore: bool) -> Self {
        self.ignore_uneven_siblings = ignore;
        self
    }

    fn level_height(&self) -> f64 {
        self.node_size.height + self.space_between_parent_and_child
    }
}

impl<T, B> Tree<T, B> {
    /// Lay out the whole tree and return the bounding box of all node boxes.
    ///
    /// Positions are box centers; the root lands at `y = 0` and the leftmost
    /// box of the deepest level at `x = 0`. Calling this again after adding
    /// nodes recomputes everything from scratch.
    pub fn update_graphics(&mut self, config: LayoutConfig) -> Rect {
        let levels = self.first_on_level(ROOT);
        log::debug!(
            "laying out {} nodes on {} levels (uneven siblings {})",
            self.node_count(),
            levels.len(),
            if config.ignore_uneven_siblings {
                "ignored"
            } else {
                "evened out"
            }
        );

        for &first in levels.iter().rev() {
            let mut cursor = first;
            while let Some(id) = cursor {
                self.respect_space_left(id, &config);
                let node = self.node_mut(id);
                node.position.y = node.depth as f64 * config.level_height();
                cursor = node.right;
            }
        }

        if !config.ignore_uneven_siblings {
            for &first in levels.iter().rev() {
                let mut cursor = first;
                while let Some(id) = cursor {
                    self.even_out_siblings(id, &config);
                    cursor = self.node(id).right;
                }
            }
        }

        self.bounds(config.node_size)
    }

    /// How far `id` must move right to clear its left neighbor.
    ///
    /// Negative values are slack. Returns `None` for the leftmost node of a
    /// level, which has nothing to clear.
    pub fn min_translation_on_left(&self, id: NodeId, config: &LayoutConfig) -> Option<f64> {
        let node = self.get(id)?;
        let left = node.left?;
        let needed = self.node(left).position.x + config.node_size.width + self.gap(id, left, config);
        Some(needed - node.position.x)
    }

    /// How far `id` must move left to clear its right neighbor.
    ///
    /// Negative values are slack. Returns `None` for the rightmost node of a
    /// level.
    pub fn min_translation_on_right(&self, id: NodeId, config: &LayoutConfig) -> Option<f64> {
        let node = self.get(id)?;
        let right = node.right?;
        let needed = node.position.x + config.node_size.width + self.gap(id, right, config);
        Some(needed - self.node(right).position.x)
    }

    /// The shift that moves the subtree of `id` clear of everything on its left.
    ///
    /// This is the largest [`Tree::min_translation_on_left`] along the left
    /// edge of the subtree, floored at `0`.
    pub fn min_translation_on_left_tree(&self, id: NodeId, config: &LayoutConfig) -> f64 {
        self.first_on_level(id)
            .into_iter()
            .flatten()
            .filter_map(|n| self.min_translation_on_left(n, config))
            .fold(0.0, f64::max)
    }

    /// The first node on the left edge of `id`'s subtree, below `id`, that sits
    /// exactly at its minimum distance from its left neighbor.
    pub fn anchor_point(&self, id: NodeId, config: &LayoutConfig) -> Option<NodeId> {
        self.first_on_level(id)
            .into_iter()
            .flatten()
            .filter(|&n| n != id)
            .find(|&n| {
                self.min_translation_on_left(n, config)
                    .is_some_and(|t| -EPS < t && t < EPS)
            })
    }

    fn gap(&self, a: NodeId, b: NodeId, config: &LayoutConfig) -> f64 {
        if self.node(a).parent == self.node(b).parent {
            config.space_between_siblings
        } else {
            config.space_between_cousins
        }
    }

    /// Move `id` and all of its descendants.
    fn translate(&mut self, id: NodeId, delta: Vec2) {
        let mut stack: SmallVec<[NodeId; 16]> = SmallVec::new();
        stack.push(id);
        while let Some(n) = stack.pop() {
            let node = self.node_mut(n);
            node.position += delta;
            stack.extend(node.children.iter().flatten().copied());
        }
    }

    fn center_over_children(&mut self, id: NodeId) {
        let x = match (self.first_child(id), self.last_child(id)) {
            (Some(first), Some(last)) => {
                (self.node(first).position.x + self.node(last).position.x) / 2.0
            }
            _ => 0.0,
        };
        self.node_mut(id).position.x = x;
    }

    fn respect_space_left(&mut self, id: NodeId, config: &LayoutConfig) {
        self.center_over_children(id);
        let shift = self.min_translation_on_left_tree(id, config);
        if shift > 0.0 {
            log::trace!("shifting subtree of {id:?} right by {shift}");
            self.translate(id, Vec2::new(shift, 0.0));
        }
    }

    /// Smallest slack between the subtree of `id` and its neighbors on `side`.
    ///
    /// Infinite when nothing on that edge has a neighbor.
    fn free_room(&self, id: NodeId, side: Side, config: &LayoutConfig) -> f64 {
        let (edge, needed): (_, fn(&Self, NodeId, &LayoutConfig) -> Option<f64>) = match side {
            Side::Left => (self.first_on_level(id), Self::min_translation_on_left),
            Side::Right => (self.last_on_level(id), Self::min_translation_on_right),
        };
        edge.into_iter()
            .flatten()
            .filter_map(|n| needed(self, n, config))
            .fold(f64::INFINITY, |room, t| room.min(-t))
    }

    fn even_out_siblings(&mut self, id: NodeId, config: &LayoutConfig) {
        let node = self.node(id);
        let (parent, depth, x) = (node.parent, node.depth, node.position.x);
        let Some(left) = node.left.filter(|&l| self.node(l).parent == parent) else {
            return;
        };
        let packed = config.node_size.width + config.space_between_siblings + EPS;
        if x - self.node(left).position.x <= packed {
            return;
        }
        let Some(anchor) = self.anchor_point(id, config) else {
            return;
        };
        let Some(left_anchor) = self
            .node(anchor)
            .left
            .and_then(|l| self.ancestor(l, Some(depth)))
        else {
            return;
        };

        let mut uneven: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut cursor = Some(left);
        while let Some(n) = cursor {
            if n == left_anchor || self.node(n).parent != parent {
                break;
            }
            uneven.push(n);
            cursor = self.node(n).left;
        }
        if uneven.is_empty() {
            return;
        }

        let anchor_x = self.node(left_anchor).position.x;
        let mut right_x = x;
        let count = uneven.len();
        for (placed, &sibling) in uneven.iter().enumerate() {
            let gaps = (count - placed + 1) as f64;
            let share = (right_x - anchor_x) / gaps;
            let current = self.node(sibling).position.x;
            let wanted = right_x - share - current;
            let shift = wanted
                .min(self.free_room(sibling, Side::Right, config))
                .max(-self.free_room(sibling, Side::Left, config));
            if shift > EPS || shift < -EPS {
                log::trace!(
                    "evening out {sibling:?} between {left_anchor:?} and {id:?}: wanted {wanted}, moved {shift}"
                );
                self.translate(sibling, Vec2::new(shift, 0.0));
            }
            right_x = self.node(sibling).position.x;
        }
    }

    /// Union of all node boxes, centered on their positions.
    fn bounds(&self, size: Size) -> Rect {
        let boxed = |id: NodeId| Rect::from_center_size(self.node(id).position, size);
        self.iter().fold(boxed(ROOT), |acc, id| acc.union(boxed(id)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::*;
    use crate::fixtures::{find, graphic_tree};
    use crate::types::Arity;

    /// Positions of the graphic fixture with only the first pass.
    const PASS_ONE: &[(u32, f64, f64)] = &[
        (101, 1070.0, 0.0),
        (201, 540.0, 200.0),
        (202, 700.0, 200.0),
        (203, 860.0, 200.0),
        (204, 1280.0, 200.0),
        (205, 1440.0, 200.0),
        (206, 1600.0, 200.0),
        (301, 540.0, 400.0),
        (302, 780.0, 400.0),
        (303, 940.0, 400.0),
        (304, 1280.0, 400.0),
        (305, 1520.0, 400.0),
        (306, 1680.0, 400.0),
        (401, 0.0, 600.0),
        (402, 160.0, 600.0),
        (403, 320.0, 600.0),
        (404, 600.0, 600.0),
        (405, 760.0, 600.0),
        (406, 920.0, 600.0),
        (407, 1080.0, 600.0),
        (408, 1280.0, 600.0),
        (409, 1680.0, 600.0),
        (501, 320.0, 800.0),
        (502, 520.0, 800.0),
        (503, 680.0, 800.0),
    ];

    fn config(ignore_uneven_siblings: bool) -> LayoutConfig {
        LayoutConfig::new(Size::new(120.0, 120.0))
            .with_sibling_space(40.0)
            .with_cousin_space(80.0)
            .with_parent_child_space(80.0)
            .with_ignore_uneven_siblings(ignore_uneven_siblings)
    }

    fn assert_near(actual: Point, expected: Point, label: u32) {
        assert!(
            (actual - expected).hypot() < EPS,
            "node {label}: expected {expected:?}, got {actual:?}"
        );
    }

    fn positions(tree: &Tree<u32>) -> Vec<Point> {
        tree.iter().map(|id| tree.position(id).unwrap()).collect()
    }

    /// Every pair of level neighbors is at least one box plus the gap apart.
    fn assert_no_overlap(tree: &Tree<u32>, config: &LayoutConfig) {
        for id in tree.iter() {
            if let Some(t) = tree.min_translation_on_right(id, config) {
                assert!(
                    t < EPS,
                    "node {} overlaps its right neighbor by {t}",
                    tree.data(id).unwrap()
                );
            }
        }
    }

    #[test]
    fn first_pass_matches_fixture() {
        let mut tree = graphic_tree();
        tree.update_graphics(config(true));
        for &(label, x, y) in PASS_ONE {
            let actual = tree.position(find(&tree, label)).unwrap();
            assert_near(actual, Point::new(x, y), label);
        }
    }

    #[test]
    fn second_pass_spreads_uneven_siblings() {
        let mut tree = graphic_tree();
        tree.update_graphics(config(false));
        let moved = [(202, 770.0), (203, 1000.0), (302, 920.0), (303, 1080.0)];
        for &(label, x, y) in PASS_ONE {
            let x = moved
                .iter()
                .find(|(m, _)| *m == label)
                .map_or(x, |&(_, moved_x)| moved_x);
            let actual = tree.position(find(&tree, label)).unwrap();
            assert_near(actual, Point::new(x, y), label);
        }
    }

    #[test]
    fn anchor_points_after_first_pass() {
        let mut tree = graphic_tree();
        let config = config(true);
        tree.update_graphics(config);
        let anchors = [(204, 408), (304, 408), (404, 502)];
        for &(label, _, _) in PASS_ONE {
            let expected = anchors
                .iter()
                .find(|(a, _)| *a == label)
                .map(|&(_, anchor)| find(&tree, anchor));
            assert_eq!(
                tree.anchor_point(find(&tree, label), &config),
                expected,
                "anchor point of {label}"
            );
        }
    }

    #[test]
    fn boundary_nodes_have_no_translation() {
        let mut tree = graphic_tree();
        let config = config(true);
        tree.update_graphics(config);
        let leftmost = find(&tree, 401);
        let rightmost = find(&tree, 409);
        assert_eq!(tree.min_translation_on_left(leftmost, &config), None);
        assert_eq!(tree.min_translation_on_right(rightmost, &config), None);
        assert_eq!(tree.min_translation_on_left(tree.root(), &config), None);
        // 204 has 260 of slack to 203 once laid out.
        let t = tree.min_translation_on_left(find(&tree, 204), &config).unwrap();
        assert!((t + 260.0).abs() < EPS, "got {t}");
        assert!(tree.min_translation_on_left_tree(find(&tree, 204), &config).abs() < EPS);
    }

    #[test]
    fn layout_never_overlaps() {
        for ignore in [true, false] {
            let mut tree = graphic_tree();
            let config = config(ignore);
            tree.update_graphics(config);
            assert_no_overlap(&tree, &config);
        }
    }

    #[test]
    fn parents_are_centered_before_evening_out() {
        let mut tree = graphic_tree();
        tree.update_graphics(config(true));
        for id in tree.iter() {
            let (Some(first), Some(last)) = (tree.first_child(id), tree.last_child(id)) else {
                continue;
            };
            let mid = (tree.position(first).unwrap().x + tree.position(last).unwrap().x) / 2.0;
            assert!(
                (tree.position(id).unwrap().x - mid).abs() < EPS,
                "node {} is not centered over its children",
                tree.data(id).unwrap()
            );
        }
    }

    #[test]
    fn repeated_layout_is_stable() {
        for ignore in [true, false] {
            let mut tree = graphic_tree();
            tree.update_graphics(config(ignore));
            let first = positions(&tree);
            tree.update_graphics(config(ignore));
            assert_eq!(positions(&tree), first, "second layout moved nodes");
        }
    }

    #[test]
    fn bounds_cover_every_box() {
        let mut tree = graphic_tree();
        let bounds = tree.update_graphics(config(true));
        // Boxes are centered: the leftmost reaches -60, the deepest 860.
        assert_eq!(bounds, Rect::new(-60.0, -60.0, 1740.0, 860.0));

        let mut single = Tree::new(0_u32, Arity::Variable);
        let bounds = single.update_graphics(config(false));
        assert_eq!(bounds, Rect::from_center_size(Point::ZERO, Size::new(120.0, 120.0)));
    }

    #[test]
    fn lopsided_binary_tree_keeps_gaps() {
        // A left-heavy chain pushes the right child far out.
        let mut tree = Tree::new(0_u32, Arity::Fixed(3));
        let root = tree.root();
        let a = tree.insert_child(root, 1, 0).unwrap();
        tree.insert_child(root, 2, 1).unwrap();
        let c = tree.insert_child(root, 3, 2).unwrap();
        let mut deepest = a;
        for label in 10..14 {
            let left = tree.insert_child(deepest, label, 0).unwrap();
            tree.insert_child(deepest, label + 100, 2).unwrap();
            deepest = left;
        }
        tree.insert_child(c, 30, 0).unwrap();
        tree.insert_child(c, 31, 2).unwrap();

        let config = LayoutConfig::default();
        tree.update_graphics(config);
        assert_no_overlap(&tree, &config);
        for id in tree.iter() {
            let y = tree.position(id).unwrap().y;
            let depth = tree.depth_of(id).unwrap() as f64;
            assert!((y - depth * 200.0).abs() < EPS, "y follows depth");
        }
    }
}
