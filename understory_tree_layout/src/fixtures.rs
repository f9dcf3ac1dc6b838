// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared trees for unit tests.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::tree::Tree;
use crate::types::{Arity, NodeId};

/// Find the node labelled `label`; panics if there is none.
pub(crate) fn find<B>(tree: &Tree<u32, B>, label: u32) -> NodeId {
    tree.iter()
        .find(|&id| tree.data(id) == Some(&label))
        .unwrap_or_else(|| panic!("no node labelled {label}"))
}

/// Build a variable-arity tree from `(parent, child)` label pairs.
///
/// Parents must appear before their children.
fn build_variable(root: u32, edges: &[(u32, u32)]) -> Tree<u32> {
    let mut tree = Tree::new(root, Arity::Variable);
    for &(parent, child) in edges {
        let parent = find(&tree, parent);
        tree.push_child(parent, child).unwrap();
    }
    tree
}

/// ```text
///         0
///   1     2     3
/// 4   5       6   7
/// 8               9
/// ```
pub(crate) fn neighbor_general() -> Tree<u32> {
    build_variable(
        0,
        &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (3, 6), (3, 7), (4, 8), (7, 9)],
    )
}

/// Binary tree with holes: 11 has only a left child, 12 only a right one.
pub(crate) fn neighbor_binary() -> Tree<u32> {
    let mut tree = Tree::new(10, Arity::Fixed(2));
    let root = tree.root();
    let a = tree.insert_child(root, 11, 0).unwrap();
    let b = tree.insert_child(root, 12, 1).unwrap();
    tree.insert_child(a, 13, 0).unwrap();
    tree.insert_child(b, 14, 1).unwrap();
    tree
}

/// Five levels with uneven subtrees; used to check layout coordinates.
const GRAPHIC_EDGES: &[(u32, u32)] = &[
    (101, 201),
    (101, 202),
    (101, 203),
    (101, 204),
    (101, 205),
    (101, 206),
    (201, 301),
    (203, 302),
    (203, 303),
    (204, 304),
    (206, 305),
    (206, 306),
    (301, 401),
    (301, 402),
    (301, 403),
    (301, 404),
    (301, 405),
    (301, 406),
    (301, 407),
    (304, 408),
    (306, 409),
    (403, 501),
    (404, 502),
    (404, 503),
];

pub(crate) fn graphic_tree() -> Tree<u32> {
    build_variable(101, GRAPHIC_EDGES)
}

/// Binary search tree with boxed children.
#[derive(Debug)]
pub(crate) struct Bst {
    pub(crate) info: i32,
    pub(crate) left: Option<Box<Self>>,
    pub(crate) right: Option<Box<Self>>,
}

impl Bst {
    pub(crate) fn leaf(info: i32) -> Self {
        Self {
            info,
            left: None,
            right: None,
        }
    }

    pub(crate) fn add(&mut self, info: i32) {
        let slot = if info < self.info {
            &mut self.left
        } else {
            &mut self.right
        };
        match slot {
            Some(child) => child.add(info),
            None => *slot = Some(Box::new(Self::leaf(info))),
        }
    }

    pub(crate) fn info(&self) -> i32 {
        self.info
    }

    pub(crate) fn left_child(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right_child(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

pub(crate) const BST_CHILDREN: &[fn(&Bst) -> Option<&Bst>] = &[Bst::left_child, Bst::right_child];

/// ```text
///       6
///    2     7
///  1   4     9
///     3 5   8
/// ```
pub(crate) fn bst_sample() -> Bst {
    let mut bst = Bst::leaf(6);
    for info in [2, 1, 4, 3, 5, 7, 9, 8] {
        bst.add(info);
    }
    bst
}

/// Singly linked list, a tree with one child field.
#[derive(Debug)]
pub(crate) struct LinkedList {
    pub(crate) info: i32,
    pub(crate) next: Option<Box<Self>>,
}

impl LinkedList {
    pub(crate) fn info(&self) -> i32 {
        self.info
    }

    pub(crate) fn next_node(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}

pub(crate) const LIST_NEXT: &[fn(&LinkedList) -> Option<&LinkedList>] = &[LinkedList::next_node];

/// `1 -> 2 -> 3 -> 4 -> 5`
pub(crate) fn list_sample() -> LinkedList {
    (1..=5).rev().fold(None, |next, info| {
        Some(LinkedList {
            info,
            next: next.map(Box::new),
        })
    })
    .unwrap()
}

/// Tree whose children live in a `Vec`.
#[derive(Debug)]
pub(crate) struct GeneralTree {
    pub(crate) info: u32,
    pub(crate) children: Vec<Self>,
}

impl GeneralTree {
    pub(crate) fn info(&self) -> u32 {
        self.info
    }

    pub(crate) fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Same shape and labels as [`graphic_tree`].
pub(crate) fn general_sample() -> GeneralTree {
    fn build(info: u32) -> GeneralTree {
        GeneralTree {
            info,
            children: GRAPHIC_EDGES
                .iter()
                .filter(|&&(parent, _)| parent == info)
                .map(|&(_, child)| build(child))
                .collect(),
        }
    }
    build(101)
}
