// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy existing data structures into layout trees.
//!
//! A binary search tree is copied through its `left`/`right` fields, so a
//! missing child keeps its slot empty and the layout still places the present
//! child on the correct side. A linked list is copied through its single
//! `next` field. Every laid-out node points back at the value it came from.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_tree_layout_demos --example copy_source`

use kurbo::Size;
use understory_tree_layout::{Arity, ChildFields, CopyConfig, LayoutConfig, Tree, TreeError};

#[derive(Debug)]
struct Bst {
    key: i32,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl Bst {
    fn new(key: i32) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    fn insert(&mut self, key: i32) {
        let slot = if key < self.key {
            &mut self.left
        } else {
            &mut self.right
        };
        match slot {
            Some(child) => child.insert(key),
            None => *slot = Some(Box::new(Self::new(key))),
        }
    }

    fn key(&self) -> i32 {
        self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

const BST_FIELDS: &[fn(&Bst) -> Option<&Bst>] = &[Bst::left, Bst::right];

#[derive(Debug)]
struct Step {
    name: &'static str,
    next: Option<Box<Self>>,
}

impl Step {
    fn name(&self) -> &'static str {
        self.name
    }

    fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}

const STEP_FIELDS: &[fn(&Step) -> Option<&Step>] = &[Step::next];

fn main() -> Result<(), TreeError> {
    env_logger::init();

    let mut bst = Bst::new(50);
    for key in [30, 70, 20, 40, 35, 45, 80, 75, 90, 95] {
        bst.insert(key);
    }
    let config = CopyConfig {
        data: Bst::key,
        children: ChildFields::Fixed(BST_FIELDS),
    };
    // Start from an existing two-slot root and fill it in place.
    let mut tree: Tree<i32, &Bst> = Tree::with_bind(0, Arity::Fixed(2), &bst);
    tree.copy_data(&bst, &config)?;

    let layout = LayoutConfig::new(Size::new(40.0, 40.0))
        .with_sibling_space(20.0)
        .with_cousin_space(30.0)
        .with_parent_child_space(40.0);
    let bounds = tree.update_graphics(layout);
    println!("Binary search tree, {} nodes, bounds {bounds:?}", tree.node_count());
    print!("{}", tree.outline(None));

    // Nodes map back to their source values.
    if let Some(leaf) = tree.iter().find(|&id| tree.data(id) == Some(&95)) {
        let source = tree.bind(leaf).copied();
        println!("node {leaf:?} draws {:?}", source.map(|b| b.key));
    }

    let steps = Step {
        name: "parse",
        next: Some(Box::new(Step {
            name: "check",
            next: Some(Box::new(Step {
                name: "emit",
                next: None,
            })),
        })),
    };
    let config = CopyConfig {
        data: Step::name,
        children: ChildFields::Fixed(STEP_FIELDS),
    };
    let mut list = Tree::from_source(&steps, &config);
    list.update_graphics(layout);
    println!();
    println!("Pipeline:");
    print!("{}", list.outline(list.first_child(list.root())));

    Ok(())
}
