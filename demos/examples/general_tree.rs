// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out a hand-built general tree, with and without evening out siblings.
//!
//! The tree has one deep branch under the first child of the root, which pushes
//! a later sibling far to the right. The first layout leaves the siblings in
//! between packed to the left; the second spreads them out.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_tree_layout_demos --example general_tree`

use understory_tree_layout::{Arity, LayoutConfig, NodeId, Tree, TreeError};

fn add(tree: &mut Tree<u32>, parent: NodeId, labels: &[u32]) -> Result<Vec<NodeId>, TreeError> {
    labels
        .iter()
        .map(|&label| tree.push_child(parent, label))
        .collect()
}

fn build() -> Result<(Tree<u32>, NodeId), TreeError> {
    let mut tree = Tree::new(101, Arity::Variable);
    let root = tree.root();
    let level1 = add(&mut tree, root, &[201, 202, 203, 204, 205, 206])?;
    let s301 = add(&mut tree, level1[0], &[301])?[0];
    add(&mut tree, level1[2], &[302, 303])?;
    let s304 = add(&mut tree, level1[3], &[304])?[0];
    let level2 = add(&mut tree, level1[5], &[305, 306])?;
    let level3 = add(&mut tree, s301, &[401, 402, 403, 404, 405, 406, 407])?;
    add(&mut tree, s304, &[408])?;
    add(&mut tree, level2[1], &[409])?;
    add(&mut tree, level3[2], &[501])?;
    add(&mut tree, level3[3], &[502, 503])?;
    Ok((tree, level1[1]))
}

fn main() -> Result<(), TreeError> {
    env_logger::init();

    let (mut tree, highlight) = build()?;
    let config = LayoutConfig::default().with_ignore_uneven_siblings(true);

    let bounds = tree.update_graphics(config);
    println!("Packed siblings ({} x {}):", bounds.width(), bounds.height());
    print!("{}", tree.outline(Some(highlight)));

    let bounds = tree.update_graphics(config.with_ignore_uneven_siblings(false));
    println!();
    println!("Evened-out siblings ({} x {}):", bounds.width(), bounds.height());
    print!("{}", tree.outline(Some(highlight)));

    Ok(())
}
