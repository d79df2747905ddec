// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts: structural invariants checked in debug builds.
//!
//! Every function here is a `debug_assert!` bundle - zero cost in release,
//! loud and early in development and under test. They verify the
//! properties the merge algorithms and the wildcard walks silently rely
//! on; weakening them just moves the failure somewhere harder to read.

use crate::btree::{Node, TermBTree};
use crate::postings::PostingsList;

/// Check that a postings list is strictly increasing and that every skip
/// link lands forward on a valid position.
///
/// # Panics (debug builds only)
pub fn check_postings_well_formed(list: &PostingsList) {
    if !cfg!(debug_assertions) {
        return;
    }
    for i in 1..list.len() {
        debug_assert!(
            list.at(i - 1) < list.at(i),
            "postings not strictly increasing at position {}",
            i
        );
    }
    for i in 0..list.len() {
        if let Some(target) = list.skip_at(i) {
            debug_assert!(
                target > i && target < list.len(),
                "skip link at {} points to {} (len {})",
                i,
                target,
                list.len()
            );
        }
    }
}

/// Check B-tree shape: ordered unique keys, capacity respected, child
/// counts consistent, all leaves at equal depth.
///
/// # Panics (debug builds only)
pub fn check_btree_well_formed(tree: &TermBTree) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut leaf_depth = None;
    check_node(tree.root(), tree.order(), 0, true, &mut leaf_depth);
}

fn check_node(
    node: &Node,
    order: usize,
    depth: usize,
    is_root: bool,
    leaf_depth: &mut Option<usize>,
) {
    debug_assert!(
        node.keys.len() < order,
        "node holds {} keys at order {}",
        node.keys.len(),
        order
    );
    debug_assert!(
        is_root || !node.keys.is_empty(),
        "non-root node with no keys"
    );
    for pair in node.keys.windows(2) {
        debug_assert!(pair[0] < pair[1], "node keys out of order");
    }
    if node.is_leaf() {
        if let Some(expected) = *leaf_depth {
            debug_assert!(expected == depth, "leaves at depths {} and {}", expected, depth);
        } else {
            *leaf_depth = Some(depth);
        }
    } else {
        debug_assert!(
            node.children.len() == node.keys.len() + 1,
            "internal node with {} keys but {} children",
            node.keys.len(),
            node.children.len()
        );
        for child in &node.children {
            check_node(child, order, depth + 1, false, leaf_depth);
        }
    }
}
