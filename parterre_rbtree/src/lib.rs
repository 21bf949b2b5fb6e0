// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=parterre_rbtree --heading-base-level=0

//! Parterre RbTree: an arena-based red-black tree with pluggable ordering.
//!
//! Parterre RbTree is the ordered-index building block of the Parterre
//! planar-subdivision crates.
//!
//! - Insert, search, and remove elements of any payload type through a small
//!   ordering adapter ([`TreeOrder`]).
//! - Take the minimum/maximum, or consume the tree as an ascending sequence
//!   with [`RbTree::drain_sorted`].
//! - Arena growth is fallible: inserts report [`AllocError`] instead of
//!   aborting when the allocator refuses to grow the node storage.
//!
//! Nodes live in a `Vec` arena owned by the tree; parent/child links are
//! indices, and slot 0 is a per-tree sentinel standing in for every absent
//! child. One tree type serves any number of payload kinds because all
//! comparisons go through the adapter, resolved per instantiation rather than
//! per comparison.
//!
//! The tree itself inserts unconditionally; deduplicated (set) semantics are
//! layered on top by callers such as `parterre_dcel`, which checks
//! [`RbTree::contains`] before inserting.
//!
//! # Example
//!
//! ```rust
//! use parterre_rbtree::{RbTree, TreeOrder};
//!
//! #[derive(Debug, PartialEq)]
//! struct Key(u32);
//!
//! impl TreeOrder for Key {
//!     fn less_than(&self, other: &Self) -> bool {
//!         self.0 < other.0
//!     }
//! }
//!
//! let mut tree = RbTree::new();
//! for k in [10, 20, 5, 15, 25, 1] {
//!     tree.insert(Key(k)).unwrap();
//! }
//!
//! assert_eq!(tree.len(), 6);
//! assert_eq!(tree.min(), Some(&Key(1)));
//! assert_eq!(tree.max(), Some(&Key(25)));
//! assert!(tree.contains(&Key(15)));
//!
//! let sorted: Vec<u32> = tree.drain_sorted().map(|k| k.0).collect();
//! assert_eq!(sorted, [1, 5, 10, 15, 20, 25]);
//! ```
//!
//! # Ordering preconditions
//!
//! [`TreeOrder::less_than`] must be a strict total order consistent with
//! [`TreeOrder::equals`]. The tree does not verify this; see the trait docs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drain;
pub mod order;
pub mod tree;
pub mod types;

pub use drain::DrainSorted;
pub use order::TreeOrder;
pub use tree::RbTree;
pub use types::AllocError;
