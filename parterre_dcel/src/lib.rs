// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=parterre_dcel --heading-base-level=0

//! Parterre DCEL: a Kurbo-native planar-subdivision element store.
//!
//! Parterre DCEL is a building block for computational-geometry pipelines
//! that need deduplicated, ordered storage for the elements of a planar
//! subdivision.
//!
//! - Three element kinds: [`Vertex`] (a kurbo point), [`HalfEdge`] (a
//!   directed point pair), and [`Face`] (an identified region).
//! - One red-black tree per kind, created lazily on first insertion, with
//!   set semantics: inserting an element equal to a stored one is a
//!   reported no-op.
//! - Ascending drains per kind, counts, and idempotent teardown.
//!
//! The ordered index underneath is [`parterre_rbtree`]; each kind binds to
//! it through the [`TreeOrder`](parterre_rbtree::TreeOrder) adapter, so the
//! tree engine carries no kind-specific logic.
//!
//! # Example
//!
//! ```rust
//! use parterre_dcel::{Dcel, Face, HalfEdge, Vertex};
//! use kurbo::Point;
//!
//! let mut dcel = Dcel::new();
//!
//! // Vertices deduplicate by position.
//! assert_eq!(dcel.insert_vertex(Vertex::new(1.0, 2.0)), Ok(true));
//! assert_eq!(dcel.insert_vertex(Vertex::new(1.0, 2.0)), Ok(false));
//! assert_eq!(dcel.vertex_count(), 1);
//!
//! // A half-edge and its twin are distinct elements.
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(1.0, 0.0);
//! dcel.insert_half_edge(HalfEdge::new(a, b)).unwrap();
//! dcel.insert_half_edge(HalfEdge::new(b, a)).unwrap();
//! assert_eq!(dcel.half_edge_count(), 2);
//!
//! // Faces order by id; the unbounded face carries the OUTER flag.
//! dcel.insert_face(Face::outer(0)).unwrap();
//! dcel.insert_face(Face::new(1)).unwrap();
//!
//! let xs: Vec<f64> = dcel.drain_vertices_sorted().map(|v| v.position.x).collect();
//! assert_eq!(xs, [1.0]);
//! ```
//!
//! ## Not a mesh builder
//!
//! This crate does not construct meshes: it never wires twin/next/prev
//! relationships between half-edges, and the incidence queries on [`Dcel`]
//! are declared but not yet implemented (they always yield nothing).
//! Upstream code that runs a subdivision algorithm owns that wiring and can
//! use this store to keep its element sets canonical while doing so.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dcel;
pub mod types;

pub use dcel::Dcel;
pub use types::{DcelElement, ElementKind, Face, FaceFlags, HalfEdge, HalfEdgeFlags, Vertex};
