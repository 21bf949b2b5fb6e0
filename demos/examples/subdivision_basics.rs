// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subdivision basics.
//!
//! Store the elements of a unit-square subdivision, watch duplicates get
//! dropped, and query the partitions.
//!
//! Run:
//! - `cargo run -p parterre_demos --example subdivision_basics`

use kurbo::Point;
use parterre_dcel::{Dcel, Face, HalfEdge, Vertex};

fn main() {
    let mut dcel = Dcel::new();

    // The four corners of a unit square.
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    for p in corners {
        dcel.insert_vertex(Vertex { position: p }).unwrap();
    }

    // Each boundary edge twice, once per direction. Re-inserting an edge that
    // is already present is a reported no-op.
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        dcel.insert_half_edge(HalfEdge::new(a, b)).unwrap();
        dcel.insert_half_edge(HalfEdge::new(b, a)).unwrap();
        let fresh = dcel.insert_half_edge(HalfEdge::new(a, b)).unwrap();
        assert!(!fresh, "duplicate edges are dropped");
    }

    // The square's interior plus the unbounded face.
    dcel.insert_face(Face::outer(0)).unwrap();
    dcel.insert_face(Face::new(1)).unwrap();

    println!("subdivision: {dcel:?}");
    println!(
        "counts: {} vertices, {} half-edges, {} faces",
        dcel.vertex_count(),
        dcel.half_edge_count(),
        dcel.face_count()
    );

    let vertices = dcel.vertices().expect("vertex partition is initialized");
    println!(
        "leftmost-lowest vertex: {:?}",
        vertices.min().map(|v| v.position)
    );
    println!(
        "rightmost-highest vertex: {:?}",
        vertices.max().map(|v| v.position)
    );
}
