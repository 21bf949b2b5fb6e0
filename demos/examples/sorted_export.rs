// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorted export.
//!
//! Fill a tree partition in scrambled order and drain it as an ascending
//! sequence, the building block for sweep-line style consumers.
//!
//! Run:
//! - `cargo run -p parterre_demos --example sorted_export`

use parterre_dcel::{Dcel, Vertex};

fn main() {
    let mut dcel = Dcel::new();

    let scrambled = [
        (10.0, 0.0),
        (20.0, 5.0),
        (5.0, 5.0),
        (15.0, -2.0),
        (25.0, 1.0),
        (1.0, 3.0),
    ];
    for (x, y) in scrambled {
        dcel.insert_vertex(Vertex::new(x, y)).unwrap();
    }
    println!("stored {} vertices", dcel.vertex_count());

    // One-shot ascending drain; the partition is empty (but alive) afterwards.
    for vertex in dcel.drain_vertices_sorted() {
        println!("({:>5.1}, {:>5.1})", vertex.position.x, vertex.position.y);
    }
    assert_eq!(dcel.vertex_count(), 0);
    println!("drained; partition is empty: {}", dcel.is_empty());
}
