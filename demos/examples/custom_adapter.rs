// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom adapter.
//!
//! The tree engine is not tied to subdivision elements: any type with a
//! `TreeOrder` impl can be indexed. Here a tiny sweep-event type orders by
//! station with the kind as tie-break.
//!
//! Run:
//! - `cargo run -p parterre_demos --example custom_adapter`

use parterre_rbtree::{RbTree, TreeOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    SegmentStart,
    Crossing,
    SegmentEnd,
}

#[derive(Debug, Clone, Copy)]
struct SweepEvent {
    station: i64,
    kind: EventKind,
}

impl TreeOrder for SweepEvent {
    fn less_than(&self, other: &Self) -> bool {
        (self.station, self.kind) < (other.station, other.kind)
    }
}

fn main() {
    let mut queue = RbTree::new();
    let events = [
        (40, EventKind::SegmentEnd),
        (10, EventKind::SegmentStart),
        (25, EventKind::Crossing),
        (10, EventKind::Crossing),
        (32, EventKind::SegmentStart),
    ];
    for (station, kind) in events {
        queue.insert(SweepEvent { station, kind }).unwrap();
    }

    println!("next event: {:?}", queue.min());
    println!("sweep order:");
    for event in queue.drain_sorted() {
        println!("  station {:>3}  {:?}", event.station, event.kind);
    }
}
