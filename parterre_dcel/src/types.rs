// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element kinds stored by a subdivision: vertices, half-edges, and faces.

use core::cmp::Ordering;

use kurbo::Point;
use parterre_rbtree::TreeOrder;

/// Closed tag distinguishing the three kinds of element a subdivision stores.
///
/// Each kind lives in its own tree partition inside [`Dcel`](crate::Dcel);
/// the tag never changes after a partition is created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A point of the plane.
    Vertex,
    /// A directed edge between two points.
    HalfEdge,
    /// A region of the plane.
    Face,
}

/// Element types a [`Dcel`](crate::Dcel) partition can hold.
///
/// The ordering adapter comes from [`TreeOrder`]; this trait only adds the
/// partition tag.
pub trait DcelElement: TreeOrder {
    /// The partition this element type belongs to.
    const KIND: ElementKind;
}

/// Lexicographic point order (x, then y) under `total_cmp`.
///
/// `total_cmp` keeps the order a strict total order even for exotic float
/// bit patterns, which makes the derived equality consistent with it.
/// Coordinates are assumed finite (no NaNs); debug builds may assert upstream.
pub(crate) fn point_less(a: Point, b: Point) -> bool {
    match a.x.total_cmp(&b.x) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.y.total_cmp(&b.y) == Ordering::Less,
    }
}

pub(crate) fn point_eq(a: Point, b: Point) -> bool {
    a.x.total_cmp(&b.x) == Ordering::Equal && a.y.total_cmp(&b.y) == Ordering::Equal
}

/// A subdivision vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    /// Position in the plane.
    pub position: Point,
}

impl Vertex {
    /// Create a vertex at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

impl TreeOrder for Vertex {
    fn less_than(&self, other: &Self) -> bool {
        point_less(self.position, other.position)
    }

    fn equals(&self, other: &Self) -> bool {
        point_eq(self.position, other.position)
    }
}

impl DcelElement for Vertex {
    const KIND: ElementKind = ElementKind::Vertex;
}

bitflags::bitflags! {
    /// Half-edge attributes. Flags do not participate in ordering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HalfEdgeFlags: u8 {
        /// The edge borders the unbounded face on its left side.
        const BOUNDARY = 0b0000_0001;
    }
}

impl Default for HalfEdgeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A directed edge of the subdivision, from `origin` to `target`.
///
/// Twin/next/prev wiring is mesh construction and happens outside this crate;
/// a half-edge here is identified purely by its directed endpoints, so an
/// edge and its twin are two distinct elements.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HalfEdge {
    /// Start point.
    pub origin: Point,
    /// End point.
    pub target: Point,
    /// Attribute bits.
    pub flags: HalfEdgeFlags,
}

impl HalfEdge {
    /// Create a half-edge from `origin` to `target` with empty flags.
    pub fn new(origin: Point, target: Point) -> Self {
        Self {
            origin,
            target,
            flags: HalfEdgeFlags::empty(),
        }
    }
}

impl TreeOrder for HalfEdge {
    /// Lexicographic on (origin, target); flags are ignored.
    fn less_than(&self, other: &Self) -> bool {
        if point_eq(self.origin, other.origin) {
            point_less(self.target, other.target)
        } else {
            point_less(self.origin, other.origin)
        }
    }

    fn equals(&self, other: &Self) -> bool {
        point_eq(self.origin, other.origin) && point_eq(self.target, other.target)
    }
}

impl DcelElement for HalfEdge {
    const KIND: ElementKind = ElementKind::HalfEdge;
}

bitflags::bitflags! {
    /// Face attributes. Flags do not participate in ordering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FaceFlags: u8 {
        /// The unbounded face of the subdivision.
        const OUTER = 0b0000_0001;
    }
}

impl Default for FaceFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A region of the subdivision, identified by a caller-assigned id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Face {
    /// Caller-assigned identifier; the ordering key.
    pub id: u32,
    /// Attribute bits.
    pub flags: FaceFlags,
}

impl Face {
    /// Create a bounded face with the given id.
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            flags: FaceFlags::empty(),
        }
    }

    /// Create the unbounded face with the given id.
    pub const fn outer(id: u32) -> Self {
        Self {
            id,
            flags: FaceFlags::OUTER,
        }
    }
}

impl TreeOrder for Face {
    fn less_than(&self, other: &Self) -> bool {
        self.id < other.id
    }

    fn equals(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl DcelElement for Face {
    const KIND: ElementKind = ElementKind::Face;
}
