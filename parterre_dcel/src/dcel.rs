// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The partitioned container: one tree per element kind, set semantics.

use parterre_rbtree::{AllocError, DrainSorted, RbTree};

use crate::types::{DcelElement, ElementKind, Face, HalfEdge, Vertex};

/// A planar-subdivision element store.
///
/// Owns up to three red-black trees, one per [`ElementKind`]. A partition is
/// created lazily on the first insertion of its kind and stays initialized
/// from then on (drains leave an empty tree in place).
///
/// Inserts deduplicate: an element equal to a stored one under the kind's
/// ordering adapter is dropped and the stored element stays in place, so each
/// partition is a set, not a multiset. The insert methods report which of the
/// two happened.
///
/// Incidence queries are declared but not yet implemented; see the individual
/// methods.
pub struct Dcel {
    vertices: Option<RbTree<Vertex>>,
    half_edges: Option<RbTree<HalfEdge>>,
    faces: Option<RbTree<Face>>,
}

impl Default for Dcel {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Dcel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dcel")
            .field("vertices", &self.vertex_count())
            .field("half_edges", &self.half_edge_count())
            .field("faces", &self.face_count())
            .finish_non_exhaustive()
    }
}

impl Dcel {
    /// Create a subdivision with no partitions instantiated.
    pub fn new() -> Self {
        Self {
            vertices: None,
            half_edges: None,
            faces: None,
        }
    }

    /// Insert a vertex unless an equal one is already stored.
    ///
    /// Returns `Ok(true)` when the vertex was inserted and `Ok(false)` when
    /// an equal vertex was already present (the argument is dropped and the
    /// stored vertex stays in place).
    pub fn insert_vertex(&mut self, vertex: Vertex) -> Result<bool, AllocError> {
        Self::insert_unique(self.vertices.get_or_insert_with(RbTree::new), vertex)
    }

    /// Insert a half-edge unless an equal one is already stored.
    ///
    /// Same contract as [`insert_vertex`](Self::insert_vertex).
    pub fn insert_half_edge(&mut self, half_edge: HalfEdge) -> Result<bool, AllocError> {
        Self::insert_unique(self.half_edges.get_or_insert_with(RbTree::new), half_edge)
    }

    /// Insert a face unless an equal one is already stored.
    ///
    /// Same contract as [`insert_vertex`](Self::insert_vertex).
    pub fn insert_face(&mut self, face: Face) -> Result<bool, AllocError> {
        Self::insert_unique(self.faces.get_or_insert_with(RbTree::new), face)
    }

    fn insert_unique<E: DcelElement>(
        tree: &mut RbTree<E>,
        element: E,
    ) -> Result<bool, AllocError> {
        if tree.contains(&element) {
            return Ok(false);
        }
        tree.insert(element)?;
        Ok(true)
    }

    /// Number of stored vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.as_ref().map_or(0, RbTree::len)
    }

    /// Number of stored half-edges.
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.as_ref().map_or(0, RbTree::len)
    }

    /// Number of stored faces.
    pub fn face_count(&self) -> usize {
        self.faces.as_ref().map_or(0, RbTree::len)
    }

    /// Number of stored elements of one kind.
    pub fn count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Vertex => self.vertex_count(),
            ElementKind::HalfEdge => self.half_edge_count(),
            ElementKind::Face => self.face_count(),
        }
    }

    /// Total number of stored elements across all partitions.
    pub fn len(&self) -> usize {
        self.vertex_count() + self.half_edge_count() + self.face_count()
    }

    /// True if no partition holds any element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The vertex partition, or `None` before the first vertex insertion.
    pub fn vertices(&self) -> Option<&RbTree<Vertex>> {
        self.vertices.as_ref()
    }

    /// The half-edge partition, or `None` before the first half-edge insertion.
    pub fn half_edges(&self) -> Option<&RbTree<HalfEdge>> {
        self.half_edges.as_ref()
    }

    /// The face partition, or `None` before the first face insertion.
    pub fn faces(&self) -> Option<&RbTree<Face>> {
        self.faces.as_ref()
    }

    /// Drain the vertex partition in ascending order.
    ///
    /// An initialized partition stays initialized (an empty tree is left in
    /// place); a never-initialized one yields nothing and stays that way.
    pub fn drain_vertices_sorted(&mut self) -> DrainSorted<Vertex> {
        Self::drain(&mut self.vertices)
    }

    /// Drain the half-edge partition in ascending order.
    ///
    /// Same contract as [`drain_vertices_sorted`](Self::drain_vertices_sorted).
    pub fn drain_half_edges_sorted(&mut self) -> DrainSorted<HalfEdge> {
        Self::drain(&mut self.half_edges)
    }

    /// Drain the face partition in ascending order.
    ///
    /// Same contract as [`drain_vertices_sorted`](Self::drain_vertices_sorted).
    pub fn drain_faces_sorted(&mut self) -> DrainSorted<Face> {
        Self::drain(&mut self.faces)
    }

    fn drain<E: DcelElement>(slot: &mut Option<RbTree<E>>) -> DrainSorted<E> {
        match slot {
            Some(tree) => core::mem::take(tree).drain_sorted(),
            None => RbTree::new().drain_sorted(),
        }
    }

    /// Drop all partitions with their elements.
    ///
    /// Safe on an empty or never-populated subdivision, and idempotent;
    /// dropping the container gives the same teardown implicitly.
    pub fn clear(&mut self) {
        self.vertices = None;
        self.half_edges = None;
        self.faces = None;
    }

    /// Half-edges incident to `vertex`.
    ///
    /// Not yet implemented: incidence wiring is mesh construction, which this
    /// crate does not perform, so the result is always empty.
    pub fn incident_half_edges_to_vertex(
        &self,
        _vertex: &Vertex,
    ) -> impl Iterator<Item = &HalfEdge> {
        core::iter::empty()
    }

    /// Faces adjacent to `face`.
    ///
    /// Not yet implemented; always empty. See
    /// [`incident_half_edges_to_vertex`](Self::incident_half_edges_to_vertex).
    pub fn incident_faces_to_face(&self, _face: &Face) -> impl Iterator<Item = &Face> {
        core::iter::empty()
    }

    /// Half-edges bounding `face`.
    ///
    /// Not yet implemented; always empty. See
    /// [`incident_half_edges_to_vertex`](Self::incident_half_edges_to_vertex).
    pub fn incident_half_edges_to_face(&self, _face: &Face) -> impl Iterator<Item = &HalfEdge> {
        core::iter::empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::*;
    use crate::types::FaceFlags;

    #[test]
    fn partitions_start_uninitialized() {
        let dcel = Dcel::new();
        assert!(dcel.vertices().is_none());
        assert!(dcel.half_edges().is_none());
        assert!(dcel.faces().is_none());
        assert!(dcel.is_empty());
    }

    #[test]
    fn duplicate_vertex_is_dropped() {
        let mut dcel = Dcel::new();
        assert_eq!(dcel.insert_vertex(Vertex::new(1.0, 2.0)), Ok(true));
        assert_eq!(dcel.insert_vertex(Vertex::new(1.0, 2.0)), Ok(false));
        assert_eq!(dcel.vertex_count(), 1);
    }

    #[test]
    fn kinds_are_independent_partitions() {
        let mut dcel = Dcel::new();
        dcel.insert_vertex(Vertex::new(0.0, 0.0)).unwrap();
        dcel.insert_half_edge(HalfEdge::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)))
            .unwrap();
        dcel.insert_half_edge(HalfEdge::new(Point::new(1.0, 0.0), Point::new(0.0, 0.0)))
            .unwrap();
        dcel.insert_face(Face::outer(0)).unwrap();
        dcel.insert_face(Face::new(1)).unwrap();

        assert_eq!(dcel.count(ElementKind::Vertex), 1);
        assert_eq!(dcel.count(ElementKind::HalfEdge), 2);
        assert_eq!(dcel.count(ElementKind::Face), 2);
        assert_eq!(dcel.len(), 5);
    }

    #[test]
    fn drain_yields_sorted_and_leaves_partition_initialized() {
        let mut dcel = Dcel::new();
        for (x, y) in [(2.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)] {
            dcel.insert_vertex(Vertex::new(x, y)).unwrap();
        }
        let drained: Vec<(f64, f64)> = dcel
            .drain_vertices_sorted()
            .map(|v| (v.position.x, v.position.y))
            .collect();
        assert_eq!(
            drained,
            [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 0.0)]
        );
        assert_eq!(dcel.vertex_count(), 0);
        assert!(
            dcel.vertices().is_some(),
            "drained partition stays initialized"
        );
    }

    #[test]
    fn drain_of_uninitialized_partition_is_empty() {
        let mut dcel = Dcel::new();
        assert_eq!(dcel.drain_faces_sorted().count(), 0);
        assert!(dcel.faces().is_none(), "a drain alone must not initialize");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut dcel = Dcel::new();
        dcel.clear();
        dcel.insert_face(Face::new(3)).unwrap();
        dcel.clear();
        assert!(dcel.is_empty());
        assert!(dcel.faces().is_none());
        dcel.clear();
    }

    #[test]
    fn duplicate_face_keeps_original_flags() {
        let mut dcel = Dcel::new();
        dcel.insert_face(Face::outer(0)).unwrap();
        // Equal by id; the stored element, with its OUTER flag, must survive.
        assert_eq!(dcel.insert_face(Face::new(0)), Ok(false));
        let stored = dcel.faces().unwrap().search(&Face::new(0)).unwrap();
        assert!(stored.flags.contains(FaceFlags::OUTER));
    }

    #[test]
    fn incidence_queries_are_declared_but_empty() {
        let mut dcel = Dcel::new();
        let v = Vertex::new(0.0, 0.0);
        let f = Face::new(1);
        dcel.insert_vertex(v).unwrap();
        dcel.insert_half_edge(HalfEdge::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)))
            .unwrap();
        dcel.insert_face(f).unwrap();

        assert_eq!(dcel.incident_half_edges_to_vertex(&v).count(), 0);
        assert_eq!(dcel.incident_faces_to_face(&f).count(), 0);
        assert_eq!(dcel.incident_half_edges_to_face(&f).count(), 0);
    }
}
