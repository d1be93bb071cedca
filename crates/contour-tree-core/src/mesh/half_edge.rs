use crate::index::{EdgeId, FaceId, VertexId};

/// A 3D vertex position. The contour-tree construction itself never reads
/// this — it exists so a caller assembling a [`Mesh`](super::Mesh) from a
/// loader doesn't need a second struct to carry geometry alongside topology.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A directed edge of a triangle, one third of a face.
///
/// `next` advances within the owning face (three half-edges per triangle, in
/// CCW order). `twin` references the opposite half-edge across the shared
/// undirected edge, or [`EdgeId::NONE`] on a boundary.
#[derive(Debug, Copy, Clone)]
pub struct HalfEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub next: EdgeId,
    pub twin: EdgeId,
}

impl HalfEdge {
    /// Whether this half-edge has no twin, i.e. sits on the mesh boundary.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }
}

/// The face this half-edge's index falls within, given three half-edges per
/// face laid out contiguously (`3f, 3f+1, 3f+2`).
#[inline]
pub fn face_of(edge: EdgeId) -> FaceId {
    FaceId::new(edge.index() / 3)
}
