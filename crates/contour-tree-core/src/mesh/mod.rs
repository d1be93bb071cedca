//! The half-edge mesh store (§4.A).
//!
//! A 2-manifold triangle mesh, represented as a flat array of directed edges
//! (`HalfEdge`) plus a per-vertex `first_edge` table. No pointers, no owning
//! back-references — every reference is an index into one of the arrays, per
//! the "cyclic pointer graphs → arena + indices" design note.

mod build;
mod half_edge;
mod manifold;
mod traversal;

use alloc::vec::Vec;

pub use half_edge::{face_of, HalfEdge, Position};
pub use traversal::OneRing;

use crate::{
    error::Result,
    index::{EdgeId, FaceId, VertexId},
};

/// A read-only half-edge mesh, built once by [`Mesh::build`] and handed to
/// the merge-tree builder and contour-tree merger thereafter (§3,
/// "Lifecycles": "the mesh is created by the loader and read-only
/// thereafter").
#[derive(Debug, Clone)]
pub struct Mesh {
    positions: Vec<Position>,
    edges: Vec<HalfEdge>,
    first_edge: Vec<EdgeId>,
    is_manifold: bool,

    // Opaque, unvalidated per-vertex attributes a loader may want to carry
    // alongside topology. The contour-tree algorithms never read these —
    // see SPEC_FULL.md §2.
    normals: Option<Vec<[i8; 3]>>,
    colours: Option<Vec<[u8; 4]>>,
    uv_coordinates: Option<Vec<[f32; 2]>>,
}

impl Mesh {
    /// Build a mesh from vertex positions and CCW triangle faces (§6,
    /// "Mesh input contract"). Runs edge construction but **not** the
    /// manifold check — call [`Mesh::check_manifold`] before trusting
    /// [`Mesh::is_manifold`] or building trees on the result.
    ///
    /// Fails with [`ErrorKind::InvalidMesh`](crate::error::ErrorKind::InvalidMesh)
    /// if there are fewer than 3 vertices, no faces, or a face references an
    /// out-of-range vertex.
    pub fn build(positions: Vec<Position>, faces: &[[u32; 3]]) -> Result<Self> {
        let (edges, first_edge) = build::build_edges(&positions, faces)?;
        log::debug!(
            "built mesh: {} vertices, {} faces, {} half-edges",
            positions.len(),
            faces.len(),
            edges.len()
        );
        Ok(Self {
            positions,
            edges,
            first_edge,
            is_manifold: false,
            normals: None,
            colours: None,
            uv_coordinates: None,
        })
    }

    /// Attach optional per-vertex normals, colours and UV coordinates. Purely
    /// a convenience for callers assembling a mesh from a richer loader
    /// format; never consulted by the contour-tree algorithms.
    pub fn with_attributes(
        mut self,
        normals: Option<Vec<[i8; 3]>>,
        colours: Option<Vec<[u8; 4]>>,
        uv_coordinates: Option<Vec<[f32; 2]>>,
    ) -> Self {
        self.normals = normals;
        self.colours = colours;
        self.uv_coordinates = uv_coordinates;
        self
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.edges.len() / 3
    }

    #[inline]
    pub fn position(&self, vertex: VertexId) -> Position {
        self.positions[vertex.index()]
    }

    #[inline]
    pub fn normal(&self, vertex: VertexId) -> Option<[i8; 3]> {
        self.normals.as_ref().map(|n| n[vertex.index()])
    }

    #[inline]
    pub fn colour(&self, vertex: VertexId) -> Option<[u8; 4]> {
        self.colours.as_ref().map(|c| c[vertex.index()])
    }

    #[inline]
    pub fn uv(&self, vertex: VertexId) -> Option<[f32; 2]> {
        self.uv_coordinates.as_ref().map(|uv| uv[vertex.index()])
    }

    #[inline]
    pub fn edge(&self, edge: EdgeId) -> &HalfEdge {
        &self.edges[edge.index()]
    }

    #[inline]
    pub fn first_edge(&self, vertex: VertexId) -> EdgeId {
        self.first_edge[vertex.index()]
    }

    /// Whether the last [`Mesh::check_manifold`] call found the mesh to be a
    /// valid 2-manifold. `false` until that method has run.
    #[inline]
    pub fn is_manifold(&self) -> bool {
        self.is_manifold
    }

    /// Vertex indices of `face`, in CCW order.
    pub fn face_vertices(&self, face: FaceId) -> [VertexId; 3] {
        let base = face.index() * 3;
        [
            self.edges[base].from,
            self.edges[base + 1].from,
            self.edges[base + 2].from,
        ]
    }
}
