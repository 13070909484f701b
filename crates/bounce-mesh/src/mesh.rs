//! Indexed triangle mesh.

use nalgebra::Point3;

use crate::error::{MeshError, MeshResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Vertices and faces are stored separately, with faces referencing
/// vertices by index.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside,
/// so normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use bounce_mesh::TriMesh;
/// use nalgebra::Point3;
///
/// // A single triangle
/// let mut mesh = TriMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no renderable content.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check that every face references an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidMesh`] naming the first out-of-range
    /// face.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            for &index in face {
                if index as usize >= vertex_count {
                    return Err(MeshError::invalid_mesh(format!(
                        "face {face_index} references vertex {index}, mesh has {vertex_count} vertices"
                    )));
                }
            }
        }
        Ok(())
    }
}
