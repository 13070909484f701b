//! Primitive shape generators.
//!
//! The playground viewer asks for shapes by name; [`ShapeKind`] parses the
//! name, [`ShapeSpec`] carries the dimensions, and [`ShapeSpec::generate`]
//! produces the [`TriMesh`]. The free functions build the raw geometry and
//! are exact about vertex placement so the viewer sees the same silhouettes
//! as always:
//!
//! - [`cube`]: 8 corners at `±size/2`, 12 triangles from 6 quads.
//! - [`uv_sphere`]: latitude-longitude grid with `(segments + 1)²`
//!   vertices and `2·segments²` triangles, poles along z.
//! - [`cylinder`]: two `segments`-vertex rims around z plus fan caps.

use std::f64::consts::PI;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::mesh::TriMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The supported primitive shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    /// Axis-aligned cube.
    Cube,
    /// Latitude-longitude sphere.
    Sphere,
    /// Capped cylinder around the z axis.
    Cylinder,
}

impl ShapeKind {
    /// The wire name of this shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Self::Cube),
            "sphere" => Ok(Self::Sphere),
            "cylinder" => Ok(Self::Cylinder),
            other => Err(MeshError::UnsupportedShape(other.to_string())),
        }
    }
}

/// A primitive shape with its dimensions.
///
/// Use the named constructors for the viewer's default dimensions and
/// override fields from there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "lowercase"))]
pub enum ShapeSpec {
    /// Cube with the given edge length.
    Cube {
        /// Edge length.
        size: f64,
    },
    /// Sphere with the given radius and grid resolution.
    Sphere {
        /// Sphere radius.
        radius: f64,
        /// Latitude and longitude subdivisions.
        segments: u32,
    },
    /// Cylinder with the given rim radius, height, and rim resolution.
    Cylinder {
        /// Rim radius.
        radius: f64,
        /// Total height along z.
        height: f64,
        /// Rim subdivisions.
        segments: u32,
    },
}

impl ShapeSpec {
    /// Default cube: unit edge length.
    #[must_use]
    pub const fn cube() -> Self {
        Self::Cube { size: 1.0 }
    }

    /// Default sphere: unit radius, 32 segments.
    #[must_use]
    pub const fn sphere() -> Self {
        Self::Sphere {
            radius: 1.0,
            segments: 32,
        }
    }

    /// Default cylinder: unit radius, height 2, 32 segments.
    #[must_use]
    pub const fn cylinder() -> Self {
        Self::Cylinder {
            radius: 1.0,
            height: 2.0,
            segments: 32,
        }
    }

    /// The default spec for a parsed shape name.
    #[must_use]
    pub const fn with_defaults(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Cube => Self::cube(),
            ShapeKind::Sphere => Self::sphere(),
            ShapeKind::Cylinder => Self::cylinder(),
        }
    }

    /// Which shape this spec describes.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Cube { .. } => ShapeKind::Cube,
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
        }
    }

    /// Validate the dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidDimension`] if any length is not
    /// positive and finite, or a ring resolution is below 3.
    pub fn validate(&self) -> MeshResult<()> {
        match *self {
            Self::Cube { size } => {
                check_length("cube size", size)?;
            }
            Self::Sphere { radius, segments } => {
                check_length("sphere radius", radius)?;
                check_segments(segments)?;
            }
            Self::Cylinder {
                radius,
                height,
                segments,
            } => {
                check_length("cylinder radius", radius)?;
                check_length("cylinder height", height)?;
                check_segments(segments)?;
            }
        }
        Ok(())
    }

    /// Validate and build the triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidDimension`] if the dimensions fail
    /// [`validate`](Self::validate).
    pub fn generate(&self) -> MeshResult<TriMesh> {
        self.validate()?;
        Ok(match *self {
            Self::Cube { size } => cube(size),
            Self::Sphere { radius, segments } => uv_sphere(radius, segments),
            Self::Cylinder {
                radius,
                height,
                segments,
            } => cylinder(radius, height, segments),
        })
    }
}

fn check_length(name: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MeshError::invalid_dimension(format!(
            "{name} must be positive and finite, got {value}"
        )));
    }
    Ok(())
}

fn check_segments(segments: u32) -> MeshResult<()> {
    if segments < 3 {
        return Err(MeshError::invalid_dimension(format!(
            "segments must be at least 3, got {segments}"
        )));
    }
    Ok(())
}

// =============================================================================
// Generators
// =============================================================================

/// Build an axis-aligned cube centered at the origin.
///
/// Corners sit at `±size/2`; the 6 quads are split into 12 triangles.
#[must_use]
pub fn cube(size: f64) -> TriMesh {
    let h = size / 2.0;

    let vertices = vec![
        Point3::new(-h, -h, -h), // 0
        Point3::new(h, -h, -h),  // 1
        Point3::new(h, h, -h),   // 2
        Point3::new(-h, h, -h),  // 3
        Point3::new(-h, -h, h),  // 4
        Point3::new(h, -h, h),   // 5
        Point3::new(h, h, h),    // 6
        Point3::new(-h, h, h),   // 7
    ];

    let quads: [[u32; 4]; 6] = [
        [0, 1, 2, 3], // back (z = -h)
        [4, 5, 6, 7], // front (z = +h)
        [0, 4, 7, 3], // left (x = -h)
        [1, 5, 6, 2], // right (x = +h)
        [0, 1, 5, 4], // bottom (y = -h)
        [3, 2, 6, 7], // top (y = +h)
    ];

    let mut faces = Vec::with_capacity(12);
    for [a, b, c, d] in quads {
        faces.push([a, b, c]);
        faces.push([a, c, d]);
    }

    let mesh = TriMesh::from_parts(vertices, faces);
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "generated cube"
    );
    mesh
}

/// Build a latitude-longitude sphere centered at the origin.
///
/// The grid has `(segments + 1)²` vertices; the seam column and the pole
/// rows carry duplicate positions, matching the viewer's UV layout.
/// Latitude runs from `-π/2` at the south pole to `+π/2` at the north
/// pole along z.
#[must_use]
pub fn uv_sphere(radius: f64, segments: u32) -> TriMesh {
    let s = segments;
    let mut mesh = TriMesh::with_capacity(((s + 1) * (s + 1)) as usize, (2 * s * s) as usize);

    for i in 0..=s {
        let lat = PI * (-0.5 + f64::from(i) / f64::from(s));
        for j in 0..=s {
            let lon = 2.0 * PI * f64::from(j) / f64::from(s);
            mesh.vertices.push(Point3::new(
                radius * lat.cos() * lon.cos(),
                radius * lat.cos() * lon.sin(),
                radius * lat.sin(),
            ));
        }
    }

    for i in 0..s {
        for j in 0..s {
            let first = i * (s + 1) + j;
            let second = first + s + 1;
            mesh.faces.push([first, second, first + 1]);
            mesh.faces.push([second, second + 1, first + 1]);
        }
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "generated sphere"
    );
    mesh
}

/// Build a capped cylinder around the z axis, centered at the origin.
///
/// The bottom rim sits at `z = -height/2` (indices `0..segments`), the top
/// rim at `z = +height/2` (indices `segments..2·segments`). Each cap is a
/// triangle fan anchored at its rim's first vertex.
#[must_use]
pub fn cylinder(radius: f64, height: f64, segments: u32) -> TriMesh {
    let s = segments;
    let half = height / 2.0;
    let mut mesh = TriMesh::with_capacity((2 * s) as usize, (2 * s + 2 * (s - 2)) as usize);

    for z in [-half, half] {
        for i in 0..s {
            let angle = 2.0 * PI * f64::from(i) / f64::from(s);
            mesh.vertices
                .push(Point3::new(radius * angle.cos(), radius * angle.sin(), z));
        }
    }

    // Side quads between the rims
    for i in 0..s {
        let next = (i + 1) % s;
        mesh.faces.push([i, i + s, next + s]);
        mesh.faces.push([i, next + s, next]);
    }

    // Cap fans
    for i in 1..(s - 1) {
        mesh.faces.push([0, i, i + 1]);
        mesh.faces.push([s, s + i, s + i + 1]);
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "generated cylinder"
    );
    mesh
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_geometry() {
        let mesh = cube(1.0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert!(mesh.validate().is_ok());

        // Corner order starts at (-h, -h, -h) and walks the bottom ring
        assert_eq!(mesh.vertices[0], Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(mesh.vertices[6], Point3::new(0.5, 0.5, 0.5));
        for vertex in &mesh.vertices {
            assert!(vertex.coords.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn test_sphere_geometry() {
        let mesh = uv_sphere(2.0, 8);
        assert_eq!(mesh.vertex_count(), 81); // (8 + 1)²
        assert_eq!(mesh.face_count(), 128); // 2 · 8²
        assert!(mesh.validate().is_ok());

        // Every vertex sits on the sphere
        for vertex in &mesh.vertices {
            assert_relative_eq!(vertex.coords.norm(), 2.0, epsilon = 1e-12);
        }

        // Poles along z: the first row is the south pole, the last the north
        assert_relative_eq!(mesh.vertices[0].z, -2.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices[80].z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_geometry() {
        let mesh = cylinder(1.0, 2.0, 8);
        assert_eq!(mesh.vertex_count(), 16); // two 8-vertex rims
        assert_eq!(mesh.face_count(), 28); // 16 side + 2 · 6 cap
        assert!(mesh.validate().is_ok());

        for (index, vertex) in mesh.vertices.iter().enumerate() {
            let expected_z = if index < 8 { -1.0 } else { 1.0 };
            assert_relative_eq!(vertex.z, expected_z, epsilon = 1e-12);
            assert_relative_eq!(
                (vertex.x * vertex.x + vertex.y * vertex.y).sqrt(),
                1.0,
                epsilon = 1e-12
            );
        }

        // First rim vertex sits on the +x axis
        assert_relative_eq!(mesh.vertices[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices[0].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [ShapeKind::Cube, ShapeKind::Sphere, ShapeKind::Cylinder] {
            assert_eq!(kind.as_str().parse::<ShapeKind>().unwrap(), kind);
        }
        assert_eq!(ShapeKind::Sphere.to_string(), "sphere");

        let err = "torus".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err, MeshError::UnsupportedShape("torus".to_string()));
    }

    #[test]
    fn test_spec_defaults() {
        assert_eq!(ShapeSpec::cube(), ShapeSpec::Cube { size: 1.0 });
        assert_eq!(
            ShapeSpec::sphere(),
            ShapeSpec::Sphere {
                radius: 1.0,
                segments: 32
            }
        );
        assert_eq!(
            ShapeSpec::cylinder(),
            ShapeSpec::Cylinder {
                radius: 1.0,
                height: 2.0,
                segments: 32
            }
        );

        for kind in [ShapeKind::Cube, ShapeKind::Sphere, ShapeKind::Cylinder] {
            let spec = ShapeSpec::with_defaults(kind);
            assert_eq!(spec.kind(), kind);
            assert!(spec.validate().is_ok());
        }
    }

    #[test]
    fn test_spec_validation() {
        let spec = ShapeSpec::Cube { size: -1.0 };
        assert!(spec.validate().is_err());

        let spec = ShapeSpec::Sphere {
            radius: f64::NAN,
            segments: 8,
        };
        assert!(spec.validate().is_err());

        let spec = ShapeSpec::Sphere {
            radius: 1.0,
            segments: 2,
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("segments"));

        let spec = ShapeSpec::Cylinder {
            radius: 1.0,
            height: 0.0,
            segments: 8,
        };
        assert!(spec.generate().is_err());
    }

    #[test]
    fn test_generate_dispatch() {
        let mesh = ShapeSpec::with_defaults(ShapeKind::Sphere).generate().unwrap();
        assert_eq!(mesh.vertex_count(), 33 * 33);
        assert_eq!(mesh.face_count(), 2 * 32 * 32);

        let mesh = ShapeSpec::cube().generate().unwrap();
        assert_eq!(mesh.face_count(), 12);

        let mesh = ShapeSpec::cylinder().generate().unwrap();
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.face_count(), 64 + 60);
    }
}
