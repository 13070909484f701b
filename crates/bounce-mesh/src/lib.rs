//! Primitive triangle meshes for the bounce playground viewer.
//!
//! The viewer requests shapes by name and renders whatever indexed triangle
//! mesh comes back. This crate owns that geometry:
//!
//! - [`TriMesh`] - Indexed triangle mesh, CCW winding
//! - [`ShapeKind`] / [`ShapeSpec`] - Named shapes and their dimensions
//! - [`cube`] / [`uv_sphere`] / [`cylinder`] - The raw generators
//!
//! The vertex layouts are fixed: the viewer's shading and the engine's
//! closed-form fall preview (which displaces these vertices along z) both
//! depend on the exact grids these generators emit.
//!
//! # Example
//!
//! ```
//! use bounce_mesh::{ShapeKind, ShapeSpec};
//!
//! let kind: ShapeKind = "sphere".parse().unwrap();
//! let mesh = ShapeSpec::with_defaults(kind).generate().unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 33 * 33);
//! assert!(mesh.validate().is_ok());
//! ```

#![doc(html_root_url = "https://docs.rs/bounce-mesh/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
// Allow certain clippy lints that are overly pedantic for geometry builders
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to Vec
)]

mod error;
mod mesh;
mod primitives;

pub use error::{MeshError, MeshResult};
pub use mesh::TriMesh;
pub use primitives::{cube, cylinder, uv_sphere, ShapeKind, ShapeSpec};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_name_to_mesh_pipeline() {
        for name in ["cube", "sphere", "cylinder"] {
            let kind: ShapeKind = name.parse().unwrap();
            let mesh = ShapeSpec::with_defaults(kind).generate().unwrap();
            assert!(!mesh.is_empty());
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "teapot".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err, MeshError::UnsupportedShape("teapot".to_string()));
    }
}
