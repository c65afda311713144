//! # Honeycomb Mesh
//!
//! Procedural generation of tiled hexagonal-prism meshes.
//! Builds a single hexagon template and stamps it across an interlocking
//! brick-offset honeycomb grid.
//!
//! ## Architecture
//!
//! ```text
//! GridParameters → create_hexagon (template) → tile (grid) → Mesh
//! ```
//!
//! The output is a pair of flat buffers (vertices and triangle indices) that
//! a host application turns into its native mesh object. Generation is a
//! pure, single-pass computation: fresh buffers every call, no retained
//! state, no I/O.
//!
//! ## Usage
//!
//! ```rust
//! use honeycomb_mesh::{generate, GridParameters};
//!
//! let params = GridParameters::new(2, 2, 1.0, 0.1, 1.0)?;
//! let mesh = generate(&params)?;
//! assert_eq!(mesh.vertex_count(), 56);
//! # Ok::<(), honeycomb_mesh::MeshError>(())
//! ```

pub mod error;
pub mod hexagon;
pub mod mesh;
pub mod params;
pub mod tiler;

pub use error::MeshError;
pub use hexagon::{create_hexagon, HexagonTemplate};
pub use mesh::Mesh;
pub use params::GridParameters;
pub use tiler::tile;

/// Generates the honeycomb grid mesh for the given parameters.
///
/// This is the main entry point: it builds the hexagon template for the
/// requested height and tiles it across the grid.
///
/// # Arguments
///
/// * `params` - Validated grid parameters
///
/// # Returns
///
/// A mesh containing vertices and triangle indices.
///
/// # Example
///
/// ```rust
/// use honeycomb_mesh::{generate, GridParameters};
///
/// let params = GridParameters::default();
/// let mesh = generate(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 4 * 7);
/// ```
pub fn generate(params: &GridParameters) -> Result<Mesh, MeshError> {
    let template = create_hexagon(params.height())?;
    Ok(tile(&template, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_generate_flat_two_by_two() {
        let params = GridParameters::new(2, 2, 1.0, 0.0, 0.0).unwrap();
        let mesh = generate(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 28);
        assert_eq!(mesh.triangle_count(), 24);
        assert_eq!(mesh.vertex(0), DVec3::ZERO);
    }

    #[test]
    fn test_generate_extruded_two_by_two() {
        let params = GridParameters::new(2, 2, 1.0, 0.1, 1.0).unwrap();
        let mesh = generate(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 56);
        assert_eq!(mesh.triangle_count(), 96);
    }

    #[test]
    fn test_generate_validates() {
        let params = GridParameters::new(5, 4, 2.0, 0.25, 3.0).unwrap();
        let mesh = generate(&params).unwrap();
        assert!(mesh.validate());
    }
}
