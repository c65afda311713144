//! # Hexagon Builder
//!
//! Generates the single-hexagon template that the tiler stamps across the
//! grid: a flat fan of 6 triangles, or a closed prism when extruded.

use std::f64::consts::PI;

use config::constants::HEX_RIM_VERTICES;
use glam::DVec3;

use crate::error::MeshError;

/// The immutable single-hexagon geometry, centered at the origin with unit
/// circumradius.
///
/// Vertex layout:
/// - index 0: top center
/// - indices 1..=6: top rim, counter-clockwise at 60° increments from angle 0
/// - (extruded only) index 7: bottom center, indices 8..=13: bottom rim
///
/// # Example
///
/// ```rust
/// use honeycomb_mesh::create_hexagon;
///
/// let flat = create_hexagon(0.0).unwrap();
/// assert_eq!(flat.vertex_count(), 7);
/// assert_eq!(flat.face_count(), 6);
///
/// let prism = create_hexagon(2.0).unwrap();
/// assert_eq!(prism.vertex_count(), 14);
/// assert_eq!(prism.face_count(), 24);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HexagonTemplate {
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
}

impl HexagonTemplate {
    /// Returns the template vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the template faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the number of template vertices (7 flat, 14 extruded).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of template faces (6 flat, 24 extruded).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the top rim vertex `i`, where `i` runs 1..=6 counter-clockwise
    /// starting at angle 0.
    #[inline]
    pub fn rim(&self, i: usize) -> DVec3 {
        debug_assert!((1..=HEX_RIM_VERTICES).contains(&i));
        self.vertices[i]
    }

    /// Returns true if the template carries a bottom face set and side walls.
    #[inline]
    pub fn is_extruded(&self) -> bool {
        self.vertices.len() > HEX_RIM_VERTICES + 1
    }
}

/// Creates the hexagon template for the given extrusion height.
///
/// # Arguments
///
/// * `height` - Extrusion depth below z = 0. Zero produces a flat hexagon
///   (7 vertices, 6 fan triangles); any positive value produces a closed
///   prism (14 vertices, 24 triangles). There is no upper bound.
///
/// # Returns
///
/// The template, or [`MeshError::InvalidParameter`] when `height` is negative
/// or non-finite.
///
/// # Example
///
/// ```rust
/// use honeycomb_mesh::create_hexagon;
///
/// let template = create_hexagon(1.0).unwrap();
/// // Bottom rim mirrors the top rim at z = -1
/// assert_eq!(template.vertices()[8].z, -1.0);
/// ```
pub fn create_hexagon(height: f64) -> Result<HexagonTemplate, MeshError> {
    if !height.is_finite() || height < 0.0 {
        return Err(MeshError::invalid_parameter(
            "height",
            format!("must be non-negative: {height}"),
        ));
    }

    let n = HEX_RIM_VERTICES;
    let mut vertices = Vec::with_capacity(if height > 0.0 { 2 * (n + 1) } else { n + 1 });
    let mut faces = Vec::with_capacity(if height > 0.0 { 4 * n } else { n });

    // Top face set: center at the origin, rim on the unit circle.
    vertices.push(DVec3::ZERO);
    for i in 0..n {
        let theta = i as f64 * PI / 3.0;
        vertices.push(DVec3::new(theta.cos(), theta.sin(), 0.0));
    }

    // Top fan: (center, rim i, rim i+1), closing back to rim 1.
    for i in 0..n as u32 {
        faces.push([0, i + 1, (i + 1) % n as u32 + 1]);
    }

    if height > 0.0 {
        // Bottom face set: the top set mirrored to z = -height.
        let base = (n + 1) as u32;
        vertices.push(DVec3::new(0.0, 0.0, -height));
        for i in 0..n {
            let theta = i as f64 * PI / 3.0;
            vertices.push(DVec3::new(theta.cos(), theta.sin(), -height));
        }

        // Bottom fan, wound so normals face downward.
        for i in 0..n as u32 {
            faces.push([base, (i + 1) % n as u32 + base + 1, i + base + 1]);
        }

        // Side walls: one quad per rim edge, two triangles per quad, closing
        // the loop between rim 6 and rim 1.
        for i in 0..n as u32 {
            let t0 = i + 1;
            let t1 = (i + 1) % n as u32 + 1;
            let b0 = t0 + base;
            let b1 = t1 + base;
            faces.push([t0, b0, b1]);
            faces.push([t0, b1, t1]);
        }
    }

    Ok(HexagonTemplate { vertices, faces })
}
