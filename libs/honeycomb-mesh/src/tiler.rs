//! # Grid Tiler
//!
//! Stamps the hexagon template across a brick-offset honeycomb grid: rows
//! advance along x, columns along y, and odd rows are shifted by half a
//! hexagon height so the rims interlock (seamlessly when spacing is zero,
//! with uniform gaps otherwise).

use std::f64::consts::PI;

use glam::{DVec2, DVec3};

use crate::hexagon::HexagonTemplate;
use crate::mesh::Mesh;
use crate::params::GridParameters;

/// Intersects the infinite line through `p1`/`p2` with the one through
/// `p3`/`p4`.
///
/// Used with the segment from the hexagon center along the 30° direction and
/// the rim-1/rim-2 edge, which meet at the edge midpoint. The determinant is
/// structurally non-zero for that fixed geometry.
fn edge_midpoint(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> DVec2 {
    let det = (p1.x - p2.x) * (p4.y - p3.y) - (p4.x - p3.x) * (p1.y - p2.y);
    let t = ((p4.y - p3.y) * (p4.x - p2.x) + (p3.x - p4.x) * (p4.y - p2.y)) / det;
    DVec2::new(
        t * p1.x + (1.0 - t) * p2.x,
        t * p1.y + (1.0 - t) * p2.y,
    )
}

/// Tiles the template across the grid described by `params`.
///
/// Emits exactly `rows * columns` translated template copies, column-major:
/// every cell contributes `template.vertex_count()` vertices followed (in
/// face order) by `template.face_count()` triangles whose indices stay inside
/// the cell's own vertex block. Scale applies to the hexagon footprint and
/// the layout pitch only; z is never scaled or offset per cell.
///
/// # Example
///
/// ```rust
/// use honeycomb_mesh::{create_hexagon, tile, GridParameters};
///
/// let template = create_hexagon(0.0).unwrap();
/// let params = GridParameters::new(2, 2, 1.0, 0.0, 0.0).unwrap();
/// let mesh = tile(&template, &params);
/// assert_eq!(mesh.vertex_count(), 28);
/// assert_eq!(mesh.triangle_count(), 24);
/// ```
pub fn tile(template: &HexagonTemplate, params: &GridParameters) -> Mesh {
    let scale = params.scale();
    let spacing = params.spacing();

    // Edge midpoint of the rim-1/rim-2 edge. Twice its x is the
    // center-to-center pitch within a row; its y is the row interleave.
    let rad30 = PI / 6.0;
    let mut em = edge_midpoint(
        DVec2::ZERO,
        DVec2::new(rad30.cos(), rad30.sin()),
        template.rim(1).truncate(),
        template.rim(2).truncate(),
    );

    // Vertical extent of one hexagon, before stacking.
    let mut y_max = (PI / 3.0).sin();

    // Scale the footprint and the layout metrics; height stays unscaled.
    // The scaled template becomes the stamp copied into every cell.
    let mut stamp = Mesh::with_capacity(template.vertex_count(), template.face_count());
    for v in template.vertices() {
        stamp.add_vertex(DVec3::new(v.x * scale, v.y * scale, v.z));
    }
    for face in template.faces() {
        stamp.add_triangle(face[0], face[1], face[2]);
    }
    em *= scale;
    y_max *= scale;

    let cells = params.cell_count();
    let mut mesh = Mesh::with_capacity(
        stamp.vertex_count() * cells,
        stamp.triangle_count() * cells,
    );

    for c in 0..params.columns() {
        let c_space = if c != 0 { spacing } else { 0.0 };
        for r in 0..params.rows() {
            let r_space = if r != 0 { spacing } else { 0.0 };
            let rf = f64::from(r);
            let cf = f64::from(c);

            let dx = em.x * 2.0 * rf + r_space * rf;
            let mut dy = y_max * cf + c_space * cf;
            // Brick offset: odd rows shift up by half a hexagon height plus
            // half the spacing so the rims interlock.
            if r % 2 == 0 {
                dy += em.y * 2.0 * cf;
            } else {
                dy += em.y * 2.0 * (cf + 1.0) + spacing / 2.0;
            }

            let mut cell = stamp.clone();
            cell.translate(DVec3::new(dx, dy, 0.0));
            mesh.merge(&cell);
        }
    }

    mesh
}
