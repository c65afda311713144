//! # Honeycomb Op
//!
//! The operator-shaped boundary between a 3D host application and the
//! honeycomb mesh generator. [`HexagonsOp`] mirrors the host's "Add Mesh"
//! property panel: grid counts, scale, spacing, height, plus the placement
//! properties (align, location, rotation) every add-mesh operator carries.
//!
//! The host remains responsible for scene insertion and undo; this crate
//! only translates panel values into validated [`GridParameters`] and hands
//! back a placed [`Mesh`].
//!
//! ## Usage
//!
//! ```rust
//! use honeycomb_op::HexagonsOp;
//! use glam::DVec3;
//!
//! let op = HexagonsOp {
//!     rows: 3,
//!     columns: 3,
//!     height: 1.0,
//!     location: DVec3::new(5.0, 0.0, 0.0),
//!     ..HexagonsOp::default()
//! };
//! let mesh = op.execute()?;
//! assert_eq!(mesh.vertex_count(), 9 * 14);
//! # Ok::<(), honeycomb_mesh::MeshError>(())
//! ```

use config::constants::{
    DEFAULT_COLUMNS, DEFAULT_HEIGHT, DEFAULT_ROWS, DEFAULT_SCALE, DEFAULT_SPACING, MAX_SCALE,
    MAX_SPACING, MIN_GRID_COLUMNS, MIN_GRID_ROWS, MIN_SCALE,
};
use glam::{DMat4, DQuat, DVec3, EulerRot};
use honeycomb_mesh::{generate, GridParameters, Mesh, MeshError};
use serde::{Deserialize, Serialize};

/// Placement alignment, matching the host's add-object options.
///
/// `View` and `Cursor` need a frame only the host knows; the caller supplies
/// it through [`HexagonsOp::execute_with_basis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    /// Place relative to the world origin.
    #[default]
    World,
    /// Place relative to the viewport orientation.
    View,
    /// Place relative to the host's 3D cursor.
    Cursor,
}

/// Property set of the "Add Hexagons" operator.
///
/// Fields are plain host-panel values: out-of-range entries are clamped to
/// the panel bounds on execution (the host UI clamps silently rather than
/// erroring), then validated into [`GridParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexagonsOp {
    /// Number of rows (hexagons along x), minimum 2.
    pub rows: u32,
    /// Number of columns (hexagons along y), minimum 2.
    pub columns: u32,
    /// Uniform hexagon scale, panel range 0.01..=100.
    pub scale: f64,
    /// Gap between hexagons, panel range 0..=100.
    pub space: f64,
    /// Extrusion height, minimum 0.
    pub height: f64,
    /// Placement alignment.
    pub align: Align,
    /// Placement translation.
    pub location: DVec3,
    /// Placement rotation, XYZ Euler angles in radians.
    pub rotation: DVec3,
}

impl Default for HexagonsOp {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            scale: DEFAULT_SCALE,
            space: DEFAULT_SPACING,
            height: DEFAULT_HEIGHT,
            align: Align::World,
            location: DVec3::ZERO,
            rotation: DVec3::ZERO,
        }
    }
}

impl HexagonsOp {
    /// Generates the grid and applies world placement.
    ///
    /// Equivalent to [`execute_with_basis`](Self::execute_with_basis) with an
    /// identity basis, which is exact for [`Align::World`].
    pub fn execute(&self) -> Result<Mesh, MeshError> {
        self.execute_with_basis(&DMat4::IDENTITY)
    }

    /// Generates the grid and applies placement in the given host frame.
    ///
    /// For [`Align::World`] the basis is ignored; for [`Align::View`] and
    /// [`Align::Cursor`] the caller passes the viewport or cursor frame and
    /// the placement is composed inside it.
    pub fn execute_with_basis(&self, basis: &DMat4) -> Result<Mesh, MeshError> {
        let params = self.clamped_parameters()?;
        let mut mesh = generate(&params)?;

        let placement = match self.align {
            Align::World => self.placement(),
            Align::View | Align::Cursor => *basis * self.placement(),
        };
        mesh.transform(&placement);
        mesh.ensure_valid()?;
        Ok(mesh)
    }

    /// Clamps panel values to their UI bounds and builds core parameters.
    fn clamped_parameters(&self) -> Result<GridParameters, MeshError> {
        GridParameters::new(
            self.rows.max(MIN_GRID_ROWS),
            self.columns.max(MIN_GRID_COLUMNS),
            self.scale.clamp(MIN_SCALE, MAX_SCALE),
            self.space.clamp(0.0, MAX_SPACING),
            self.height.max(0.0),
        )
    }

    /// Rotation-then-translation placement matrix.
    fn placement(&self) -> DMat4 {
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        DMat4::from_rotation_translation(rotation, self.location)
    }
}
