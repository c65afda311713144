//! Centralized configuration values shared across the honeycomb mesh pipeline.
//!
//! Each public item documents its purpose so that downstream crates can remain
//! declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and by mesh validation to reject zero-area triangles.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Returns true if two values are equal within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1.0e-12));
/// ```
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if a value is zero within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1.0e-12));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// HEXAGON GEOMETRY
// =============================================================================

/// Number of rim vertices on one hexagon.
///
/// # Examples
/// ```
/// use config::constants::HEX_RIM_VERTICES;
/// assert_eq!(HEX_RIM_VERTICES, 6);
/// ```
pub const HEX_RIM_VERTICES: usize = 6;

// =============================================================================
// GRID PARAMETER BOUNDS
// =============================================================================

/// Minimum number of grid rows accepted by the tiler.
pub const MIN_GRID_ROWS: u32 = 2;

/// Minimum number of grid columns accepted by the tiler.
pub const MIN_GRID_COLUMNS: u32 = 2;

/// Smallest uniform scale the operator UI exposes.
pub const MIN_SCALE: f64 = 0.01;

/// Largest uniform scale the operator UI exposes.
pub const MAX_SCALE: f64 = 100.0;

/// Largest inter-hexagon spacing the operator UI exposes.
pub const MAX_SPACING: f64 = 100.0;

/// Largest `rows * columns` product the tiler accepts.
///
/// Keeps every face index of the combined buffers within `u32` (a cell
/// contributes at most 14 vertices) with ample headroom.
pub const MAX_GRID_CELLS: u64 = 1 << 24;

// =============================================================================
// GRID PARAMETER DEFAULTS
// =============================================================================

/// Default row count for a freshly added honeycomb grid.
pub const DEFAULT_ROWS: u32 = 2;

/// Default column count for a freshly added honeycomb grid.
pub const DEFAULT_COLUMNS: u32 = 2;

/// Default uniform scale applied to the hexagon template.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default gap between adjacent hexagons.
pub const DEFAULT_SPACING: f64 = 0.1;

/// Default extrusion height (flat hexagons).
pub const DEFAULT_HEIGHT: f64 = 0.0;

// =============================================================================
// GLOBAL CONFIG SNAPSHOT
// =============================================================================

/// Immutable, host-facing snapshot of tunable settings.
///
/// Hosts that expose their own preference panels can validate user values
/// through this type before feeding them to the generator crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance for a host's own geometry comparisons.
    pub tolerance: f64,
    /// Default uniform scale applied to generated grids.
    pub default_scale: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and default scale.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 2.0).expect("valid config");
    /// assert_eq!(cfg.default_scale, 2.0);
    /// ```
    pub fn new(tolerance: f64, default_scale: f64) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_SCALE..=MAX_SCALE).contains(&default_scale) {
            return Err(ConfigError::InvalidScale(default_scale));
        }
        Ok(Self {
            tolerance,
            default_scale,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            default_scale: DEFAULT_SCALE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested default scale falls outside the UI bounds.
    InvalidScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidScale(value) => {
                write!(
                    f,
                    "default_scale must lie within {MIN_SCALE}..={MAX_SCALE}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
