//! # Engine Configuration
//!
//! All numeric limits and material constants the engine depends on live in
//! one immutable [`EngineConfig`] value that callers inject into the
//! validator and policy resolver. Nothing is read from ambient or global
//! state, so the engine stays referentially transparent and trivially
//! testable with varied bounds.
//!
//! The defaults reproduce the production fabrication constants: a 20 mm
//! square-tube profile, 305 mm composite / 300 mm corrugated step depths,
//! and a 25 mm per-step height reduction for composite decking.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.profile.thickness_mm, 20.0);
//! assert_eq!(config.profile.perimeter_mm(), 80.0);
//! ```

use serde::{Deserialize, Serialize};

/// Immutable engine configuration: validation bounds plus material and
/// hardware constants. Treated as read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Numeric domains for customer-supplied dimensions
    pub bounds: DimensionBounds,

    /// Structural profile cross-section
    pub profile: ProfileSpec,

    /// Per-material step constants
    pub materials: MaterialConstants,

    /// Fixed-geometry hardware and auxiliary-part constants
    pub hardware: HardwareConstants,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            bounds: DimensionBounds::default(),
            profile: ProfileSpec::default(),
            materials: MaterialConstants::default(),
            hardware: HardwareConstants::default(),
        }
    }
}

/// Closed intervals for customer-supplied dimensions (mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBounds {
    pub min_width_mm: f64,
    pub max_width_mm: f64,
    pub min_height_mm: f64,
    pub max_height_mm: f64,

    /// Bounds for the derived step height (height / step count). Optional;
    /// when absent no per-step-height check is performed.
    pub step_height_mm: Option<StepHeightBounds>,
}

impl Default for DimensionBounds {
    fn default() -> Self {
        DimensionBounds {
            min_width_mm: 600.0,
            max_width_mm: 2000.0,
            min_height_mm: 100.0,
            max_height_mm: 3000.0,
            step_height_mm: Some(StepHeightBounds::default()),
        }
    }
}

/// Closed interval for the derived per-step height (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepHeightBounds {
    pub min_mm: f64,
    pub max_mm: f64,
}

impl Default for StepHeightBounds {
    fn default() -> Self {
        StepHeightBounds {
            min_mm: 150.0,
            max_mm: 200.0,
        }
    }
}

/// Square-tube profile used for every structural member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// Cross-sectional thickness (mm), subtracted twice per joint
    pub thickness_mm: f64,
}

impl ProfileSpec {
    /// Paintable cross-section perimeter of the square tube (mm)
    pub fn perimeter_mm(&self) -> f64 {
        4.0 * self.thickness_mm
    }

    /// Length lost to the two connection overlaps of a member (mm)
    pub fn joint_allowance_mm(&self) -> f64 {
        2.0 * self.thickness_mm
    }
}

impl Default for ProfileSpec {
    fn default() -> Self {
        ProfileSpec { thickness_mm: 20.0 }
    }
}

/// Step-depth and decking constants per material family (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialConstants {
    /// Usable step depth when composite decking covers the step
    pub composite_depth_mm: f64,

    /// Usable step depth when corrugated sheet covers the step
    pub corrugated_depth_mm: f64,

    /// Height subtracted per composite-covered step for decking thickness
    pub composite_reduction_mm: f64,

    /// Vertical offset of a composite decking board above the frame
    pub board_elevation_mm: f64,
}

impl Default for MaterialConstants {
    fn default() -> Self {
        MaterialConstants {
            composite_depth_mm: 305.0,
            corrugated_depth_mm: 300.0,
            composite_reduction_mm: 25.0,
            board_elevation_mm: 10.0,
        }
    }
}

/// Fixed hardware geometry and auxiliary-part multiplicities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareConstants {
    /// Length of one internal inter-step brace (mm), independent of
    /// stair dimensions
    pub internal_brace_mm: f64,

    /// Mounting-eye strip dimensions
    pub eye_strip: StripDimensions,

    /// Number of mounting-eye strips per stair
    pub eye_strip_count: u32,

    /// Decking boards per composite-covered step
    pub boards_per_step: u32,

    /// Bolts per decking board (nuts match bolts one-to-one)
    pub bolts_per_board: u32,
}

impl Default for HardwareConstants {
    fn default() -> Self {
        HardwareConstants {
            internal_brace_mm: 300.0,
            eye_strip: StripDimensions::default(),
            eye_strip_count: 2,
            boards_per_step: 2,
            bolts_per_board: 2,
        }
    }
}

/// Rectangular flat-strip dimensions (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripDimensions {
    pub length_mm: f64,
    pub width_mm: f64,
    pub thickness_mm: f64,
}

impl StripDimensions {
    /// Total paintable surface of one strip, all six faces (mm²)
    pub fn surface_area_mm2(&self) -> f64 {
        2.0 * (self.length_mm * self.width_mm
            + self.length_mm * self.thickness_mm
            + self.width_mm * self.thickness_mm)
    }
}

impl Default for StripDimensions {
    fn default() -> Self {
        StripDimensions {
            length_mm: 150.0,
            width_mm: 40.0,
            thickness_mm: 4.0,
        }
    }
}
