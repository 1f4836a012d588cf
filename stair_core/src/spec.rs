//! # Stair Specification
//!
//! The customer-supplied input for one BOM derivation. A specification is
//! immutable: validation borrows it, the engine consumes it by reference,
//! and nothing downstream mutates it.
//!
//! Validation checks only the configured numeric domains. Everything else is
//! treated permissively: an unrecognized frame color already fell back to
//! the baseline at parse time, and a platform depth of zero is simply used
//! as given.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "width_mm": 800.0,
//!   "height_mm": 2000.0,
//!   "step_count": 10,
//!   "material": "Composite",
//!   "has_platform": false,
//!   "platform_depth_mm": 0.0,
//!   "reinforcement_count": 1,
//!   "paint_consumption_g_per_m2": 180.0,
//!   "frame_color": "RAL9005"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::errors::{StairError, StairResult};
use crate::materials::{FrameColor, StepMaterial};

/// Input parameters for a stair frame BOM derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairSpecification {
    /// Overall stair width (mm)
    pub width_mm: f64,

    /// Overall rise from ground to the top step (mm)
    pub height_mm: f64,

    /// Number of steps, bottom step is index 0
    pub step_count: u32,

    /// Decking material selection
    pub material: StepMaterial,

    /// Whether the topmost step is an enlarged landing platform
    pub has_platform: bool,

    /// Landing platform depth (mm); meaningful only with `has_platform`
    #[serde(default)]
    pub platform_depth_mm: f64,

    /// Reinforcement multiplicity across the stair width
    pub reinforcement_count: u32,

    /// Paint film consumption (g/m²)
    pub paint_consumption_g_per_m2: f64,

    /// Frame powder-coat color
    #[serde(default)]
    pub frame_color: FrameColor,
}

impl StairSpecification {
    /// Validate the specification against the configured numeric domains.
    ///
    /// Width and height must lie in their closed intervals, the step count
    /// must be positive, and - when per-step-height bounds are configured
    /// and the stair has more than one step - the derived step height must
    /// lie within them. A single-step stair skips the step-height check: a
    /// "step height" spanning the whole run is not a step.
    ///
    /// No geometry is computed before this gate passes.
    pub fn validate(&self, config: &EngineConfig) -> StairResult<()> {
        let bounds = &config.bounds;

        if self.width_mm < bounds.min_width_mm || self.width_mm > bounds.max_width_mm {
            return Err(StairError::out_of_range(
                "width_mm",
                self.width_mm,
                bounds.min_width_mm,
                bounds.max_width_mm,
            ));
        }
        if self.height_mm < bounds.min_height_mm || self.height_mm > bounds.max_height_mm {
            return Err(StairError::out_of_range(
                "height_mm",
                self.height_mm,
                bounds.min_height_mm,
                bounds.max_height_mm,
            ));
        }
        if self.step_count == 0 {
            return Err(StairError::out_of_range(
                "step_count",
                0.0,
                1.0,
                f64::INFINITY,
            ));
        }
        if self.step_count > 1 {
            if let Some(step_bounds) = &bounds.step_height_mm {
                let step_height = self.step_height_mm();
                if step_height < step_bounds.min_mm || step_height > step_bounds.max_mm {
                    return Err(StairError::out_of_range(
                        "step_height_mm",
                        step_height,
                        step_bounds.min_mm,
                        step_bounds.max_mm,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Derived height of one step (mm)
    pub fn step_height_mm(&self) -> f64 {
        self.height_mm / self.step_count as f64
    }

    /// Index of the topmost step
    pub fn last_step_index(&self) -> u32 {
        self.step_count - 1
    }
}

/// Default reinforcement multiplicity for a given stair width.
///
/// One reinforcement run covers widths up to a metre; every started 300 mm
/// beyond that adds another.
pub fn default_reinforcement_count(width_mm: f64) -> u32 {
    if width_mm <= 1000.0 {
        1
    } else {
        ((width_mm - 1000.0) / 300.0).ceil() as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_spec() -> StairSpecification {
        StairSpecification {
            width_mm: 800.0,
            height_mm: 2000.0,
            step_count: 10,
            material: StepMaterial::Composite,
            has_platform: false,
            platform_depth_mm: 0.0,
            reinforcement_count: 1,
            paint_consumption_g_per_m2: 180.0,
            frame_color: FrameColor::Ral9005,
        }
    }

    #[test]
    fn test_valid_spec() {
        let spec = test_spec();
        assert!(spec.validate(&EngineConfig::default()).is_ok());
        assert_eq!(spec.step_height_mm(), 200.0);
        assert_eq!(spec.last_step_index(), 9);
    }

    #[test]
    fn test_width_below_minimum() {
        let mut spec = test_spec();
        spec.width_mm = 599.0;
        let error = spec.validate(&EngineConfig::default()).unwrap_err();
        assert_eq!(error.error_code(), "OUT_OF_RANGE");
        assert_eq!(error.field(), Some("width_mm"));
    }

    #[test]
    fn test_height_above_maximum() {
        let mut spec = test_spec();
        spec.height_mm = 3001.0;
        spec.step_count = 20;
        let error = spec.validate(&EngineConfig::default()).unwrap_err();
        assert_eq!(error.field(), Some("height_mm"));
    }

    #[test]
    fn test_zero_step_count() {
        let mut spec = test_spec();
        spec.step_count = 0;
        let error = spec.validate(&EngineConfig::default()).unwrap_err();
        assert_eq!(error.field(), Some("step_count"));
    }

    #[test]
    fn test_step_height_out_of_bounds() {
        let mut spec = test_spec();
        spec.step_count = 8; // 2000 / 8 = 250mm per step, above the 200mm cap
        let error = spec.validate(&EngineConfig::default()).unwrap_err();
        assert_eq!(error.field(), Some("step_height_mm"));
    }

    #[test]
    fn test_single_step_skips_step_height_check() {
        let mut spec = test_spec();
        spec.height_mm = 400.0;
        spec.step_count = 1; // 400mm "step height" would fail the bounds
        assert!(spec.validate(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_step_height_check_disabled() {
        let mut spec = test_spec();
        spec.step_count = 8;
        let mut config = EngineConfig::default();
        config.bounds.step_height_mm = None;
        assert!(spec.validate(&config).is_ok());
    }

    #[test]
    fn test_default_reinforcement_count() {
        assert_eq!(default_reinforcement_count(800.0), 1);
        assert_eq!(default_reinforcement_count(1000.0), 1);
        assert_eq!(default_reinforcement_count(1001.0), 2);
        assert_eq!(default_reinforcement_count(1300.0), 2);
        assert_eq!(default_reinforcement_count(1301.0), 3);
        assert_eq!(default_reinforcement_count(2000.0), 5);
    }

    #[test]
    fn test_serialization() {
        let spec = test_spec();
        let json = serde_json::to_string_pretty(&spec).unwrap();
        let roundtrip: StairSpecification = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }

    #[test]
    fn test_defaults_on_deserialize() {
        // platform_depth_mm and frame_color may be omitted on the wire
        let json = r#"{
            "width_mm": 800.0,
            "height_mm": 2000.0,
            "step_count": 10,
            "material": "Corrugated",
            "has_platform": false,
            "reinforcement_count": 1,
            "paint_consumption_g_per_m2": 180.0
        }"#;
        let spec: StairSpecification = serde_json::from_str(json).unwrap();
        assert_eq!(spec.platform_depth_mm, 0.0);
        assert_eq!(spec.frame_color, FrameColor::Ral9005);
    }
}
