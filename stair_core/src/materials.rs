//! # Step Materials and Policy Resolution
//!
//! The three supported decking materials interact with the frame geometry in
//! overlapping but distinct ways: composite decking consumes step height and
//! adds boards/fasteners, corrugated sheet does neither but contributes its
//! own paintable surface, and a mixed stair applies corrugated rules to the
//! bottom step only.
//!
//! To keep that branching out of the geometry and consumables code, the
//! material tag is resolved exactly once into a [`MaterialPolicy`]. Every
//! downstream component consumes only the resolved policy fields - the raw
//! tag never travels past this module.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::config::EngineConfig;
//! use stair_core::materials::{MaterialPolicy, StepMaterial};
//!
//! let config = EngineConfig::default();
//! let policy = MaterialPolicy::resolve(StepMaterial::Mixed, 5, &config);
//!
//! assert!(policy.first_step_exempt);
//! assert!(!policy.composite_step(0)); // bottom step follows corrugated rules
//! assert!(policy.composite_step(1));
//! ```

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::errors::{StairError, StairResult};

/// Decking material selection for the whole stair.
///
/// ## JSON Serialization
///
/// ```json
/// "Composite"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepMaterial {
    /// Wood-polymer composite boards on every step
    Composite,
    /// Corrugated rigid sheet on every step
    Corrugated,
    /// Corrugated sheet on the bottom step, composite boards above
    Mixed,
}

impl StepMaterial {
    /// Parse a wire-format material code.
    ///
    /// Accepts the English variant names (case-insensitive) and the legacy
    /// fabrication-shop codes. This is the one place the engine can observe
    /// an unrecognized material; once a `StepMaterial` exists the error is
    /// unrepresentable.
    pub fn from_code(code: &str) -> StairResult<Self> {
        match code.trim() {
            "ДПК" => Ok(StepMaterial::Composite),
            "ПВЛ" => Ok(StepMaterial::Corrugated),
            "ДПК+1 ПВЛ" => Ok(StepMaterial::Mixed),
            other => match other.to_ascii_lowercase().as_str() {
                "composite" => Ok(StepMaterial::Composite),
                "corrugated" => Ok(StepMaterial::Corrugated),
                "mixed" => Ok(StepMaterial::Mixed),
                _ => Err(StairError::unsupported_material(code)),
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StepMaterial::Composite => "Composite decking",
            StepMaterial::Corrugated => "Corrugated sheet",
            StepMaterial::Mixed => "Corrugated first step + composite",
        }
    }
}

impl std::fmt::Display for StepMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolved material policy, recomputed for each calculation.
///
/// A mixed stair with a single step degrades to pure corrugated behavior:
/// there is no distinguishable first step, so no reduction, no board
/// elevation, and no composite-covered steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialPolicy {
    /// Usable depth of a regular (non-platform) step (mm)
    pub step_depth_mm: f64,

    /// Height subtracted per composite-covered step (mm); zero when no step
    /// carries composite decking
    pub height_reduction_per_step_mm: f64,

    /// True only for a mixed stair with at least two steps: step index 0
    /// keeps the unreduced corrugated height
    pub first_step_exempt: bool,

    /// Vertical decking-board offset above the frame (mm); zero when no
    /// composite decking is present
    pub board_elevation_mm: f64,

    /// Index of the first composite-covered step; `None` when every step is
    /// corrugated
    first_composite_step: Option<u32>,

    /// Number of steps this policy was resolved for
    step_count: u32,
}

impl MaterialPolicy {
    /// Resolve the material selection into a policy.
    ///
    /// Resolution is infallible for a typed `StepMaterial`; unrecognized
    /// wire codes are rejected earlier by [`StepMaterial::from_code`].
    pub fn resolve(material: StepMaterial, step_count: u32, config: &EngineConfig) -> Self {
        let constants = &config.materials;
        match material {
            StepMaterial::Composite => MaterialPolicy {
                step_depth_mm: constants.composite_depth_mm,
                height_reduction_per_step_mm: constants.composite_reduction_mm,
                first_step_exempt: false,
                board_elevation_mm: constants.board_elevation_mm,
                first_composite_step: Some(0),
                step_count,
            },
            StepMaterial::Corrugated => Self::corrugated(step_count, config),
            StepMaterial::Mixed => {
                // A mixed stair needs at least 2 steps to have a
                // distinguishable corrugated first step.
                if step_count < 2 {
                    Self::corrugated(step_count, config)
                } else {
                    MaterialPolicy {
                        step_depth_mm: constants.composite_depth_mm,
                        height_reduction_per_step_mm: constants.composite_reduction_mm,
                        first_step_exempt: true,
                        board_elevation_mm: constants.board_elevation_mm,
                        first_composite_step: Some(1),
                        step_count,
                    }
                }
            }
        }
    }

    fn corrugated(step_count: u32, config: &EngineConfig) -> Self {
        MaterialPolicy {
            step_depth_mm: config.materials.corrugated_depth_mm,
            height_reduction_per_step_mm: 0.0,
            first_step_exempt: false,
            board_elevation_mm: 0.0,
            first_composite_step: None,
            step_count,
        }
    }

    /// Shared participation predicate: does the step at `index` follow
    /// composite rules (height reduction, depth reinforcement, boards and
    /// fasteners)?
    pub fn composite_step(&self, index: u32) -> bool {
        matches!(self.first_composite_step, Some(first) if index >= first)
    }

    /// Number of composite-covered steps
    pub fn composite_step_count(&self) -> u32 {
        match self.first_composite_step {
            Some(first) => self.step_count.saturating_sub(first),
            None => 0,
        }
    }

    /// Number of corrugated-covered steps
    pub fn corrugated_step_count(&self) -> u32 {
        self.step_count - self.composite_step_count()
    }

    /// Number of height-reduced steps at or below `index`.
    ///
    /// A step's contribution to cumulative height is reduced exactly when
    /// that step carries composite decking; for a mixed stair step 0 is
    /// never reduced, even when it is not the index being evaluated.
    pub fn reduced_steps_through(&self, index: u32) -> u32 {
        match self.first_composite_step {
            Some(first) if index >= first => index - first + 1,
            _ => 0,
        }
    }

    /// Cumulative height up to and including the step at `index`, with the
    /// per-step reduction applied to every reduced step at or below it (mm).
    pub fn reduced_cumulative_height_mm(&self, step_height_mm: f64, index: u32) -> f64 {
        step_height_mm * (index + 1) as f64
            - self.reduced_steps_through(index) as f64 * self.height_reduction_per_step_mm
    }
}

/// Frame color code from the supported palette.
///
/// ## JSON Serialization
///
/// ```json
/// "RAL9005"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FrameColor {
    /// Jet black
    #[default]
    #[serde(rename = "RAL9005")]
    Ral9005,
    /// Chocolate brown
    #[serde(rename = "RAL8017")]
    Ral8017,
    /// Graphite grey
    #[serde(rename = "RAL7024")]
    Ral7024,
}

impl FrameColor {
    /// Parse a wire-format color code, falling back to the baseline color
    /// for anything unrecognized. This lookup never fails.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "RAL9005" => FrameColor::Ral9005,
            "RAL8017" => FrameColor::Ral8017,
            "RAL7024" => FrameColor::Ral7024,
            _ => FrameColor::default(),
        }
    }

    /// RAL code string
    pub fn code(&self) -> &'static str {
        match self {
            FrameColor::Ral9005 => "RAL9005",
            FrameColor::Ral8017 => "RAL8017",
            FrameColor::Ral7024 => "RAL7024",
        }
    }

    /// Display hex value of the powder-coated frame
    pub fn frame_hex(&self) -> &'static str {
        match self {
            FrameColor::Ral9005 => "#000000",
            FrameColor::Ral8017 => "#44322D",
            FrameColor::Ral7024 => "#474A51",
        }
    }

    /// Decking board color paired with this frame color
    pub fn decking_color(&self) -> DeckingColor {
        match self {
            FrameColor::Ral9005 => DeckingColor::Wenge,
            FrameColor::Ral8017 => DeckingColor::Brown,
            FrameColor::Ral7024 => DeckingColor::Gray,
        }
    }
}

impl std::fmt::Display for FrameColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Composite decking board color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckingColor {
    Wenge,
    Brown,
    Gray,
}

impl DeckingColor {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeckingColor::Wenge => "Wenge",
            DeckingColor::Brown => "Brown",
            DeckingColor::Gray => "Gray",
        }
    }

    /// Display hex value of the board surface
    pub fn hex(&self) -> &'static str {
        match self {
            DeckingColor::Wenge => "#382B22",
            DeckingColor::Brown => "#8B4513",
            DeckingColor::Gray => "#808080",
        }
    }
}

impl std::fmt::Display for DeckingColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
