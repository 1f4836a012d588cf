//! # Consumables
//!
//! Everything on the BOM that is not a structural metal length: paintable
//! surface area and paint mass, composite decking boards, the bolts and
//! nuts that hold them down, and the decking color resolved from the frame
//! color palette.
//!
//! The paintable area has three contributions: the profile skin of every
//! structural member (cross-section perimeter times total structural
//! length), the two mounting-eye strips on all faces, and - when any step
//! carries corrugated sheet - both faces of the sheet itself.
//!
//! Boards and fasteners follow the policy's participation predicate, so a
//! mixed stair's corrugated first step contributes neither.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::materials::{DeckingColor, MaterialPolicy};
use crate::spec::StairSpecification;
use crate::units::{SquareMeters, SquareMillimeters};

/// Paintable area and paint mass, full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintEstimate {
    /// Total paintable surface (m²)
    pub area_m2: f64,

    /// Paint mass at the specified film consumption (g)
    pub mass_g: f64,
}

/// Composite decking boards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckingEstimate {
    /// Number of boards, two per composite-covered step
    pub board_count: u32,

    /// Total board length, each board spanning the stair width (mm)
    pub board_length_mm: f64,

    /// Board color resolved from the frame color palette
    pub color: DeckingColor,
}

/// Decking fasteners; nuts match bolts one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastenerCounts {
    pub bolts: u32,
    pub nuts: u32,
}

/// Derived consumables for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consumables {
    pub paint: PaintEstimate,
    pub decking: DeckingEstimate,
    pub fasteners: FastenerCounts,
}

impl Consumables {
    /// Derive consumables from a validated specification, its resolved
    /// policy, and the total structural metal length (base + steps +
    /// stands + reinforcements).
    pub fn derive(
        spec: &StairSpecification,
        policy: &MaterialPolicy,
        config: &EngineConfig,
        structural_length_mm: f64,
    ) -> Self {
        let hardware = &config.hardware;

        let profile_skin_mm2 = config.profile.perimeter_mm() * structural_length_mm;
        let eye_strips_mm2 =
            hardware.eye_strip_count as f64 * hardware.eye_strip.surface_area_mm2();
        // Both faces of the corrugated sheet get painted.
        let sheet_mm2 = spec.width_mm
            * config.materials.corrugated_depth_mm
            * policy.corrugated_step_count() as f64
            * 2.0;

        let area: SquareMeters =
            SquareMillimeters(profile_skin_mm2 + eye_strips_mm2 + sheet_mm2).into();
        let paint = PaintEstimate {
            area_m2: area.value(),
            mass_g: area.value() * spec.paint_consumption_g_per_m2,
        };

        let composite_steps = policy.composite_step_count();
        let board_count = hardware.boards_per_step * composite_steps;
        let decking = DeckingEstimate {
            board_count,
            board_length_mm: board_count as f64 * spec.width_mm,
            color: spec.frame_color.decking_color(),
        };

        let bolts = hardware.bolts_per_board * board_count;
        let fasteners = FastenerCounts { bolts, nuts: bolts };

        Consumables {
            paint,
            decking,
            fasteners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{FrameColor, StepMaterial};

    fn spec(material: StepMaterial, step_count: u32) -> StairSpecification {
        StairSpecification {
            width_mm: 800.0,
            height_mm: 2000.0,
            step_count,
            material,
            has_platform: false,
            platform_depth_mm: 0.0,
            reinforcement_count: 1,
            paint_consumption_g_per_m2: 180.0,
            frame_color: FrameColor::Ral9005,
        }
    }

    fn derive(spec: &StairSpecification, structural_mm: f64) -> Consumables {
        let config = EngineConfig::default();
        let policy = MaterialPolicy::resolve(spec.material, spec.step_count, &config);
        Consumables::derive(spec, &policy, &config, structural_mm)
    }

    #[test]
    fn test_paint_area_composite() {
        let consumables = derive(&spec(StepMaterial::Composite, 10), 57_985.0);
        // profile skin: 80 * 57985 = 4_638_800 mm²
        // eye strips:   2 * 13_520 =    27_040 mm²
        // no sheet surface for pure composite
        let expected_m2 = (4_638_800.0 + 27_040.0) / 1_000_000.0;
        assert!((consumables.paint.area_m2 - expected_m2).abs() < 1e-9);
        assert!((consumables.paint.mass_g - expected_m2 * 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_sheet_surface_corrugated() {
        let bare = derive(&spec(StepMaterial::Composite, 10), 10_000.0);
        let sheeted = derive(&spec(StepMaterial::Corrugated, 10), 10_000.0);
        // 10 sheets, both faces: 800 * 300 * 10 * 2 = 4.8 m²
        assert!((sheeted.paint.area_m2 - bare.paint.area_m2 - 4.8).abs() < 1e-9);
    }

    #[test]
    fn test_sheet_surface_mixed_first_step_only() {
        let bare = derive(&spec(StepMaterial::Composite, 10), 10_000.0);
        let mixed = derive(&spec(StepMaterial::Mixed, 10), 10_000.0);
        // one corrugated step: 800 * 300 * 2 = 0.48 m²
        assert!((mixed.paint.area_m2 - bare.paint.area_m2 - 0.48).abs() < 1e-9);
    }

    #[test]
    fn test_boards_and_fasteners_composite() {
        let consumables = derive(&spec(StepMaterial::Composite, 10), 50_000.0);
        assert_eq!(consumables.decking.board_count, 20);
        assert_eq!(consumables.decking.board_length_mm, 16_000.0);
        assert_eq!(consumables.fasteners.bolts, 40);
        assert_eq!(consumables.fasteners.nuts, 40);
    }

    #[test]
    fn test_boards_and_fasteners_mixed() {
        let consumables = derive(&spec(StepMaterial::Mixed, 10), 50_000.0);
        // step 0 is corrugated: 9 composite steps
        assert_eq!(consumables.decking.board_count, 18);
        assert_eq!(consumables.fasteners.bolts, 36);
    }

    #[test]
    fn test_corrugated_has_no_boards() {
        let consumables = derive(&spec(StepMaterial::Corrugated, 10), 50_000.0);
        assert_eq!(consumables.decking.board_count, 0);
        assert_eq!(consumables.decking.board_length_mm, 0.0);
        assert_eq!(consumables.fasteners.bolts, 0);
        assert_eq!(consumables.fasteners.nuts, 0);
    }

    #[test]
    fn test_decking_color_resolution() {
        let mut brown = spec(StepMaterial::Composite, 10);
        brown.frame_color = FrameColor::Ral8017;
        let consumables = derive(&brown, 50_000.0);
        assert_eq!(consumables.decking.color, DeckingColor::Brown);
    }

    #[test]
    fn test_serialization() {
        let consumables = derive(&spec(StepMaterial::Mixed, 5), 30_000.0);
        let json = serde_json::to_string(&consumables).unwrap();
        let roundtrip: Consumables = serde_json::from_str(&json).unwrap();
        assert_eq!(consumables, roundtrip);
    }
}
