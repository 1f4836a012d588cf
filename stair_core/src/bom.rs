//! # Bill of Materials
//!
//! The assembly stage and the engine's single entry point. [`calculate`]
//! runs the whole linear pipeline - validate, resolve the material policy,
//! derive geometry, reinforcements, and consumables - and packs every
//! derived quantity into one immutable [`BillOfMaterials`].
//!
//! Rounding happens exactly here and nowhere else: every length is reported
//! in millimetres rounded to the nearest integer and in metres rounded to 2
//! decimals, paint area to 2 decimals, paint mass to whole grams. All
//! intermediate arithmetic upstream is full precision.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::bom::calculate;
//! use stair_core::config::EngineConfig;
//! use stair_core::materials::{FrameColor, StepMaterial};
//! use stair_core::spec::StairSpecification;
//!
//! let spec = StairSpecification {
//!     width_mm: 800.0,
//!     height_mm: 2000.0,
//!     step_count: 10,
//!     material: StepMaterial::Composite,
//!     has_platform: false,
//!     platform_depth_mm: 0.0,
//!     reinforcement_count: 1,
//!     paint_consumption_g_per_m2: 180.0,
//!     frame_color: FrameColor::Ral9005,
//! };
//!
//! let bom = calculate(&spec, &EngineConfig::default()).unwrap();
//! assert_eq!(bom.step_frames.len(), 10);
//! assert_eq!(bom.decking.board_count, 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::consumables::{Consumables, FastenerCounts};
use crate::errors::StairResult;
use crate::geometry::FrameGeometry;
use crate::materials::{DeckingColor, FrameColor, MaterialPolicy, StepMaterial};
use crate::reinforcement::ReinforcementSet;
use crate::spec::StairSpecification;
use crate::units::{round2, ReportedLength};

/// Reinforcement lengths, reported per component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementReport {
    pub front: ReportedLength,
    pub back: ReportedLength,
    pub internal: ReportedLength,
    pub depth: ReportedLength,
    pub total: ReportedLength,
}

/// Paint totals, rounded for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintReport {
    /// Paintable surface (m², 2 decimals)
    pub area_m2: f64,

    /// Paint mass (whole grams)
    pub mass_g: f64,
}

/// Composite decking totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckingReport {
    pub board_count: u32,
    pub board_length: ReportedLength,
    pub color: DeckingColor,
}

/// Echo of the dimensions and policy choices the quantities were derived
/// from, so consumers need not re-resolve anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub step_count: u32,
    pub step_height_mm: f64,
    pub step_depth_mm: f64,
    pub profile_thickness_mm: f64,
    pub material: StepMaterial,
    pub has_platform: bool,
    pub platform_depth_mm: f64,
    pub reinforcement_count: u32,
    pub height_reduction_per_step_mm: f64,
    pub board_elevation_mm: f64,
    pub frame_color: FrameColor,
}

/// The fully itemized fabrication BOM.
///
/// Created once per call and never mutated; it has no identity beyond the
/// call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    /// Ground-level base frame
    pub base_frame: ReportedLength,

    /// Per-step frame lengths, index order preserved
    pub step_frames: Vec<ReportedLength>,

    /// Sum of the per-step frame lengths
    pub steps_total: ReportedLength,

    /// Total vertical-stand length
    pub vertical_stands: ReportedLength,

    /// Reinforcement components and their total
    pub reinforcements: ReinforcementReport,

    /// Mounting-eye strip metal, fixed geometry
    pub mounting_strips: ReportedLength,

    /// Overall metal length: base + steps + stands + reinforcements +
    /// mounting strips
    pub total_length: ReportedLength,

    /// Paint totals
    pub paint: PaintReport,

    /// Composite decking totals
    pub decking: DeckingReport,

    /// Decking fasteners
    pub fasteners: FastenerCounts,

    /// Echo of resolved dimensions and policy choices
    pub dimensions: ResolvedDimensions,
}

/// Derive the complete BOM for a stair specification.
///
/// This is the engine's only interface: a pure, synchronous function of its
/// input. It fails fast with [`crate::errors::StairError::OutOfRange`]
/// before any geometry is computed; no partial result is ever produced.
pub fn calculate(
    spec: &StairSpecification,
    config: &EngineConfig,
) -> StairResult<BillOfMaterials> {
    spec.validate(config)?;

    let policy = MaterialPolicy::resolve(spec.material, spec.step_count, config);
    let geometry = FrameGeometry::derive(spec, &policy, config);
    let reinforcements = ReinforcementSet::derive(spec, &policy, config);

    let structural_mm = geometry.base_length_mm
        + geometry.steps_total_mm()
        + geometry.stands_total_mm()
        + reinforcements.total_mm();
    let consumables = Consumables::derive(spec, &policy, config, structural_mm);

    Ok(assemble(
        spec,
        &policy,
        config,
        &geometry,
        &reinforcements,
        &consumables,
        structural_mm,
    ))
}

fn assemble(
    spec: &StairSpecification,
    policy: &MaterialPolicy,
    config: &EngineConfig,
    geometry: &FrameGeometry,
    reinforcements: &ReinforcementSet,
    consumables: &Consumables,
    structural_mm: f64,
) -> BillOfMaterials {
    let strips_mm =
        config.hardware.eye_strip_count as f64 * config.hardware.eye_strip.length_mm;

    BillOfMaterials {
        base_frame: ReportedLength::from_raw_mm(geometry.base_length_mm),
        step_frames: geometry
            .step_frames
            .iter()
            .map(|frame| ReportedLength::from_raw_mm(frame.frame_length_mm))
            .collect(),
        steps_total: ReportedLength::from_raw_mm(geometry.steps_total_mm()),
        vertical_stands: ReportedLength::from_raw_mm(geometry.stands_total_mm()),
        reinforcements: ReinforcementReport {
            front: ReportedLength::from_raw_mm(reinforcements.front_mm),
            back: ReportedLength::from_raw_mm(reinforcements.back_mm),
            internal: ReportedLength::from_raw_mm(reinforcements.internal_mm),
            depth: ReportedLength::from_raw_mm(reinforcements.depth_mm),
            total: ReportedLength::from_raw_mm(reinforcements.total_mm()),
        },
        mounting_strips: ReportedLength::from_raw_mm(strips_mm),
        total_length: ReportedLength::from_raw_mm(structural_mm + strips_mm),
        paint: PaintReport {
            area_m2: round2(consumables.paint.area_m2),
            mass_g: consumables.paint.mass_g.round(),
        },
        decking: DeckingReport {
            board_count: consumables.decking.board_count,
            board_length: ReportedLength::from_raw_mm(consumables.decking.board_length_mm),
            color: consumables.decking.color,
        },
        fasteners: consumables.fasteners,
        dimensions: ResolvedDimensions {
            width_mm: spec.width_mm,
            height_mm: spec.height_mm,
            step_count: spec.step_count,
            step_height_mm: spec.step_height_mm(),
            step_depth_mm: policy.step_depth_mm,
            profile_thickness_mm: config.profile.thickness_mm,
            material: spec.material,
            has_platform: spec.has_platform,
            platform_depth_mm: spec.platform_depth_mm,
            reinforcement_count: spec.reinforcement_count,
            height_reduction_per_step_mm: policy.height_reduction_per_step_mm,
            board_elevation_mm: policy.board_elevation_mm,
            frame_color: spec.frame_color,
        },
    }
}
