//! # Frame Geometry
//!
//! Derives the linear-metal lengths of the structural frame: the base frame
//! resting on the ground, one welded rectangular frame per step, and the
//! vertical stands carrying each step at its cumulative height.
//!
//! Every member length is an interior (usable) length: the profile thickness
//! is subtracted twice per joint, once for each connection overlap. The last
//! step substitutes the landing-platform depth when a platform is present;
//! every other step uses the material policy's step depth.
//!
//! All arithmetic here is full precision - rounding happens only at
//! assembly.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::materials::MaterialPolicy;
use crate::spec::StairSpecification;

/// One welded step frame.
///
/// Ordered by index; index 0 is the bottom step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepFrame {
    pub index: u32,

    /// Depth available for framing this step (mm); platform depth on the
    /// last step when a platform is present
    pub usable_depth_mm: f64,

    /// Perimeter length of the welded frame (mm)
    pub frame_length_mm: f64,
}

/// Vertical stands for one step.
///
/// Intermediate steps rest their rear edge on the next step's frame and
/// need front posts only; the topmost step is also the working platform
/// edge and carries posts front and back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalStand {
    pub index: u32,

    /// Height of one stand for this step (mm)
    pub stand_height_mm: f64,

    /// Number of stands at this step: 4 for the topmost step, 2 otherwise
    pub stand_count: u32,
}

/// Derived frame geometry for a validated specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Length of the ground-level base frame (mm)
    pub base_length_mm: f64,

    /// Per-step frames, index order preserved
    pub step_frames: Vec<StepFrame>,

    /// Per-step vertical stands, index order preserved
    pub stands: Vec<VerticalStand>,
}

impl FrameGeometry {
    /// Derive the frame geometry from a validated specification and its
    /// resolved material policy.
    pub fn derive(
        spec: &StairSpecification,
        policy: &MaterialPolicy,
        config: &EngineConfig,
    ) -> Self {
        let joint = config.profile.joint_allowance_mm();
        let step_height = spec.step_height_mm();

        let base_length_mm = 2.0 * spec.width_mm
            + 2.0 * policy.step_depth_mm * spec.step_count as f64
            - 2.0 * joint;

        let step_frames = (0..spec.step_count)
            .map(|index| {
                let usable_depth_mm = usable_depth_mm(spec, policy, index);
                StepFrame {
                    index,
                    usable_depth_mm,
                    frame_length_mm: 2.0 * spec.width_mm + 2.0 * usable_depth_mm - 2.0 * joint,
                }
            })
            .collect();

        let stands = (0..spec.step_count)
            .map(|index| VerticalStand {
                index,
                stand_height_mm: policy.reduced_cumulative_height_mm(step_height, index) - joint,
                stand_count: if index == spec.last_step_index() { 4 } else { 2 },
            })
            .collect();

        FrameGeometry {
            base_length_mm,
            step_frames,
            stands,
        }
    }

    /// Sum of all per-step frame lengths (mm)
    pub fn steps_total_mm(&self) -> f64 {
        self.step_frames.iter().map(|frame| frame.frame_length_mm).sum()
    }

    /// Total vertical-stand length across all steps (mm)
    pub fn stands_total_mm(&self) -> f64 {
        self.stands
            .iter()
            .map(|stand| stand.stand_height_mm * stand.stand_count as f64)
            .sum()
    }
}

/// Depth available for framing the step at `index` (mm).
///
/// The landing platform, when present, replaces the regular step depth on
/// the topmost step only.
pub fn usable_depth_mm(spec: &StairSpecification, policy: &MaterialPolicy, index: u32) -> f64 {
    if spec.has_platform && index == spec.last_step_index() {
        spec.platform_depth_mm
    } else {
        policy.step_depth_mm
    }
}
