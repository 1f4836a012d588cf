//! # Reinforcements
//!
//! Four independent reinforcement components, each scaled by the
//! specification's reinforcement multiplicity:
//!
//! - **front**: a vertical brace under the top step's front edge, one
//!   reduced step-frame height long;
//! - **back**: a vertical brace at the rear of the top step, running the
//!   full reduced cumulative height. Computed unconditionally, platform or
//!   not;
//! - **internal**: one fixed-length brace per inter-step gap;
//! - **depth**: a horizontal brace across every composite-covered step's
//!   usable depth. Corrugated steps are skipped entirely, and a mixed
//!   stair skips step 0.
//!
//! The skip rule is the policy's shared participation predicate - the same
//! one that gates boards and fasteners - so the rules cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::geometry::usable_depth_mm;
use crate::materials::MaterialPolicy;
use crate::spec::StairSpecification;

/// Derived reinforcement lengths (mm), each already scaled by the
/// reinforcement multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementSet {
    /// Front brace under the top step's leading edge
    pub front_mm: f64,

    /// Rear brace at the back of the top step, full reduced run height
    pub back_mm: f64,

    /// Inter-step braces, one per gap
    pub internal_mm: f64,

    /// Horizontal depth braces across composite-covered steps
    pub depth_mm: f64,
}

impl ReinforcementSet {
    /// Derive the reinforcement lengths from a validated specification and
    /// its resolved material policy.
    pub fn derive(
        spec: &StairSpecification,
        policy: &MaterialPolicy,
        config: &EngineConfig,
    ) -> Self {
        let joint = config.profile.joint_allowance_mm();
        let step_height = spec.step_height_mm();
        let last = spec.last_step_index();
        let multiplier = spec.reinforcement_count as f64;

        let top_step_height = if policy.composite_step(last) {
            step_height - policy.height_reduction_per_step_mm
        } else {
            step_height
        };
        let front_mm = (top_step_height - joint) * multiplier;

        let back_mm = (policy.reduced_cumulative_height_mm(step_height, last) - joint) * multiplier;

        let internal_mm =
            config.hardware.internal_brace_mm * (spec.step_count - 1) as f64 * multiplier;

        let depth_mm = (0..spec.step_count)
            .filter(|&index| policy.composite_step(index))
            .map(|index| (usable_depth_mm(spec, policy, index) - joint) * multiplier)
            .sum();

        ReinforcementSet {
            front_mm,
            back_mm,
            internal_mm,
            depth_mm,
        }
    }

    /// Total reinforcement length (mm)
    pub fn total_mm(&self) -> f64 {
        self.front_mm + self.back_mm + self.internal_mm + self.depth_mm
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

    fn derive(spec: &StairSpecification) -> ReinforcementSet {
        let config = EngineConfig::default();
        let policy = MaterialPolicy::resolve(spec.material, spec.step_count, &config);
        ReinforcementSet::derive(spec, &policy, &config)
    }

    #[test]
    fn test_composite_components() {
        let set = derive(&spec(StepMaterial::Composite, 10));
        // front: 200 - 25 - 40 = 135
        assert_eq!(set.front_mm, 135.0);
        // back: 2000 - 10*25 - 40 = 1710
        assert_eq!(set.back_mm, 1710.0);
        // internal: 300 * 9 = 2700
        assert_eq!(set.internal_mm, 2700.0);
        // depth: 10 * (305 - 40) = 2650
        assert_eq!(set.depth_mm, 2650.0);
        assert_eq!(set.total_mm(), 7195.0);
    }

    #[test]
    fn test_corrugated_skips_depth() {
        let set = derive(&spec(StepMaterial::Corrugated, 10));
        // front: 200 - 40 = 160, no reduction
        assert_eq!(set.front_mm, 160.0);
        // back: 2000 - 40 = 1960
        assert_eq!(set.back_mm, 1960.0);
        assert_eq!(set.internal_mm, 2700.0);
        assert_eq!(set.depth_mm, 0.0);
    }

    #[test]
    fn test_mixed_skips_first_step_depth() {
        let set = derive(&spec(StepMaterial::Mixed, 10));
        // step 0 contributes no depth brace; 9 * (305 - 40) = 2385
        assert_eq!(set.depth_mm, 2385.0);
        // back: 2000 - 9*25 - 40 = 1735
        assert_eq!(set.back_mm, 1735.0);
    }

    #[test]
    fn test_platform_depth_substitution() {
        let mut platform_spec = spec(StepMaterial::Composite, 10);
        platform_spec.has_platform = true;
        platform_spec.platform_depth_mm = 600.0;
        let set = derive(&platform_spec);
        // 9 * (305 - 40) + (600 - 40) = 2945
        assert_eq!(set.depth_mm, 2945.0);
    }

    #[test]
    fn test_single_step_has_no_internal_braces() {
        let mut single = spec(StepMaterial::Composite, 1);
        single.height_mm = 180.0;
        let set = derive(&single);
        assert_eq!(set.internal_mm, 0.0);
        // front == back for a single step: 180 - 25 - 40 = 115
        assert_eq!(set.front_mm, 115.0);
        assert_eq!(set.back_mm, 115.0);
    }

    #[test]
    fn test_multiplier_scales_every_component() {
        let mut doubled = spec(StepMaterial::Composite, 10);
        doubled.reinforcement_count = 2;
        let set = derive(&doubled);
        let single = derive(&spec(StepMaterial::Composite, 10));

        assert_eq!(set.front_mm, single.front_mm * 2.0);
        assert_eq!(set.back_mm, single.back_mm * 2.0);
        assert_eq!(set.internal_mm, single.internal_mm * 2.0);
        assert_eq!(set.depth_mm, single.depth_mm * 2.0);
    }

    #[test]
    fn test_zero_multiplier() {
        let mut unreinforced = spec(StepMaterial::Composite, 10);
        unreinforced.reinforcement_count = 0;
        let set = derive(&unreinforced);
        assert_eq!(set.total_mm(), 0.0);
    }

    #[test]
    fn test_serialization() {
        let set = derive(&spec(StepMaterial::Mixed, 5));
        let json = serde_json::to_string(&set).unwrap();
        let roundtrip: ReinforcementSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, roundtrip);
    }
}
