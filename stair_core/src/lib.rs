//! # stair_core - Modular Stair Frame BOM Engine
//!
//! `stair_core` derives a fabrication bill of materials for a modular metal
//! stair frame from a handful of customer-supplied dimensions: linear-metal
//! lengths for every structural member, paintable area and paint mass, and
//! counts of decking boards and fasteners.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function per call, no shared mutable state
//! - **JSON-First**: all inputs, outputs, and errors are serde-serializable
//! - **Policy-Driven**: the material selection is resolved once into a
//!   policy; downstream geometry never sees the raw material tag
//! - **Injected Configuration**: all bounds and constants travel in an
//!   explicit [`config::EngineConfig`] value, never ambient state
//!
//! ## Quick Start
//!
//! ```rust
//! use stair_core::{calculate, EngineConfig, StairSpecification};
//! use stair_core::materials::{FrameColor, StepMaterial};
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
//! println!("total metal: {} mm ({} m)", bom.total_length.mm, bom.total_length.m);
//! ```
//!
//! ## Modules
//!
//! - [`spec`] - the customer-supplied stair specification and its validation
//! - [`materials`] - step materials, policy resolution, color palette
//! - [`geometry`] - base frame, per-step frames, vertical stands
//! - [`reinforcement`] - front/back/internal/depth reinforcements
//! - [`consumables`] - paint, decking boards, fasteners
//! - [`bom`] - result assembly and the [`calculate`] entry point
//! - [`config`] - injected bounds and constants
//! - [`units`] - metric newtypes and dual-unit reporting
//! - [`errors`] - structured error types

pub mod bom;
pub mod config;
pub mod consumables;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod reinforcement;
pub mod spec;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use bom::{calculate, BillOfMaterials};
pub use config::EngineConfig;
pub use errors::{StairError, StairResult};
pub use spec::StairSpecification;
