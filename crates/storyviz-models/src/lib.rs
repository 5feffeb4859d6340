//! Shared data models for the StoryViz planning core.
//!
//! This crate provides Serde-serializable types for:
//! - Project manifests and their enum-constrained fields
//! - Scenes with narrative metadata
//! - Shot types and generated shot records
//!
//! The older prototypes carried several incompatible `ProjectFull`/`SceneV3`/
//! `ShotV3` shapes; this crate is the single canonical schema used by both
//! the shot allocator and the response parser.

pub mod manifest;
pub mod project;
pub mod scene;
pub mod shot;

// Re-export common types
pub use manifest::{AspectRatio, ContentGoal, ControlLevel, Platform, ProjectManifest};
pub use project::Project;
pub use scene::{ActionType, NarrativeWeight, Scene, SceneContext};
pub use shot::{Shot, ShotType};
