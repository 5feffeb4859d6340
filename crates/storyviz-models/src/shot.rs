//! Shot type and generated shot records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Camera framing category for a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    /// Establishing shot of the full setting
    Wide,
    /// Waist-up framing, the neutral default
    #[default]
    Medium,
    /// Tight framing on a face or subject
    CloseUp,
    /// Insert shot of a small object or texture
    Detail,
}

impl ShotType {
    /// All shot types, in widest-to-tightest order.
    pub const ALL: &'static [ShotType] = &[
        ShotType::Wide,
        ShotType::Medium,
        ShotType::CloseUp,
        ShotType::Detail,
    ];

    /// Returns the wire label for this shot type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::Wide => "wide",
            ShotType::Medium => "medium",
            ShotType::CloseUp => "close_up",
            ShotType::Detail => "detail",
        }
    }

    /// Parse a wire label, returning `None` for unknown labels.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "wide" => Some(ShotType::Wide),
            "medium" => Some(ShotType::Medium),
            "close_up" => Some(ShotType::CloseUp),
            "detail" => Some(ShotType::Detail),
            _ => None,
        }
    }

    /// All accepted wire labels.
    pub fn labels() -> &'static [&'static str] {
        &["wide", "medium", "close_up", "detail"]
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShotType {
    type Err = ShotTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ShotTypeParseError(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[error("Unknown shot type: {0}")]
pub struct ShotTypeParseError(String);

/// A single generated shot within a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Shot {
    /// Stable identifier derived from the project and scene
    pub shot_id: String,

    /// Scene this shot belongs to
    pub scene_id: String,

    /// Zero-based position within the whole project shot list
    pub order: u32,

    /// Framing category assigned by the allocator
    pub shot_type: ShotType,

    /// Optional visual description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Shot {
    /// Create a new shot record.
    pub fn new(
        shot_id: impl Into<String>,
        scene_id: impl Into<String>,
        order: u32,
        shot_type: ShotType,
    ) -> Self {
        Self {
            shot_id: shot_id.into(),
            scene_id: scene_id.into(),
            order,
            shot_type,
            description: None,
        }
    }
}
