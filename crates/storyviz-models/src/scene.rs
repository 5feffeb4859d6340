//! Scene models and allocation context.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shot::ShotType;

/// How pivotal a scene is to the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeWeight {
    /// Transition or connective tissue
    Low,
    /// Ordinary story beat
    Medium,
    /// Important turning point
    High,
    /// The emotional peak of the story
    Climax,
}

impl NarrativeWeight {
    /// Returns the wire label for this weight.
    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeWeight::Low => "low",
            NarrativeWeight::Medium => "medium",
            NarrativeWeight::High => "high",
            NarrativeWeight::Climax => "climax",
        }
    }

    /// Parse a wire label, returning `None` for unknown labels.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "low" => Some(NarrativeWeight::Low),
            "medium" => Some(NarrativeWeight::Medium),
            "high" => Some(NarrativeWeight::High),
            "climax" => Some(NarrativeWeight::Climax),
            _ => None,
        }
    }

    /// All accepted wire labels.
    pub fn labels() -> &'static [&'static str] {
        &["low", "medium", "high", "climax"]
    }

    /// Scalar position of this weight on the [0, 1] pivotal axis.
    ///
    /// `Low` falls in the allocator's establishing band (<= 0.33) and
    /// `High`/`Climax` in its tight-framing band (>= 0.66).
    pub fn as_scalar(&self) -> f64 {
        match self {
            NarrativeWeight::Low => 0.2,
            NarrativeWeight::Medium => 0.5,
            NarrativeWeight::High => 0.75,
            NarrativeWeight::Climax => 1.0,
        }
    }
}

impl fmt::Display for NarrativeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of on-screen action a scene is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Dialogue,
    Monologue,
    CameraAction,
    Transition,
}

impl ActionType {
    /// Returns the wire label for this action type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Dialogue => "dialogue",
            ActionType::Monologue => "monologue",
            ActionType::CameraAction => "camera_action",
            ActionType::Transition => "transition",
        }
    }

    /// Parse a wire label, returning `None` for unknown labels.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "dialogue" => Some(ActionType::Dialogue),
            "monologue" => Some(ActionType::Monologue),
            "camera_action" => Some(ActionType::CameraAction),
            "transition" => Some(ActionType::Transition),
            _ => None,
        }
    }

    /// All accepted wire labels.
    pub fn labels() -> &'static [&'static str] {
        &["dialogue", "monologue", "camera_action", "transition"]
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scene within a project, with narrative and production metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    /// Unique ID within the project
    pub scene_id: String,

    /// Position in the story (1-indexed)
    pub order: u32,

    /// How pivotal this scene is
    pub narrative_weight: NarrativeWeight,

    /// What happens in the scene
    pub description: String,

    /// Emotional effect the scene should land
    pub emotional_goal: String,

    /// Estimated runtime in seconds
    pub estimated_duration_secs: f64,

    /// Visual style target for rendering
    pub visual_style: String,

    /// Framing that should dominate the scene
    pub dominant_shot_type: ShotType,

    /// Kind of action driving the scene
    pub action_type: ActionType,
}

impl Scene {
    /// Build the allocation context for this scene.
    pub fn context(&self) -> SceneContext {
        SceneContext {
            action_type: self.action_type,
            narrative_weight: self.narrative_weight.as_scalar(),
            description: Some(self.description.clone()),
        }
    }
}

/// Read-only input to shot allocation, derived from a scene or supplied
/// directly by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneContext {
    /// Kind of action driving the scene
    pub action_type: ActionType,

    /// Scalar in [0, 1]; 0 = minor/transition, 1 = climax-level
    pub narrative_weight: f64,

    /// Optional scene description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SceneContext {
    /// Create a context with the given action type and narrative weight.
    pub fn new(action_type: ActionType, narrative_weight: f64) -> Self {
        Self {
            action_type,
            narrative_weight,
            description: None,
        }
    }
}
