//! Fully validated project representation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::ProjectManifest;
use crate::scene::Scene;

/// A complete, internally consistent production plan.
///
/// Values of this type are only built after full schema validation (see the
/// `storyviz-response` crate) or by code that already holds typed fields, so
/// holding a `Project` means every required field is present and every enum
/// field is within its declared set. Updates produce a new value; the scenes
/// list is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Project {
    /// Project-wide metadata and constraints
    pub manifest: ProjectManifest,

    /// Ordered scenes, non-empty
    pub scenes: Vec<Scene>,
}

impl Project {
    /// Total estimated runtime across all scenes, in seconds.
    pub fn estimated_duration_secs(&self) -> f64 {
        self.scenes.iter().map(|s| s.estimated_duration_secs).sum()
    }

    /// Look up a scene by its ID.
    pub fn scene(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.scene_id == scene_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{AspectRatio, ContentGoal, ControlLevel, Platform};
    use crate::scene::{ActionType, NarrativeWeight};
    use crate::shot::ShotType;

    fn sample_project() -> Project {
        Project {
            manifest: ProjectManifest {
                project_id: "p-1".to_string(),
                title: "The Lighthouse".to_string(),
                logline: "A keeper faces the storm of his life".to_string(),
                content_goal: ContentGoal::Entertain,
                primary_audience: "drama fans".to_string(),
                target_platforms: vec![Platform::Tiktok, Platform::Reels],
                target_duration_secs: 60,
                aspect_ratio: AspectRatio::Vertical,
                base_visual_style: "stormy realism".to_string(),
                control_level: ControlLevel::Simple,
                original_script: "A lighthouse keeper...".to_string(),
            },
            scenes: vec![
                Scene {
                    scene_id: "sc-1".to_string(),
                    order: 1,
                    narrative_weight: NarrativeWeight::Low,
                    description: "Dawn over the cliffs".to_string(),
                    emotional_goal: "calm".to_string(),
                    estimated_duration_secs: 12.0,
                    visual_style: "cold blues".to_string(),
                    dominant_shot_type: ShotType::Wide,
                    action_type: ActionType::Transition,
                },
                Scene {
                    scene_id: "sc-2".to_string(),
                    order: 2,
                    narrative_weight: NarrativeWeight::Climax,
                    description: "The lamp fails mid-storm".to_string(),
                    emotional_goal: "panic".to_string(),
                    estimated_duration_secs: 18.0,
                    visual_style: "hard shadows".to_string(),
                    dominant_shot_type: ShotType::CloseUp,
                    action_type: ActionType::CameraAction,
                },
            ],
        }
    }

    #[test]
    fn test_estimated_duration_sums_scenes() {
        assert_eq!(sample_project().estimated_duration_secs(), 30.0);
    }

    #[test]
    fn test_scene_lookup() {
        let project = sample_project();
        assert!(project.scene("sc-2").is_some());
        assert!(project.scene("sc-9").is_none());
    }

    #[test]
    fn test_project_json_round_trip() {
        let project = sample_project();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
