//! End-to-end StoryViz planning pipeline.
//!
//! Ties the core components together: a [`TextGenerator`] supplies raw model
//! text, `storyviz-response` turns it into a validated project, and
//! `storyviz-shots` allocates a shot list per scene. The pipeline itself
//! stays pure apart from the generator seam; how the text is produced
//! (HTTP, local model, canned fixture) is the caller's concern, as is any
//! retry after a generation or parse failure.

pub mod error;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::debug;

use storyviz_models::{Project, ProjectManifest, Scene, Shot, ShotType};
use storyviz_response::parse_project;
use storyviz_shots::{allocate, WeightTable};

pub use error::{GenerationError, PipelineError, PipelineResult};

/// Nominal seconds of footage covered by a single shot.
pub const SECONDS_PER_SHOT: f64 = 3.0;

/// Source of raw model text. The seam to whatever generative backend a host
/// application wires in.
pub trait TextGenerator {
    /// Return the model completion for the given prompt.
    fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// A fully planned project: the validated plan plus its generated shot list.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct StoryVizProject {
    /// The validated production plan
    pub project: Project,

    /// All shots across all scenes, in production order
    pub shots: Vec<Shot>,

    /// When the plan was assembled
    pub generated_at: DateTime<Utc>,
}

/// Number of shots a scene should receive, from its estimated duration.
///
/// One shot per [`SECONDS_PER_SHOT`] of footage, rounded, never less than
/// one so every scene gets at least some coverage.
pub fn shots_per_scene(scene: &Scene) -> i64 {
    let raw = scene.estimated_duration_secs / SECONDS_PER_SHOT;
    if raw.is_finite() {
        (raw.round() as i64).max(1)
    } else {
        1
    }
}

/// Generate the full shot list for a project by walking its scenes.
///
/// Each scene gets [`shots_per_scene`] shots allocated against its own
/// narrative context, with stable identifiers derived from the project and
/// scene (`{project_id}-scene-{scene_id}-shot-NNN`) and a global running
/// order, so repeated planning of the same project yields the same ids.
pub fn generate_shots_for_project(
    manifest: &ProjectManifest,
    scenes: &[Scene],
    weights: &WeightTable,
) -> PipelineResult<Vec<Shot>> {
    let mut shots: Vec<Shot> = Vec::new();

    for scene in scenes {
        let total = shots_per_scene(scene);
        let labels = allocate(weights, &scene.context(), total)?;

        for (index, label) in labels.iter().enumerate() {
            let shot_type = ShotType::from_label(label)
                .ok_or_else(|| PipelineError::UnknownShotType(label.clone()))?;
            let shot_id = format!(
                "{}-scene-{}-shot-{:03}",
                manifest.project_id,
                scene.scene_id,
                index + 1
            );
            shots.push(Shot::new(
                shot_id,
                scene.scene_id.clone(),
                shots.len() as u32,
                shot_type,
            ));
        }
    }

    debug!(
        project_id = %manifest.project_id,
        scenes = scenes.len(),
        shots = shots.len(),
        "generated shot list"
    );
    Ok(shots)
}

/// Run the generator and parse its response into a validated [`Project`].
pub fn build_project(generator: &impl TextGenerator, prompt: &str) -> PipelineResult<Project> {
    let raw = generator.complete(prompt)?;
    Ok(parse_project(&raw)?)
}

/// Execute the full pipeline: generate, parse, then allocate shots for
/// every scene.
pub fn build_storyviz_project(
    generator: &impl TextGenerator,
    prompt: &str,
    weights: &WeightTable,
) -> PipelineResult<StoryVizProject> {
    let project = build_project(generator, prompt)?;
    let shots = generate_shots_for_project(&project.manifest, &project.scenes, weights)?;
    Ok(StoryVizProject {
        project,
        shots,
        generated_at: Utc::now(),
    })
}
