//! Field-by-field schema validation of decoded payloads.

use serde_json::{Map, Value};
use tracing::debug;

use storyviz_models::{
    ActionType, AspectRatio, ContentGoal, ControlLevel, NarrativeWeight, Platform, Project,
    ProjectManifest, Scene, ShotType,
};

use crate::error::{ParseError, ParseResult};
use crate::extract::extract_payload;

/// Parse raw backend text into a fully validated [`Project`].
///
/// Pipeline: fence extraction, JSON decode, top-level shape check, then a
/// walk over every required manifest and scene field. The first violation
/// wins and nothing is constructed until everything passes. Unknown extra
/// fields are ignored so newer backends can add fields without breaking us.
pub fn parse_project(raw_text: &str) -> ParseResult<Project> {
    let payload = extract_payload(raw_text);
    let value: Value =
        serde_json::from_str(payload).map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    let root = match &value {
        Value::Object(map) => map,
        other => {
            return Err(ParseError::UnexpectedShape {
                actual: json_type(other),
            })
        }
    };

    let manifest = validate_manifest(root)?;
    let scenes = validate_scenes(root)?;

    debug!(
        project_id = %manifest.project_id,
        scenes = scenes.len(),
        "parsed project from backend response"
    );
    Ok(Project { manifest, scenes })
}

fn validate_manifest(root: &Map<String, Value>) -> ParseResult<ProjectManifest> {
    let obj = object_field(root, "", "manifest")?;

    Ok(ProjectManifest {
        project_id: str_field(obj, "manifest", "project_id")?,
        title: str_field(obj, "manifest", "title")?,
        logline: str_field(obj, "manifest", "logline")?,
        content_goal: enum_field(
            obj,
            "manifest",
            "content_goal",
            ContentGoal::from_label,
            ContentGoal::labels(),
        )?,
        primary_audience: str_field(obj, "manifest", "primary_audience")?,
        target_platforms: platforms_field(obj)?,
        target_duration_secs: u32_field(obj, "manifest", "target_duration_secs")?,
        aspect_ratio: enum_field(
            obj,
            "manifest",
            "aspect_ratio",
            AspectRatio::from_label,
            AspectRatio::labels(),
        )?,
        base_visual_style: str_field(obj, "manifest", "base_visual_style")?,
        control_level: enum_field(
            obj,
            "manifest",
            "control_level",
            ControlLevel::from_label,
            ControlLevel::labels(),
        )?,
        original_script: str_field(obj, "manifest", "original_script")?,
    })
}

fn validate_scenes(root: &Map<String, Value>) -> ParseResult<Vec<Scene>> {
    let expected = "non-empty array of scene objects";
    let items = match root.get("scenes") {
        None => return Err(ParseError::violation("scenes", expected, "missing field")),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(ParseError::violation("scenes", expected, json_type(other))),
    };
    if items.is_empty() {
        return Err(ParseError::violation("scenes", expected, "empty array"));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_scene(index, item))
        .collect()
}

fn validate_scene(index: usize, value: &Value) -> ParseResult<Scene> {
    let path = format!("scenes[{}]", index);
    let obj = match value {
        Value::Object(map) => map,
        other => return Err(ParseError::violation(path, "object", json_type(other))),
    };

    Ok(Scene {
        scene_id: str_field(obj, &path, "scene_id")?,
        order: u32_field(obj, &path, "order")?,
        narrative_weight: enum_field(
            obj,
            &path,
            "narrative_weight",
            NarrativeWeight::from_label,
            NarrativeWeight::labels(),
        )?,
        description: str_field(obj, &path, "description")?,
        emotional_goal: str_field(obj, &path, "emotional_goal")?,
        estimated_duration_secs: f64_field(obj, &path, "estimated_duration_secs")?,
        visual_style: str_field(obj, &path, "visual_style")?,
        dominant_shot_type: enum_field(
            obj,
            &path,
            "dominant_shot_type",
            ShotType::from_label,
            ShotType::labels(),
        )?,
        action_type: enum_field(
            obj,
            &path,
            "action_type",
            ActionType::from_label,
            ActionType::labels(),
        )?,
    })
}

fn platforms_field(obj: &Map<String, Value>) -> ParseResult<Vec<Platform>> {
    let path = "manifest.target_platforms";
    let items = match obj.get("target_platforms") {
        None => {
            return Err(ParseError::violation(
                path,
                "array of platform labels",
                "missing field",
            ))
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ParseError::violation(
                path,
                "array of platform labels",
                json_type(other),
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item_path = format!("{}[{}]", path, i);
            match item {
                Value::String(s) => Platform::from_label(s).ok_or_else(|| {
                    ParseError::violation(
                        item_path,
                        one_of(Platform::labels()),
                        format!("\"{}\"", s),
                    )
                }),
                other => Err(ParseError::violation(
                    item_path,
                    one_of(Platform::labels()),
                    json_type(other),
                )),
            }
        })
        .collect()
}

fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn one_of(labels: &[&str]) -> String {
    format!("one of [{}]", labels.join(", "))
}

/// Human-readable JSON type name for error messages.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn object_field<'a>(
    obj: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> ParseResult<&'a Map<String, Value>> {
    let path = field_path(parent, key);
    match obj.get(key) {
        None => Err(ParseError::violation(path, "object", "missing field")),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(ParseError::violation(path, "object", json_type(other))),
    }
}

fn str_field(obj: &Map<String, Value>, parent: &str, key: &str) -> ParseResult<String> {
    let path = field_path(parent, key);
    match obj.get(key) {
        None => Err(ParseError::violation(path, "string", "missing field")),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ParseError::violation(path, "string", json_type(other))),
    }
}

fn u32_field(obj: &Map<String, Value>, parent: &str, key: &str) -> ParseResult<u32> {
    let path = field_path(parent, key);
    let expected = "non-negative integer";
    match obj.get(key) {
        None => Err(ParseError::violation(path, expected, "missing field")),
        Some(Value::Number(n)) => match n.as_u64().and_then(|v| u32::try_from(v).ok()) {
            Some(v) => Ok(v),
            None => Err(ParseError::violation(
                path,
                expected,
                format!("out-of-range number {}", n),
            )),
        },
        Some(other) => Err(ParseError::violation(path, expected, json_type(other))),
    }
}

fn f64_field(obj: &Map<String, Value>, parent: &str, key: &str) -> ParseResult<f64> {
    let path = field_path(parent, key);
    match obj.get(key) {
        None => Err(ParseError::violation(path, "number", "missing field")),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ParseError::violation(path, "number", format!("unrepresentable {}", n))),
        Some(other) => Err(ParseError::violation(path, "number", json_type(other))),
    }
}

fn enum_field<T>(
    obj: &Map<String, Value>,
    parent: &str,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
    labels: &[&str],
) -> ParseResult<T> {
    let path = field_path(parent, key);
    match obj.get(key) {
        None => Err(ParseError::violation(path, one_of(labels), "missing field")),
        Some(Value::String(s)) => {
            parse(s).ok_or_else(|| ParseError::violation(path, one_of(labels), format!("\"{}\"", s)))
        }
        Some(other) => Err(ParseError::violation(path, one_of(labels), json_type(other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "manifest": {
                "project_id": "p-42",
                "title": "The Lighthouse",
                "logline": "A keeper faces the storm of his life",
                "content_goal": "entertain",
                "primary_audience": "drama fans",
                "target_platforms": ["tiktok", "youtube_short"],
                "target_duration_secs": 60,
                "aspect_ratio": "9:16",
                "base_visual_style": "stormy realism",
                "control_level": "simple",
                "original_script": "A lighthouse keeper..."
            },
            "scenes": [
                {
                    "scene_id": "sc-1",
                    "order": 1,
                    "narrative_weight": "low",
                    "description": "Dawn over the cliffs",
                    "emotional_goal": "calm",
                    "estimated_duration_secs": 12.0,
                    "visual_style": "cold blues",
                    "dominant_shot_type": "wide",
                    "action_type": "transition"
                },
                {
                    "scene_id": "sc-2",
                    "order": 2,
                    "narrative_weight": "climax",
                    "description": "The lamp fails mid-storm",
                    "emotional_goal": "panic",
                    "estimated_duration_secs": 18.5,
                    "visual_style": "hard shadows",
                    "dominant_shot_type": "close_up",
                    "action_type": "camera_action"
                }
            ]
        })
    }

    #[test]
    fn test_parses_valid_payload() {
        let project = parse_project(&sample_payload().to_string()).unwrap();
        assert_eq!(project.manifest.project_id, "p-42");
        assert_eq!(project.manifest.content_goal, ContentGoal::Entertain);
        assert_eq!(project.scenes.len(), 2);
        assert_eq!(project.scenes[1].narrative_weight, NarrativeWeight::Climax);
        assert_eq!(project.scenes[1].estimated_duration_secs, 18.5);
    }

    #[test]
    fn test_parses_fenced_payload_with_prose() {
        let raw = format!(
            "Sure! Here is the production plan:\n```json\n{}\n```\nHope this helps.",
            sample_payload()
        );
        let project = parse_project(&raw).unwrap();
        assert_eq!(project.scenes.len(), 2);
    }

    #[test]
    fn test_malformed_json_carries_diagnostic() {
        let err = parse_project("{\"manifest\": ").unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson(_)));
    }

    #[test]
    fn test_non_object_top_level_is_unexpected_shape() {
        let err = parse_project("[1, 2, 3]").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedShape { actual: "array" });

        let err = parse_project("\"just a string\"").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedShape { actual: "string" });
    }

    #[test]
    fn test_missing_manifest_title_names_path() {
        let mut payload = sample_payload();
        payload["manifest"].as_object_mut().unwrap().remove("title");
        let err = parse_project(&payload.to_string()).unwrap_err();
        assert_eq!(err.field_path(), Some("manifest.title"));
    }

    #[test]
    fn test_mistyped_scene_order_names_path() {
        let mut payload = sample_payload();
        payload["scenes"][1]["order"] = json!("second");
        let err = parse_project(&payload.to_string()).unwrap_err();
        assert_eq!(err.field_path(), Some("scenes[1].order"));
    }

    #[test]
    fn test_enum_out_of_set_reports_expected_labels() {
        let mut payload = sample_payload();
        payload["scenes"][0]["narrative_weight"] = json!("epic");
        let err = parse_project(&payload.to_string()).unwrap_err();
        match err {
            ParseError::SchemaViolation {
                path,
                expected,
                actual,
            } => {
                assert_eq!(path, "scenes[0].narrative_weight");
                assert!(expected.contains("climax"));
                assert_eq!(actual, "\"epic\"");
            }
            other => panic!("expected schema violation, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_platform_label_names_index() {
        let mut payload = sample_payload();
        payload["manifest"]["target_platforms"][1] = json!("vimeo");
        let err = parse_project(&payload.to_string()).unwrap_err();
        assert_eq!(err.field_path(), Some("manifest.target_platforms[1]"));
    }

    #[test]
    fn test_empty_scenes_rejected() {
        let mut payload = sample_payload();
        payload["scenes"] = json!([]);
        let err = parse_project(&payload.to_string()).unwrap_err();
        match err {
            ParseError::SchemaViolation { path, actual, .. } => {
                assert_eq!(path, "scenes");
                assert_eq!(actual, "empty array");
            }
            other => panic!("expected schema violation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut payload = sample_payload();
        payload["vendor_extension"] = json!({"anything": true});
        payload["manifest"]["experimental_flag"] = json!(42);
        payload["scenes"][0]["director_notes"] = json!("handheld");
        assert!(parse_project(&payload.to_string()).is_ok());
    }

    #[test]
    fn test_round_trip_of_valid_project() {
        let project = parse_project(&sample_payload().to_string()).unwrap();
        let serialized = serde_json::to_string(&project).unwrap();
        let reparsed = parse_project(&serialized).unwrap();
        assert_eq!(reparsed, project);
    }

    #[test]
    fn test_negative_duration_secs_rejected() {
        let mut payload = sample_payload();
        payload["manifest"]["target_duration_secs"] = json!(-10);
        let err = parse_project(&payload.to_string()).unwrap_err();
        assert_eq!(err.field_path(), Some("manifest.target_duration_secs"));
    }
}
