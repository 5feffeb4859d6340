//! Project manifest and its enum-constrained fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the finished video is meant to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentGoal {
    Entertain,
    Inform,
    Sell,
    Inspire,
    Educate,
}

impl ContentGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentGoal::Entertain => "entertain",
            ContentGoal::Inform => "inform",
            ContentGoal::Sell => "sell",
            ContentGoal::Inspire => "inspire",
            ContentGoal::Educate => "educate",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "entertain" => Some(ContentGoal::Entertain),
            "inform" => Some(ContentGoal::Inform),
            "sell" => Some(ContentGoal::Sell),
            "inspire" => Some(ContentGoal::Inspire),
            "educate" => Some(ContentGoal::Educate),
            _ => None,
        }
    }

    pub fn labels() -> &'static [&'static str] {
        &["entertain", "inform", "sell", "inspire", "educate"]
    }
}

impl fmt::Display for ContentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Distribution platform a project targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Tiktok,
    Reels,
    YoutubeShort,
    YoutubeLong,
    Instagram,
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Reels => "reels",
            Platform::YoutubeShort => "youtube_short",
            Platform::YoutubeLong => "youtube_long",
            Platform::Instagram => "instagram",
            Platform::Other => "other",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "tiktok" => Some(Platform::Tiktok),
            "reels" => Some(Platform::Reels),
            "youtube_short" => Some(Platform::YoutubeShort),
            "youtube_long" => Some(Platform::YoutubeLong),
            "instagram" => Some(Platform::Instagram),
            "other" => Some(Platform::Other),
            _ => None,
        }
    }

    pub fn labels() -> &'static [&'static str] {
        &[
            "tiktok",
            "reels",
            "youtube_short",
            "youtube_long",
            "instagram",
            "other",
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Frame aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum AspectRatio {
    /// Portrait, for shorts/reels
    #[default]
    #[serde(rename = "9:16")]
    Vertical,
    /// Landscape
    #[serde(rename = "16:9")]
    Widescreen,
    /// Square
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Vertical => "9:16",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Square => "1:1",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "9:16" => Some(AspectRatio::Vertical),
            "16:9" => Some(AspectRatio::Widescreen),
            "1:1" => Some(AspectRatio::Square),
            _ => None,
        }
    }

    pub fn labels() -> &'static [&'static str] {
        &["9:16", "16:9", "1:1"]
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much manual control the author wants over generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ControlLevel {
    #[default]
    Simple,
    Advanced,
}

impl ControlLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlLevel::Simple => "simple",
            ControlLevel::Advanced => "advanced",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(ControlLevel::Simple),
            "advanced" => Some(ControlLevel::Advanced),
            _ => None,
        }
    }

    pub fn labels() -> &'static [&'static str] {
        &["simple", "advanced"]
    }
}

impl fmt::Display for ControlLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// High-level manifest describing a narrative video project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectManifest {
    /// Unique identifier for the project
    pub project_id: String,

    /// Display title
    pub title: String,

    /// One-sentence pitch of the story
    pub logline: String,

    /// What the finished video is meant to achieve
    pub content_goal: ContentGoal,

    /// Who the video is for
    pub primary_audience: String,

    /// Platforms the final cut targets
    pub target_platforms: Vec<Platform>,

    /// Target runtime in seconds
    pub target_duration_secs: u32,

    /// Frame aspect ratio
    pub aspect_ratio: AspectRatio,

    /// Base visual style applied project-wide
    pub base_visual_style: String,

    /// How much manual control the author wants
    pub control_level: ControlLevel,

    /// The script the project was generated from
    pub original_script: String,
}
