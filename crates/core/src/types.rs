use serde::{Deserialize, Serialize};

fn default_duration() -> u64 {
    15
}

/// One video's metadata as it arrives in the input payload. Every field is
/// optional; unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "Video ID", default)]
    pub video_id: String,

    #[serde(rename = "Video Title", default)]
    pub video_title: String,

    #[serde(rename = "Video URL", default)]
    pub video_url: String,

    #[serde(rename = "Niche", default)]
    pub niche: String,

    #[serde(rename = "Keyword", default)]
    pub keyword: String,

    #[serde(rename = "Idea Angle", default)]
    pub idea_angle: String,

    #[serde(rename = "Duration (sec)", default = "default_duration")]
    pub duration_sec: u64,

    #[serde(rename = "Tags", default)]
    pub tags: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    #[serde(rename = "Views", default)]
    pub views: u64,

    #[serde(rename = "Engagement Rate (%)", default)]
    pub engagement_rate: f64,
}

impl Default for VideoRecord {
    fn default() -> Self {
        Self {
            video_id: String::new(),
            video_title: String::new(),
            video_url: String::new(),
            niche: String::new(),
            keyword: String::new(),
            idea_angle: String::new(),
            duration_sec: default_duration(),
            tags: String::new(),
            description: String::new(),
            views: 0,
            engagement_rate: 0.0,
        }
    }
}

/// One enriched output row: the record's display fields plus the generated
/// prompt. Declaration order is the serialized field order and the CSV
/// column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptedVideo {
    #[serde(rename = "Video ID")]
    pub video_id: String,

    #[serde(rename = "Video Title")]
    pub video_title: String,

    #[serde(rename = "Views")]
    pub views: u64,

    #[serde(rename = "Duration (sec)")]
    pub duration_sec: u64,

    #[serde(rename = "Niche")]
    pub niche: String,

    #[serde(rename = "Keyword")]
    pub keyword: String,

    #[serde(rename = "Generated Prompt")]
    pub generated_prompt: String,
}
