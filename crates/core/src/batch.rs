use std::path::Path;

use tokio::fs;

use crate::{
    error::{Result, ShortsmithError},
    prompt::build_prompt,
    types::{PromptedVideo, VideoRecord},
};

/// Decode a JSON array payload of video records.
///
/// A malformed payload is rejected as `InvalidInput` before any record is
/// processed; there is no partial decode.
pub fn parse_videos(payload: &str) -> Result<Vec<VideoRecord>> {
    serde_json::from_str(payload).map_err(ShortsmithError::InvalidInput)
}

/// Read a JSON file of video records
pub async fn load_videos(path: &Path) -> Result<Vec<VideoRecord>> {
    let payload = fs::read_to_string(path).await?;
    parse_videos(&payload)
}

/// Build one enriched output row from a record
pub fn prompt_video(video: &VideoRecord) -> PromptedVideo {
    PromptedVideo {
        video_id: video.video_id.clone(),
        video_title: video.video_title.clone(),
        views: video.views,
        duration_sec: video.duration_sec,
        niche: video.niche.clone(),
        keyword: video.keyword.clone(),
        generated_prompt: build_prompt(video),
    }
}

/// Build a prompt for every record, preserving input order. Records are
/// independent, so this cannot fail and carries no state between calls.
pub fn generate_prompts(videos: &[VideoRecord]) -> Vec<PromptedVideo> {
    videos.iter().map(prompt_video).collect()
}
