//! Shortsmith Core Library
//!
//! Core functionality for turning viral short-form video metadata into
//! script-writing prompts and packaging batch results as JSON, CSV, and
//! per-video text archives.

pub mod batch;
pub mod error;
pub mod export;
pub mod format;
pub mod prompt;
pub mod theme;
pub mod types;

// Re-export commonly used items at crate root
pub use batch::{generate_prompts, load_videos, parse_videos, prompt_video};
pub use error::{Result, ShortsmithError};
pub use export::{export_csv, export_json, export_zip};
pub use format::{dedent, format_archive_entry, format_views};
pub use prompt::build_prompt;
pub use theme::select_hook_theme;
pub use types::{PromptedVideo, VideoRecord};
