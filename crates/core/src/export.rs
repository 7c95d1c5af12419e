use std::io::{Cursor, Write};

use zip::{CompressionMethod, ZipWriter, write::FileOptions};

use crate::{error::Result, format::format_archive_entry, types::PromptedVideo};

const CSV_HEADER: &str = "Video ID,Video Title,Views,Duration (sec),Niche,Keyword,Generated Prompt";

/// Pretty-printed JSON array with the fixed field order
pub fn export_json(prompts: &[PromptedVideo]) -> Result<String> {
    Ok(serde_json::to_string_pretty(prompts)?)
}

/// Header row plus one row per record, same column order as the JSON export
pub fn export_csv(prompts: &[PromptedVideo]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for prompt in prompts {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            csv_field(&prompt.video_id),
            csv_field(&prompt.video_title),
            prompt.views,
            prompt.duration_sec,
            csv_field(&prompt.niche),
            csv_field(&prompt.keyword),
            csv_field(&prompt.generated_prompt),
        ));
    }
    out
}

/// Quote a field when it contains a comma, quote, or newline, doubling any
/// embedded quotes
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Deflate-compressed archive with one plain-text file per record.
///
/// Filenames use the record's 1-based position, so they stay unique across
/// the batch even when video IDs repeat.
pub fn export_zip(prompts: &[PromptedVideo]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut writer = ZipWriter::new(Cursor::new(&mut buffer));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (idx, prompt) in prompts.iter().enumerate() {
        writer.start_file(format!("prompt_{}_{}.txt", idx + 1, prompt.video_id), options)?;
        writer.write_all(format_archive_entry(prompt).as_bytes())?;
    }
    writer.finish()?;
    drop(writer);

    Ok(buffer)
}
