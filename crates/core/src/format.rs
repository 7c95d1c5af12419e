use crate::types::PromptedVideo;

/// Format a count with thousands separators (500000 -> "500,000")
pub fn format_views(views: u64) -> String {
    let digits = views.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Strip the common leading indentation of all non-empty lines and trim
/// surrounding blank lines. Whitespace-only lines pass through unchanged
/// and do not count towards the common prefix.
pub fn dedent(text: &str) -> String {
    let prefix = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let stripped = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line
            } else {
                &line[prefix..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    stripped.trim().to_string()
}

/// Content of one per-video archive text file: a fixed header block, a
/// separator line, then the generated prompt.
pub fn format_archive_entry(prompt: &PromptedVideo) -> String {
    format!(
        "VIDEO: {title}\n\
         VIDEO ID: {id}\n\
         VIEWS: {views}\n\
         DURATION: {duration} seconds\n\
         NICHE: {niche}\n\
         KEYWORD: {keyword}\n\
         {separator}\n\
         \n\
         {text}\n",
        title = prompt.video_title,
        id = prompt.video_id,
        views = format_views(prompt.views),
        duration = prompt.duration_sec,
        niche = prompt.niche,
        keyword = prompt.keyword,
        separator = "=".repeat(80),
        text = prompt.generated_prompt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1000), "1,000");
        assert_eq!(format_views(500000), "500,000");
        assert_eq!(format_views(1027602), "1,027,602");
    }

    #[test]
    fn test_dedent_strips_common_prefix() {
        let text = "\n    first line\n      nested line\n    last line\n";
        assert_eq!(dedent(text), "first line\n  nested line\nlast line");
    }

    #[test]
    fn test_dedent_flush_left_is_untouched() {
        let text = "first\n  second";
        assert_eq!(dedent(text), "first\n  second");
    }

    #[test]
    fn test_archive_entry_layout() {
        let prompt = PromptedVideo {
            video_id: "abc123".to_string(),
            video_title: "Poor vs Rich Mindset".to_string(),
            views: 500000,
            duration_sec: 15,
            niche: "Wealth & Money".to_string(),
            keyword: "mindset".to_string(),
            generated_prompt: "PROMPT BODY".to_string(),
        };

        let entry = format_archive_entry(&prompt);
        assert!(entry.starts_with("VIDEO: Poor vs Rich Mindset\n"));
        assert!(entry.contains("VIEWS: 500,000\n"));
        assert!(entry.contains("DURATION: 15 seconds\n"));
        assert!(entry.contains(&format!("{}\n\nPROMPT BODY\n", "=".repeat(80))));
    }
}
