use crate::format::{dedent, format_views};
use crate::theme::select_hook_theme;
use crate::types::VideoRecord;

/// Cap on how much of the original description is quoted back in the
/// compliance section, counted in characters.
const DESCRIPTION_EXCERPT_CHARS: usize = 250;

/// Turn one record of viral video metadata into a detailed text prompt for
/// scripting a similar-style video.
///
/// Pure and deterministic: missing fields fall back to their defaults, so
/// this never fails regardless of the input record.
pub fn build_prompt(video: &VideoRecord) -> String {
    let title = video.video_title.trim();
    let url = video.video_url.trim();
    let niche = video.niche.trim();
    let keyword = video.keyword.trim();
    let idea_angle = video.idea_angle.trim();
    let description = video.description.trim();

    let hook_theme = select_hook_theme(title, keyword);
    let tags = if video.tags.is_empty() {
        "[none provided]"
    } else {
        video.tags.as_str()
    };

    let rendered = format!(
        r#"
You are scripting a YouTube Short in the niche:
"{niche}" (keyword focus: "{keyword}").

Your job:
Recreate the *format, pacing and emotional tone* of this viral video:
- Title: {title}
- URL (for reference only, do NOT copy): {url}
- Duration: ~{duration_sec} seconds
- Views: {views} | Engagement: {engagement_rate}%
- Tags (original): {tags}
- Idea Angle: {idea_angle}

GOAL:
- Keep the *structure* and *energy* similar.
- CHANGE the story, examples, and wording completely.
- Do NOT copy or closely paraphrase the original.
- Focus on: {hook_theme}.

SCRIPT REQUIREMENTS:
1. Format:
   - Write as a script with *very short lines* suitable for subtitles.
   - Use 1–2 short sentences per beat (max ~8–10 words per line).
   - Total length should fit a {duration_sec}-second Short (approx. 40–60 words for 6–10s; 80–120 for 30–50s).

2. Structure:
   A) HOOK (0–2s):
      - Start with a scroll-stopping line directly about wealth/money:
        Example styles (adapt, don't copy):
        - "This is why most people never get rich."
        - "Poor mindset vs rich mindset in 5 seconds."
        - "Only 1% of people do this with their money."
   B) VALUE (middle):
      - 2–4 quick, punchy points or contrasts.
      - Use simple language, direct "you" framing.
      - Focus on behavior, habits, or mindset—NOT generic quotes.
   C) CTA (last 1–2s):
      - Soft call to action:
        - "Follow for daily money stories."
        - "Save this before you forget."
        - "Watch again if it hit you."

3. Style:
   - Conversational, clear, no complex jargon.
   - Make it feel like a quick reality check.
   - Stay under 5th–8th grade reading level where possible.
   - Do not mention YouTube, 'this video', or timestamps.

4. Visual Hints (in brackets):
   - Add simple visual suggestions like:
     [Text on screen: Poor vs Rich Mindset]
     [B-roll: counting cash, city skyline, notebook]
     Keep them minimal (1 every 2–3 lines max).

5. Compliance:
   - No medical, legal, or financial guarantees.
   - No get-rich-quick claims.
   - No direct copying from the original description:
     {excerpt}

OUTPUT:
- Return ONLY the final short-form script with inline visual hints.
- Do NOT include analysis or explanation.
"#,
        niche = niche,
        keyword = keyword,
        title = title,
        url = url,
        duration_sec = video.duration_sec,
        views = format_views(video.views),
        engagement_rate = video.engagement_rate,
        tags = tags,
        idea_angle = idea_angle,
        hook_theme = hook_theme,
        excerpt = description_excerpt(description),
    );

    dedent(&rendered)
}

/// First 250 characters of the description, with a literal ellipsis only
/// when something was cut off. Counts code points, not bytes, so multi-byte
/// text truncates at the same place everywhere.
fn description_excerpt(description: &str) -> String {
    let mut excerpt: String = description.chars().take(DESCRIPTION_EXCERPT_CHARS).collect();
    if description.chars().count() > DESCRIPTION_EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_defaults_record() {
        let prompt = build_prompt(&VideoRecord::default());

        assert!(!prompt.is_empty());
        assert!(prompt.contains("~15 seconds"));
        assert!(prompt.contains("Views: 0 | Engagement: 0%"));
        assert!(prompt.contains("[none provided]"));
        assert!(prompt.contains("short, punchy money-success motivation"));
    }

    #[test]
    fn test_mindset_theme_case_insensitive() {
        let video = VideoRecord {
            video_title: "MINDSET Shift".to_string(),
            ..Default::default()
        };

        let prompt = build_prompt(&video);
        assert!(prompt.contains("Focus on: rich vs poor mindset and money psychology."));
    }

    #[test]
    fn test_description_excerpt_boundaries() {
        assert_eq!(description_excerpt(""), "");

        let exact = "a".repeat(250);
        assert_eq!(description_excerpt(&exact), exact);

        let over = "a".repeat(251);
        assert_eq!(description_excerpt(&over), format!("{}...", "a".repeat(250)));
    }

    #[test]
    fn test_description_excerpt_counts_code_points() {
        let over = "€".repeat(251);
        assert_eq!(description_excerpt(&over), format!("{}...", "€".repeat(250)));
    }

    #[test]
    fn test_long_description_in_prompt() {
        let video = VideoRecord {
            description: "x".repeat(300),
            ..Default::default()
        };

        let prompt = build_prompt(&video);
        assert!(prompt.contains(&format!("{}...", "x".repeat(250))));
        assert!(!prompt.contains(&"x".repeat(251)));
    }

    #[test]
    fn test_exact_length_description_has_no_ellipsis() {
        let video = VideoRecord {
            description: "x".repeat(250),
            ..Default::default()
        };

        let prompt = build_prompt(&video);
        assert!(prompt.contains(&"x".repeat(250)));
        assert!(!prompt.contains("..."));
    }

    #[test]
    fn test_idempotent_output() {
        let video = VideoRecord {
            video_id: "abc123".to_string(),
            video_title: "Poor vs Rich Mindset".to_string(),
            niche: "Wealth & Money".to_string(),
            keyword: "mindset".to_string(),
            views: 500000,
            ..Default::default()
        };

        assert_eq!(build_prompt(&video), build_prompt(&video));
    }

    #[test]
    fn test_end_to_end_record() {
        let video = VideoRecord {
            video_id: "abc123".to_string(),
            video_title: "Poor vs Rich Mindset".to_string(),
            views: 500000,
            duration_sec: 15,
            niche: "Wealth & Money".to_string(),
            keyword: "mindset".to_string(),
            ..Default::default()
        };

        let prompt = build_prompt(&video);
        assert!(prompt.contains("Wealth & Money"));
        assert!(prompt.contains("mindset"));
        assert!(prompt.contains("500,000"));
        assert!(prompt.contains("~15 seconds"));
        assert!(prompt.contains("rich vs poor mindset and money psychology"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let video = VideoRecord {
            video_title: "  Spaced Out Title  ".to_string(),
            niche: " Wealth ".to_string(),
            ..Default::default()
        };

        let prompt = build_prompt(&video);
        assert!(prompt.contains("- Title: Spaced Out Title\n"));
        assert!(prompt.contains("\"Wealth\" (keyword focus: \"\")."));
    }
}
