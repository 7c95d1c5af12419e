/// Pick a hook theme from the title and keyword of a video.
///
/// The rules are an ordered list evaluated in sequence; the first match
/// wins. Matching is substring-based on the lower-cased inputs.
pub fn select_hook_theme(title: &str, keyword: &str) -> &'static str {
    let title = title.to_lowercase();
    let keyword = keyword.to_lowercase();

    let rules: [(bool, &'static str); 5] = [
        (
            title.contains("mindset") || keyword.contains("mindset"),
            "rich vs poor mindset and money psychology",
        ),
        (
            title.contains("habits"),
            "1% millionaire habits and daily routines",
        ),
        (
            title.contains("stock") || title.contains("trading"),
            "trading discipline, patience and long-term wealth",
        ),
        (
            title.contains("ramsey") || title.contains("buffet"),
            "celebrity money lessons in a 1-line hook",
        ),
        // "business idea" is matched against the title only
        (
            title.contains("business idea"),
            "simple visual business idea that looks premium",
        ),
    ];

    rules
        .into_iter()
        .find(|(matched, _)| *matched)
        .map(|(_, theme)| theme)
        .unwrap_or("short, punchy money-success motivation")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mindset_in_title() {
        let theme = select_hook_theme("Poor vs Rich Mindset", "");
        assert_eq!(theme, "rich vs poor mindset and money psychology");
    }

    #[test]
    fn test_mindset_in_keyword_case_insensitive() {
        let theme = select_hook_theme("Untitled", "MINDSET Shift");
        assert_eq!(theme, "rich vs poor mindset and money psychology");
    }

    #[test]
    fn test_mindset_beats_habits() {
        let theme = select_hook_theme("Mindset Habits Daily", "");
        assert_eq!(theme, "rich vs poor mindset and money psychology");
    }

    #[test]
    fn test_trading_theme() {
        let theme = select_hook_theme("Day Trading Mistakes", "");
        assert_eq!(theme, "trading discipline, patience and long-term wealth");
    }

    #[test]
    fn test_celebrity_theme() {
        let theme = select_hook_theme("Dave Ramsey on debt", "");
        assert_eq!(theme, "celebrity money lessons in a 1-line hook");
    }

    #[test]
    fn test_business_idea_ignores_keyword() {
        // Unlike the mindset rule, this one never looks at the keyword.
        let theme = select_hook_theme("Untitled", "business idea");
        assert_eq!(theme, "short, punchy money-success motivation");

        let theme = select_hook_theme("$100 Business Idea", "");
        assert_eq!(theme, "simple visual business idea that looks premium");
    }

    #[test]
    fn test_fallback_theme() {
        let theme = select_hook_theme("How to save money", "saving");
        assert_eq!(theme, "short, punchy money-success motivation");
    }
}
