/// Stem used when no usable bot name is available.
pub const DEFAULT_SLUG: &str = "bot";

/// Converts a display name into a filesystem-safe file stem.
///
/// The name is lower-cased and trimmed, runs of whitespace become a single
/// underscore, and every character outside `[a-z0-9_.-]` is dropped. A name
/// that reduces to nothing yields [`DEFAULT_SLUG`].
///
/// # Arguments
/// - `name` - Raw display name
///
/// # Returns
/// - `String` - Slug containing only ASCII alphanumerics, `_`, `.` and `-`
pub fn safe_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let slug: String = lowered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

/// Picks the first non-blank name among the candidates and returns `<slug>.json`.
///
/// # Arguments
/// - `candidates` - Names in order of preference (display name, then username)
pub fn snapshot_file_name<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let name = candidates
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_SLUG);

    format!("{}.json", safe_slug(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_with_symbols() {
        assert_eq!(safe_slug("My Cool Bot!"), "my_cool_bot");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(safe_slug("  Tank \t  Moon\nman  "), "tank_moon_man");
    }

    #[test]
    fn test_keeps_period_and_hyphen() {
        assert_eq!(safe_slug("Timer-Board v2.1"), "timer-board_v2.1");
    }

    #[test]
    fn test_strips_non_ascii() {
        let slug = safe_slug("Bötçhen ✨ Bot");
        assert_eq!(slug, "bthen__bot");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')));
    }

    #[test]
    fn test_symbols_only_falls_back() {
        assert_eq!(safe_slug("!!! ???"), "_");
        assert_eq!(safe_slug("!!!"), DEFAULT_SLUG);
    }

    #[test]
    fn test_file_name_prefers_display_name() {
        assert_eq!(
            snapshot_file_name([Some("My Cool Bot!"), Some("coolbot")]),
            "my_cool_bot.json"
        );
    }

    #[test]
    fn test_file_name_falls_back_to_username() {
        assert_eq!(snapshot_file_name([Some("  "), Some("CoolBot")]), "coolbot.json");
        assert_eq!(snapshot_file_name([None, Some("CoolBot")]), "coolbot.json");
    }

    #[test]
    fn test_file_name_defaults_to_bot() {
        assert_eq!(snapshot_file_name([None, None]), "bot.json");
    }
}
