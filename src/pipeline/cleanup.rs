//! Cosmetic cleanup of a filtered error message.

use regex::Regex;
use std::sync::OnceLock;

struct CleanupPatterns {
    empty_quotes: Regex,
    extra_spaces: Regex,
    orphan_dot: Regex,
    leading_dash: Regex,
}

/// Patterns are fixed, so compile them once for the process.
fn patterns() -> &'static CleanupPatterns {
    static PATTERNS: OnceLock<CleanupPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| CleanupPatterns {
        empty_quotes: Regex::new(r#"''|"""#).unwrap(),
        extra_spaces: Regex::new(r"\s\s+").unwrap(),
        orphan_dot: Regex::new(r"\s\.(\s|$)").unwrap(),
        leading_dash: Regex::new(r"^\s*-").unwrap(),
    })
}

/// Tidy up the holes left by variable removal: emptied quote pairs, doubled
/// spaces, a stranded ` .`, a leading dash. Runs passes until the text stops
/// changing, which makes the whole step idempotent.
pub fn cleanup(message: &str) -> String {
    let patterns = patterns();
    let mut current = message.to_string();
    loop {
        let mut next = patterns.empty_quotes.replace_all(&current, "").into_owned();
        next = patterns.extra_spaces.replace_all(&next, " ").into_owned();
        next = patterns.orphan_dot.replace_all(&next, " ").into_owned();
        next = patterns.leading_dash.replace(&next, "").into_owned();
        next = next.trim().to_string();
        if next == current {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(cleanup("ERROR:  is undefined"), "ERROR: is undefined");
    }

    #[test]
    fn test_removes_empty_quote_pairs() {
        assert_eq!(cleanup("variable '' is not defined"), "variable is not defined");
    }

    #[test]
    fn test_removes_orphan_trailing_dot() {
        // left behind when something like `parser.parse` was filtered out
        assert_eq!(cleanup("undefined: ."), "undefined:");
    }

    #[test]
    fn test_removes_leading_dash() {
        assert_eq!(cleanup("- error in module"), "error in module");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(cleanup("  error  "), "error");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "ERROR:  is undefined",
            "a . . b",
            "  '' -  x  . ",
            "already clean",
            "",
        ] {
            let once = cleanup(input);
            assert_eq!(cleanup(&once), once, "not idempotent for {input:?}");
        }
    }
}
