//! Noise removal applied to output lines before error detection.

use regex::Regex;

/// Strips non-semantic substrings from a raw transcript line: compiler
/// position markers, timestamps, file paths, and the control/invisible bytes
/// `script(1)` records. Purely deletive; nothing is ever inserted.
pub struct Preprocessor {
    /// Removed once each, case-insensitively, in order.
    phrase_patterns: Vec<Regex>,
    /// `/`-separated segments ending in a dotted filename, removed globally.
    path_pattern: Regex,
    /// Color/cursor escape bodies such as `[0;31m` or `[K`.
    control_pattern: Regex,
    /// Anything outside printable ASCII plus basic punctuation. This also
    /// eats the ESC byte the control bodies were attached to.
    invisible_pattern: Regex,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    pub fn new() -> Self {
        let phrase_patterns = vec![
            // interpreter position marker, e.g. "in /srv/app.php on line 3"
            Regex::new(r"(?i)in [a-zA-Z0-9_./]+ on line \d").unwrap(),
            // go-style file:line marker with optional column,
            // e.g. "main.go:57:25: " or "main.go:57: "
            Regex::new(r"(?i)[a-zA-Z_./]+:\d+(:\d+)?: ").unwrap(),
            // timestamp prefix, e.g. "2023-01-02T10:11:12.123Z"
            Regex::new(r"(?i)\d+-\d+-\d+\w+\d+:\d+:\d+\.\d+\w").unwrap(),
        ];
        Self {
            phrase_patterns,
            path_pattern: Regex::new(r"(/*[a-zA-Z0-9_.-]+/)+[a-zA-Z0-9_.-]+\.[a-zA-Z0-9_.-]+")
                .unwrap(),
            control_pattern: Regex::new(r"\[[0-9;]*[mK]").unwrap(),
            invisible_pattern: Regex::new(
                r#"[^A-Za-z0-9\s!$%^&*()_+|~=`{}\[\]:";'<>?,./-]"#,
            )
            .unwrap(),
        }
    }

    pub fn apply(&self, line: &str) -> String {
        let mut out = line.to_string();
        for pattern in &self.phrase_patterns {
            out = pattern.replace(&out, "").into_owned();
        }
        out = self.path_pattern.replace_all(&out, "").into_owned();
        out = self.control_pattern.replace_all(&out, "").into_owned();
        out = self.invisible_pattern.replace_all(&out, "").into_owned();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_interpreter_position_marker() {
        let pre = Preprocessor::new();
        assert_eq!(
            pre.apply("Parse error: syntax error in /srv/app.php on line 3"),
            "Parse error: syntax error "
        );
    }

    #[test]
    fn test_removes_go_position_marker() {
        let pre = Preprocessor::new();
        assert_eq!(
            pre.apply("tripwatcher/main.go:57:25: undefined: config.LoadConf"),
            "undefined: config.LoadConf"
        );
    }

    #[test]
    fn test_removes_go_position_marker_without_column() {
        let pre = Preprocessor::new();
        assert_eq!(
            pre.apply("prog.go:57: undefined: x"),
            "undefined: x"
        );
    }

    #[test]
    fn test_removes_timestamp() {
        let pre = Preprocessor::new();
        let out = pre.apply("2023-01-02T10:11:12.123Z error: boom");
        assert_eq!(out, " error: boom");
    }

    #[test]
    fn test_removes_file_paths() {
        let pre = Preprocessor::new();
        assert_eq!(
            pre.apply("cannot open /home/user/project/data.csv for reading"),
            "cannot open  for reading"
        );
    }

    #[test]
    fn test_path_removal_is_a_round_trip() {
        let pre = Preprocessor::new();
        let once = pre.apply("at src/lib/parser.js something failed");
        // nothing path-shaped survives the first pass
        assert_eq!(pre.apply(&once), once);
    }

    #[test]
    fn test_strips_control_sequences_and_invisible_bytes() {
        let pre = Preprocessor::new();
        let out = pre.apply("\u{1b}[0;31merror: red\u{1b}[K\u{7}");
        assert_eq!(out, "error: red");
    }

    #[test]
    fn test_plain_text_untouched() {
        let pre = Preprocessor::new();
        assert_eq!(pre.apply("ERROR: x is undefined"), "ERROR: x is undefined");
    }
}
