//! Multi-line npm error parser.

use regex::Regex;

/// Every line of an npm failure starts with this prefix.
const NPM_ERROR_PREFIX: &str = "npm err!";

/// Within the prefixed block, the human-readable message sits on the fifth
/// line (zero-indexed offset 4).
const NPM_ERROR_MESSAGE_OFFSET: u32 = 4;

/// Recognizes the multi-line `npm ERR!` block and picks the one line out of
/// it that carries the actual message. State is a counter of consecutive
/// prefixed lines; it resets the moment a line is not part of the block.
#[derive(Debug)]
pub struct NpmErrorParser {
    line: u32,
    path_pattern: Regex,
}

impl Default for NpmErrorParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NpmErrorParser {
    pub fn new() -> Self {
        Self {
            line: 0,
            path_pattern: Regex::new(r"(/*[a-zA-Z0-9_.-]+/)+[a-zA-Z0-9_.-]+\.[a-zA-Z0-9_.-]+")
                .unwrap(),
        }
    }

    /// True for any line within an npm error block; resets the line counter
    /// otherwise.
    pub fn evaluate(&mut self, lowered: &str) -> bool {
        let is_npm_error = lowered.starts_with(NPM_ERROR_PREFIX);
        if !is_npm_error {
            self.reset();
        }
        is_npm_error
    }

    /// Returns the message once the block has advanced to the message line;
    /// `None` on every other offset means "keep feeding me lines".
    pub fn parse(&mut self, original: &str) -> Option<String> {
        let result = if self.line == NPM_ERROR_MESSAGE_OFFSET {
            Some(self.path_pattern.replace_all(original, "").into_owned())
        } else {
            None
        };
        self.line += 1;
        result
    }

    fn reset(&mut self) {
        self.line = 0;
    }
}
