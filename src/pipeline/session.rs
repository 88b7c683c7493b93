//! Prompt/output classification for a recorded shell session.

/// Commands whose output is never scanned for errors. `ls` output routinely
/// contains file names like `error.txt` that would trip the keyword parser.
const DENYLISTED_COMMANDS: &[&str] = &["ls"];

/// The delimiter that closes a shell prompt, e.g. `user$`.
const PROMPT_DELIMITER: char = '$';

/// How a transcript line was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A prompt line; carries the typed command (text after the delimiter).
    Prompt { command: String },
    /// Ordinary program output.
    Output,
}

/// Per-session classification state.
///
/// The transcript gives us no out-of-band knowledge of the real prompt
/// format, so the first line containing the delimiter establishes the prompt
/// token for the whole session. For that heuristic to bind correctly the
/// very first line of a session must be a prompt line, which holds for
/// transcripts produced by `script(1)`.
#[derive(Debug)]
pub struct SessionContext {
    /// Everything up to and including the delimiter on the first prompt
    /// line. Never changes once set.
    prompt_token: Option<String>,
    /// False while a denylisted command is running.
    tracking: bool,
    denylist: Vec<String>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::with_denylist(DENYLISTED_COMMANDS.iter().map(|c| c.to_string()).collect())
    }

    pub fn with_denylist(denylist: Vec<String>) -> Self {
        Self {
            prompt_token: None,
            tracking: true,
            denylist,
        }
    }

    /// Whether output lines should currently be scanned.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Classify a line and, for prompt lines, update the tracking state from
    /// the typed command.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let command = match &self.prompt_token {
            None => {
                // no prompt known yet; the first delimiter line defines it
                let idx = match line.find(PROMPT_DELIMITER) {
                    Some(idx) => idx,
                    None => return LineKind::Output,
                };
                self.prompt_token = Some(line[..=idx].to_string());
                line[idx + 1..].trim().to_string()
            }
            Some(token) => {
                if !line.starts_with(token.as_str()) {
                    return LineKind::Output;
                }
                line[token.len()..].trim().to_string()
            }
        };

        let base = command.split_whitespace().next().unwrap_or("");
        self.tracking = !self.denylist.iter().any(|d| d == base);
        LineKind::Prompt { command }
    }
}
