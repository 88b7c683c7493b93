//! Line classification pipeline: prompt detection, noise removal, error
//! parsing and variable filtering, in that order.

mod cleanup;
mod filter;
mod parsers;
mod preprocess;
mod session;

pub use cleanup::cleanup;
pub use filter::VariableFilter;
pub use parsers::{GenericErrorParser, NpmErrorParser, ParserChain};
pub use preprocess::Preprocessor;
pub use session::{LineKind, SessionContext};

/// Phrases that signify an error when a word ends in one of them.
pub const KEYPHRASES: &[&str] = &[
    "error",
    "stacktrace",
    "exception",
    "err",
    "undefined",
    "fatal",
];

/// The full per-session pipeline. Feed it every transcript line in arrival
/// order; it returns a normalized error message for the (rare) lines that
/// contain one.
pub struct ErrorPipeline {
    session: SessionContext,
    preprocessor: Preprocessor,
    chain: ParserChain,
}

impl Default for ErrorPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorPipeline {
    pub fn new() -> Self {
        Self::with_options(
            SessionContext::new(),
            KEYPHRASES.iter().map(|p| p.to_string()).collect(),
        )
    }

    /// Build a pipeline with a custom denylist and keyphrase set.
    pub fn with_options(session: SessionContext, keyphrases: Vec<String>) -> Self {
        Self {
            session,
            preprocessor: Preprocessor::new(),
            chain: ParserChain::new(keyphrases),
        }
    }

    /// Classify one raw line. `None` is the normal result: the line was a
    /// prompt, suppressed output, still part of a buffering multi-line
    /// error, or simply not an error. An empty string is never returned as
    /// a match.
    pub fn process_line(&mut self, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        if let LineKind::Prompt { .. } = self.session.classify(raw) {
            return None;
        }
        if !self.session.is_tracking() {
            return None;
        }

        let preprocessed = self.preprocessor.apply(raw);
        let lowered = preprocessed.to_lowercase();
        let parsed = self.chain.feed(&preprocessed, &lowered)?;
        let message = cleanup(&parsed);
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_error_with_variable_removed() {
        let mut pipeline = ErrorPipeline::new();
        assert_eq!(
            pipeline.process_line("ERROR: x is undefined").as_deref(),
            Some("ERROR: is undefined")
        );
    }

    #[test]
    fn test_denylisted_command_suppresses_output() {
        let mut pipeline = ErrorPipeline::new();
        assert_eq!(pipeline.process_line("user$ ls -la"), None);
        // file listing that happens to contain "error" in a name
        assert_eq!(
            pipeline.process_line("-rw-r--r-- 1 user staff 120 error.txt"),
            None
        );
        // next prompt resumes tracking
        assert_eq!(pipeline.process_line("user$ cat f"), None);
        assert_eq!(
            pipeline.process_line("ERROR: x is not defined").as_deref(),
            Some("ERROR: is not defined")
        );
    }

    #[test]
    fn test_npm_error_block_emits_only_message_line() {
        let mut pipeline = ErrorPipeline::new();
        let lines = [
            "npm ERR! code ELIFECYCLE",
            "npm ERR! errno 1",
            "npm ERR! app start: exited",
            "npm ERR! Exit status 1",
        ];
        for line in lines {
            assert_eq!(pipeline.process_line(line), None);
        }
        let out = pipeline.process_line("npm ERR! Failed at the start script.");
        assert_eq!(out.as_deref(), Some("npm ERR! Failed at the start script."));
    }

    #[test]
    fn test_empty_and_whitespace_lines_never_match() {
        let mut pipeline = ErrorPipeline::new();
        assert_eq!(pipeline.process_line(""), None);
        assert_eq!(pipeline.process_line("   \t"), None);
        // also while suppressed
        pipeline.process_line("user$ ls");
        assert_eq!(pipeline.process_line(""), None);
    }

    #[test]
    fn test_go_undefined_symbol() {
        let mut pipeline = ErrorPipeline::new();
        let out = pipeline.process_line("tripwatcher/main.go:57:25: undefined: config.LoadConf");
        assert_eq!(out.as_deref(), Some("undefined:"));
    }

    #[test]
    fn test_go_undefined_symbol_without_column() {
        let mut pipeline = ErrorPipeline::new();
        // older toolchains omit the column from the position marker
        let out = pipeline.process_line("prog.go:57: undefined: x");
        assert_eq!(out.as_deref(), Some("undefined:"));
    }

    #[test]
    fn test_prompt_lines_never_match() {
        let mut pipeline = ErrorPipeline::new();
        // even a prompt mentioning an error phrase is input, not output
        assert_eq!(pipeline.process_line("user$ grep error log.txt"), None);
    }

    #[test]
    fn test_colored_output_detected() {
        let mut pipeline = ErrorPipeline::new();
        let out = pipeline.process_line("\u{1b}[0;31mERROR: y is undefined\u{1b}[0m");
        assert_eq!(out.as_deref(), Some("ERROR: is undefined"));
    }

    #[test]
    fn test_non_error_output_ignored() {
        let mut pipeline = ErrorPipeline::new();
        assert_eq!(pipeline.process_line("user$ make test"), None);
        assert_eq!(pipeline.process_line("all 42 tests passed"), None);
    }
}
