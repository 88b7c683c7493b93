//! Keyword-based fallback error parser.

use crate::pipeline::filter::VariableFilter;
use regex::Regex;

/// An error split into its leading name (text before the keyphrase) and the
/// message from the keyphrase onward.
#[derive(Debug, PartialEq, Eq)]
struct FoundError {
    name: String,
    message: String,
}

/// Last-resort parser: flags a line as an error when any word ends in one of
/// the configured keyphrases. Runs after every specific parser in the chain.
pub struct GenericErrorParser {
    keyphrases: Vec<String>,
    word_splitter: Regex,
    filter: VariableFilter,
}

impl GenericErrorParser {
    pub fn new(keyphrases: Vec<String>) -> Self {
        Self {
            // punctuation and underscores separate candidate words
            word_splitter: Regex::new(r"[^\w\s]|_").unwrap(),
            filter: VariableFilter::new(keyphrases.clone()),
            keyphrases,
        }
    }

    /// Whether the line contains a keyphrase match at all.
    pub fn evaluate(&self, lowered: &str) -> bool {
        self.find_error(lowered, lowered).is_some()
    }

    /// Produce the normalized message: the error name verbatim, then the
    /// variable-filtered remainder. Stateless, so a claimed line always
    /// yields output.
    pub fn parse(&self, original: &str, lowered: &str) -> Option<String> {
        let error = self.find_error(original, lowered)?;
        Some(format!("{}{}", error.name, self.filter.filter(&error.message)))
    }

    /// Scan for a word ending in a keyphrase. The last word of the line is
    /// deliberately excluded: matching it would flag ordinary sentences that
    /// merely end in "error". Byte offsets found on the lowercased copy are
    /// applied to the original; the preprocessor has already reduced the
    /// line to ASCII, so the two stay aligned.
    fn find_error(&self, original: &str, lowered: &str) -> Option<FoundError> {
        if lowered.is_empty() {
            return None;
        }
        let words: Vec<&str> = self.word_splitter.split(lowered).collect();
        for phrase in &self.keyphrases {
            for word in words.iter().take(words.len().saturating_sub(1)) {
                if !word.ends_with(phrase.as_str()) {
                    continue;
                }
                let idx = lowered.find(phrase.as_str())?;
                return Some(FoundError {
                    name: original[..idx].to_string(),
                    message: original[idx..].to_string(),
                });
            }
        }
        None
    }
}
