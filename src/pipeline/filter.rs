//! Variable name removal via part-of-speech tagging.

use crate::pos::Tagger;
use regex::Regex;

/// Nouns that carry meaning in an error message and must survive filtering.
const NOUNS_TO_KEEP: &[&str] = &[
    "variable",
    "method",
    "function",
    "class",
    "syntax",
    "index",
    "directory",
    "file",
];

/// Removes tokens that look like variable, file or identifier names from a
/// detected error message, so the remaining text generalizes well as a
/// search query. "Looks like" means the tagger calls the token a common noun
/// or personal pronoun and no whitelist entry protects it.
pub struct VariableFilter {
    keyphrases: Vec<String>,
    tagger: Tagger,
    unsafe_token: Regex,
}

impl VariableFilter {
    /// `keyphrases` are the phrases used for error detection; any token
    /// containing one of them is kept.
    pub fn new(keyphrases: Vec<String>) -> Self {
        Self {
            keyphrases,
            tagger: Tagger::new(),
            // tokens with these characters double as path fragments or
            // regex syntax and are not worth the risk of removing
            unsafe_token: Regex::new(r"[,.?/-]").unwrap(),
        }
    }

    /// Remove noun-like tokens from `message`. Tagging runs on a lowercased
    /// copy; removal happens on the original so surviving words keep their
    /// capitalization.
    pub fn filter(&self, message: &str) -> String {
        let mut filtered = message.to_string();
        for (word, tag) in self.tagger.tag(&message.to_lowercase()) {
            if !tag.is_noun_like() || word.is_empty() || self.is_whitelisted(&word) {
                continue;
            }
            if self.unsafe_token.is_match(&word) {
                continue;
            }
            let pattern = format!(r"(?i)\b{}\b", word);
            // a token that does not form a valid pattern is skipped, never fatal
            let re = match Regex::new(&pattern) {
                Ok(re) => re,
                Err(_) => continue,
            };
            filtered = re.replace(&filtered, "").into_owned();
        }
        filtered
    }

    fn is_whitelisted(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        if self.keyphrases.iter().any(|p| lowered.contains(p.as_str())) {
            return true;
        }
        if NOUNS_TO_KEEP.contains(&lowered.as_str()) {
            return true;
        }
        // punctuation-only tokens have nothing to remove
        !word.chars().any(|c| c.is_alphanumeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> VariableFilter {
        VariableFilter::new(
            ["error", "stacktrace", "exception", "err", "undefined", "fatal"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_removes_single_letter_variable() {
        let filter = default_filter();
        assert_eq!(filter.filter("ERROR: x is undefined"), "ERROR:  is undefined");
    }

    #[test]
    fn test_keeps_keyphrase_words() {
        let filter = default_filter();
        // "undefined" and "error" both contain keyphrases and survive
        let out = filter.filter("error undefined");
        assert!(out.contains("error"));
        assert!(out.contains("undefined"));
    }

    #[test]
    fn test_keeps_domain_nouns() {
        let filter = default_filter();
        let out = filter.filter("ERROR: no such file or directory");
        assert!(out.contains("file"));
        assert!(out.contains("directory"));
    }

    #[test]
    fn test_removes_identifier_after_colon() {
        let filter = default_filter();
        let out = filter.filter("undefined: config.LoadConf");
        // "config" and "loadconf" are unknown nouns; the keyphrase stays
        assert_eq!(out, "undefined: .");
    }

    #[test]
    fn test_capitalization_of_survivors_preserved() {
        let filter = default_filter();
        let out = filter.filter("Fatal ERROR: myvar is not defined");
        assert!(out.contains("Fatal ERROR:"));
        assert!(!out.to_lowercase().contains("myvar"));
    }

    #[test]
    fn test_each_noun_token_removes_one_occurrence() {
        let filter = default_filter();
        // "foo" is tagged twice, so both occurrences go, one per token
        let out = filter.filter("error: foo is not foo");
        assert_eq!(out, "error:  is not ");
    }

    #[test]
    fn test_personal_pronouns_removed() {
        let filter = default_filter();
        let out = filter.filter("error: it is undefined");
        assert_eq!(out, "error:  is undefined");
    }

    #[test]
    fn test_punctuation_tokens_ignored() {
        let filter = default_filter();
        assert_eq!(filter.filter("error: !!"), "error: !!");
    }
}
