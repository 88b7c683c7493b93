//! Minimal part-of-speech tagging for error messages.
//!
//! No crate in our stack covers POS tagging, so this is a compact
//! Brill-style tagger: a closed-class lexicon plus suffix rules, with
//! unknown tokens defaulting to common noun. That default is what makes the
//! variable filter work - identifier-shaped tokens (`x`, `loadconf`,
//! `my_var`) are never in the lexicon, so they come out as nouns and get
//! removed from the message.

mod lexicon;

use std::collections::HashMap;

/// Part-of-speech tag. A reduced Penn Treebank set; only the categories the
/// variable filter distinguishes plus the closed classes needed to keep
/// ordinary English words out of the noun bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Common noun, singular
    Nn,
    /// Common noun, plural
    Nns,
    /// Personal pronoun
    Prp,
    /// Determiner
    Dt,
    /// Preposition / subordinating conjunction
    In,
    /// Coordinating conjunction
    Cc,
    /// "to"
    To,
    /// Modal
    Md,
    /// Verb, base form
    Vb,
    /// Verb, 3rd person singular present
    Vbz,
    /// Verb, past tense
    Vbd,
    /// Verb, past participle
    Vbn,
    /// Verb, gerund
    Vbg,
    /// Adjective
    Jj,
    /// Adverb
    Rb,
    /// Cardinal number
    Cd,
    /// Punctuation
    Punct,
}

impl Tag {
    /// Tags that the variable filter treats as likely identifier names.
    pub fn is_noun_like(self) -> bool {
        matches!(self, Tag::Nn | Tag::Prp)
    }
}

/// Split a message into word and punctuation tokens. Whitespace separates
/// tokens and is dropped; a run of word characters (letters, digits,
/// underscore, apostrophe) is one token, every other character is a
/// punctuation token on its own.
pub fn lex(message: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for c in message.chars() {
        if c.is_alphanumeric() || c == '_' || c == '\'' {
            word.push(c);
        } else {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }
    tokens
}

/// Lexicon-plus-suffix-rules tagger.
pub struct Tagger {
    lexicon: HashMap<&'static str, Tag>,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger {
    pub fn new() -> Self {
        Self {
            lexicon: lexicon::LEXICON.iter().copied().collect(),
        }
    }

    /// Tag every token of a (lowercased) message in order.
    pub fn tag(&self, message: &str) -> Vec<(String, Tag)> {
        lex(message)
            .into_iter()
            .map(|token| {
                let tag = self.tag_token(&token);
                (token, tag)
            })
            .collect()
    }

    fn tag_token(&self, token: &str) -> Tag {
        if let Some(tag) = self.lexicon.get(token) {
            return *tag;
        }
        if !token.chars().any(|c| c.is_alphanumeric()) {
            return Tag::Punct;
        }
        if token.chars().all(|c| c.is_ascii_digit()) || token.parse::<f64>().is_ok() {
            return Tag::Cd;
        }
        // suffix heuristics, most specific first
        if token.len() > 3 && token.ends_with("ing") {
            return Tag::Vbg;
        }
        if token.len() > 2 && token.ends_with("ed") {
            return Tag::Vbn;
        }
        if token.len() > 2 && token.ends_with("ly") {
            return Tag::Rb;
        }
        if token.len() > 4
            && ["able", "ible", "ful", "ous", "ive", "less", "al"]
                .iter()
                .any(|s| token.ends_with(s))
        {
            return Tag::Jj;
        }
        if token.len() > 1 && token.ends_with('s') {
            return Tag::Nns;
        }
        Tag::Nn
    }
}
