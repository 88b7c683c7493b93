//! Closed-class word list for the tagger.

use super::Tag;

/// Words with a known, fixed part of speech. Open-class words (most nouns,
/// identifiers, anything program-generated) are intentionally absent and fall
/// through to the suffix rules.
pub const LEXICON: &[(&str, Tag)] = &[
    // personal pronouns
    ("i", Tag::Prp),
    ("you", Tag::Prp),
    ("he", Tag::Prp),
    ("she", Tag::Prp),
    ("it", Tag::Prp),
    ("we", Tag::Prp),
    ("they", Tag::Prp),
    ("me", Tag::Prp),
    ("him", Tag::Prp),
    ("her", Tag::Prp),
    ("us", Tag::Prp),
    ("them", Tag::Prp),
    ("itself", Tag::Prp),
    ("myself", Tag::Prp),
    ("yourself", Tag::Prp),
    // determiners
    ("the", Tag::Dt),
    ("a", Tag::Dt),
    ("an", Tag::Dt),
    ("this", Tag::Dt),
    ("that", Tag::Dt),
    ("these", Tag::Dt),
    ("those", Tag::Dt),
    ("no", Tag::Dt),
    ("any", Tag::Dt),
    ("some", Tag::Dt),
    ("each", Tag::Dt),
    ("all", Tag::Dt),
    // prepositions and subordinating conjunctions
    ("in", Tag::In),
    ("on", Tag::In),
    ("at", Tag::In),
    ("of", Tag::In),
    ("for", Tag::In),
    ("with", Tag::In),
    ("without", Tag::In),
    ("from", Tag::In),
    ("by", Tag::In),
    ("into", Tag::In),
    ("during", Tag::In),
    ("before", Tag::In),
    ("after", Tag::In),
    ("within", Tag::In),
    ("while", Tag::In),
    ("as", Tag::In),
    ("if", Tag::In),
    ("because", Tag::In),
    ("when", Tag::In),
    ("where", Tag::In),
    // coordinating conjunctions
    ("and", Tag::Cc),
    ("or", Tag::Cc),
    ("but", Tag::Cc),
    ("nor", Tag::Cc),
    ("to", Tag::To),
    // modals
    ("can", Tag::Md),
    ("cannot", Tag::Md),
    ("can't", Tag::Md),
    ("could", Tag::Md),
    ("couldn't", Tag::Md),
    ("may", Tag::Md),
    ("might", Tag::Md),
    ("must", Tag::Md),
    ("shall", Tag::Md),
    ("should", Tag::Md),
    ("shouldn't", Tag::Md),
    ("will", Tag::Md),
    ("won't", Tag::Md),
    ("would", Tag::Md),
    ("wouldn't", Tag::Md),
    // verbs common in diagnostics
    ("be", Tag::Vb),
    ("been", Tag::Vbn),
    ("being", Tag::Vbg),
    ("am", Tag::Vbz),
    ("is", Tag::Vbz),
    ("isn't", Tag::Vbz),
    ("are", Tag::Vbz),
    ("aren't", Tag::Vbz),
    ("was", Tag::Vbd),
    ("wasn't", Tag::Vbd),
    ("were", Tag::Vbd),
    ("has", Tag::Vbz),
    ("have", Tag::Vb),
    ("had", Tag::Vbd),
    ("do", Tag::Vb),
    ("does", Tag::Vbz),
    ("doesn't", Tag::Vbz),
    ("did", Tag::Vbd),
    ("didn't", Tag::Vbd),
    ("done", Tag::Vbn),
    ("don't", Tag::Vb),
    ("get", Tag::Vb),
    ("got", Tag::Vbd),
    ("find", Tag::Vb),
    ("found", Tag::Vbn),
    ("exist", Tag::Vb),
    ("exists", Tag::Vbz),
    ("expect", Tag::Vb),
    ("read", Tag::Vb),
    ("write", Tag::Vb),
    ("open", Tag::Vb),
    ("load", Tag::Vb),
    ("parse", Tag::Vb),
    ("resolve", Tag::Vb),
    ("thrown", Tag::Vbn),
    ("caught", Tag::Vbn),
    ("set", Tag::Vbn),
    // adverbs
    ("not", Tag::Rb),
    ("n't", Tag::Rb),
    ("already", Tag::Rb),
    ("here", Tag::Rb),
    ("there", Tag::Rb),
    ("again", Tag::Rb),
    ("never", Tag::Rb),
    ("only", Tag::Rb),
    ("too", Tag::Rb),
    ("also", Tag::Rb),
    ("yet", Tag::Rb),
    // adjectives common in diagnostics that no suffix rule catches
    ("undefined", Tag::Jj),
    ("null", Tag::Jj),
    ("missing", Tag::Jj),
    ("invalid", Tag::Jj),
    ("unknown", Tag::Jj),
    ("illegal", Tag::Jj),
    ("bad", Tag::Jj),
    ("wrong", Tag::Jj),
    ("empty", Tag::Jj),
    ("such", Tag::Jj),
    ("fatal", Tag::Jj),
    ("new", Tag::Jj),
    ("same", Tag::Jj),
    ("valid", Tag::Jj),
];
