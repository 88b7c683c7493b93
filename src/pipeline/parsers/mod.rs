//! Error detection strategies and the chain that dispatches between them.

mod generic;
mod npm;

pub use generic::GenericErrorParser;
pub use npm::NpmErrorParser;

/// One detection strategy. Specific (often stateful, multi-line) parsers
/// come first; the generic keyword parser is the broad-match fallback.
pub enum Strategy {
    Npm(NpmErrorParser),
    Generic(GenericErrorParser),
}

impl Strategy {
    /// Whether this strategy claims the line. Stateful strategies also use
    /// this to reset their counters on a non-match.
    fn evaluate(&mut self, lowered: &str) -> bool {
        match self {
            Strategy::Npm(p) => p.evaluate(lowered),
            Strategy::Generic(p) => p.evaluate(lowered),
        }
    }

    /// Produce a message, or `None` while a multi-line strategy is still
    /// accumulating lines.
    fn parse(&mut self, original: &str, lowered: &str) -> Option<String> {
        match self {
            Strategy::Npm(p) => p.parse(original),
            Strategy::Generic(p) => p.parse(original, lowered),
        }
    }
}

/// Ordered chain of strategies. The first strategy whose `evaluate` returns
/// true owns the line exclusively; a `None` from its `parse` means "wait for
/// more lines", never "try the next strategy".
pub struct ParserChain {
    strategies: Vec<Strategy>,
}

impl ParserChain {
    /// Build the default chain: npm multi-line parser first, generic
    /// keyword parser last. Order matters - the fallback matches broadly on
    /// keyword suffixes and would otherwise shadow the specific parsers.
    pub fn new(keyphrases: Vec<String>) -> Self {
        Self {
            strategies: vec![
                Strategy::Npm(NpmErrorParser::new()),
                Strategy::Generic(GenericErrorParser::new(keyphrases)),
            ],
        }
    }

    /// Feed one preprocessed output line through the chain.
    pub fn feed(&mut self, original: &str, lowered: &str) -> Option<String> {
        for strategy in &mut self.strategies {
            if !strategy.evaluate(lowered) {
                continue;
            }
            return strategy.parse(original, lowered);
        }
        None
    }
}
