//! Stack Overflow lookup URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be escaped inside a query string value.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'&')
    .add(b'+')
    .add(b'%')
    .add(b'{')
    .add(b'}');

/// Build a Stack Overflow search URL for a normalized error message.
pub fn search_url(message: &str) -> String {
    format!(
        "https://stackoverflow.com/search?q={}",
        utf8_percent_encode(message, QUERY)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_are_escaped() {
        assert_eq!(
            search_url("ERROR: is undefined"),
            "https://stackoverflow.com/search?q=ERROR:%20is%20undefined"
        );
    }

    #[test]
    fn test_query_metacharacters_escaped() {
        let url = search_url("a&b #1");
        assert!(url.ends_with("q=a%26b%20%231"));
    }

    #[test]
    fn test_plain_words_untouched() {
        assert_eq!(
            search_url("undefined:"),
            "https://stackoverflow.com/search?q=undefined:"
        );
    }
}
