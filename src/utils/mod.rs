//! Utility functions and helpers.

pub mod url;

/// Split a delimited settings string into trimmed, non-empty tokens.
///
/// Stray delimiters and surrounding whitespace are tolerated; they simply
/// produce no token.
pub fn split_tokens(input: &str, separator: char) -> impl Iterator<Item = &str> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Returns `true` when an optional settings string is absent or whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens() {
        let tokens: Vec<&str> = split_tokens(" staff, ,Advertarget ,", ',').collect();
        assert_eq!(tokens, vec!["staff", "Advertarget"]);
    }

    #[test]
    fn test_split_tokens_pipe() {
        let tokens: Vec<&str> = split_tokens("5|9||", '|').collect();
        assert_eq!(tokens, vec!["5", "9"]);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("anon")));
    }
}
