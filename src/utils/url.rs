// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;

/// Parse `base` and append each `(key, value)` pair as a query parameter.
///
/// Pairs with an empty value are skipped. Existing query parameters are kept
/// in place; new ones go after them in iteration order. When nothing is
/// appended the URL is returned exactly as the parser normalized it.
///
/// # Examples
/// ```
/// use ad_rotator::utils::url::append_query;
///
/// let link = append_query("https://example.com/ad?ref=1", [("utm_source", "forum")]).unwrap();
/// assert_eq!(link, "https://example.com/ad?ref=1&utm_source=forum");
/// ```
pub fn append_query<I, K, V>(base: &str, pairs: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Url::parse(base)?;

    let pairs: Vec<(K, V)> = pairs
        .into_iter()
        .filter(|(_, value)| !value.as_ref().is_empty())
        .collect();

    // query_pairs_mut() leaves a bare '?' behind if nothing is appended
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key.as_ref(), value.as_ref());
        }
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pairs_normalizes_only() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(append_query("https://x.com", empty).unwrap(), "https://x.com/");
    }

    #[test]
    fn test_empty_values_skipped() {
        let link = append_query("https://x.com/a", [("utm_source", ""), ("utm_medium", "banner")])
            .unwrap();
        assert_eq!(link, "https://x.com/a?utm_medium=banner");
    }

    #[test]
    fn test_values_are_encoded() {
        let link = append_query("https://x.com/", [("utm_campaign", "spring sale&more")]).unwrap();
        assert_eq!(link, "https://x.com/?utm_campaign=spring+sale%26more");
    }

    #[test]
    fn test_malformed_base_is_error() {
        let empty: [(&str, &str); 0] = [];
        assert!(append_query("not a url", empty).is_err());
        assert!(append_query("", empty).is_err());
    }
}
