//! Category exclusion.

use std::collections::HashSet;

use crate::utils::split_tokens;

/// Categories in which no ads are placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryExclusions {
    ids: HashSet<u64>,
}

impl CategoryExclusions {
    /// Parse a pipe-separated list of category ids, e.g. `"5|9"`.
    ///
    /// Tokens that are not ids are skipped.
    pub fn parse(setting: &str) -> Self {
        let ids = split_tokens(setting, '|')
            .filter_map(|token| match token.parse::<u64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    log::warn!("Ignoring invalid category id '{}' in exclude list", token);
                    None
                }
            })
            .collect();

        Self { ids }
    }

    /// True if the category, or its parent, is excluded.
    pub fn is_excluded(&self, category_id: u64, parent_category_id: Option<u64>) -> bool {
        self.ids.contains(&category_id) || parent_category_id.is_some_and(|id| self.ids.contains(&id))
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_and_parent_match() {
        let exclusions = CategoryExclusions::parse("5|9");
        assert!(exclusions.is_excluded(5, None));
        assert!(exclusions.is_excluded(9, Some(1)));
        assert!(exclusions.is_excluded(3, Some(5)));
        assert!(!exclusions.is_excluded(3, Some(4)));
        assert!(!exclusions.is_excluded(3, None));
    }

    #[test]
    fn test_empty_setting_excludes_nothing() {
        let exclusions = CategoryExclusions::parse("");
        assert!(exclusions.is_empty());
        assert!(!exclusions.is_excluded(1, Some(2)));
    }

    #[test]
    fn test_invalid_tokens_skipped() {
        let exclusions = CategoryExclusions::parse(" 5 | general | |12");
        assert!(exclusions.is_excluded(5, None));
        assert!(exclusions.is_excluded(12, None));
        assert_eq!(exclusions.ids.len(), 2);
    }
}
