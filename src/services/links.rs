//! Outbound link construction.
//!
//! A final link is the ad's base link followed by its `utm_*` fields, then
//! any per-placement parameters supplied by the host.

use std::collections::BTreeMap;

use crate::error::{AppError, Result};
use crate::models::AdDefinition;
use crate::utils::url::append_query;

/// Build the tracked link for an ad.
///
/// Fails if the ad has no link or the link does not parse as a URL.
pub fn build_link(ad: &AdDefinition, extra: &BTreeMap<String, String>) -> Result<String> {
    let base = ad
        .link
        .as_deref()
        .filter(|link| !link.trim().is_empty())
        .ok_or_else(|| AppError::missing_link(&ad.id))?;

    let tracking = ad.tracking_params();
    let params = tracking
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .chain(extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    append_query(base, params)
}

/// Build the tracked link, treating any failure as "no link".
pub fn try_build_link(ad: &AdDefinition, extra: &BTreeMap<String, String>) -> Option<String> {
    match build_link(ad, extra) {
        Ok(link) => Some(link),
        Err(e) => {
            log::debug!("No link for ad '{}': {}", ad.id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_extra() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn test_bare_link_is_normalized() {
        let ad = AdDefinition::new("a", "https://x.com");
        assert_eq!(build_link(&ad, &no_extra()).unwrap(), "https://x.com/");
    }

    #[test]
    fn test_utm_fields_appended_in_order() {
        let ad = AdDefinition::new("ad1", "https://example.com/amazing")
            .with_field("utm_source", "discourse")
            .with_field("utm_medium", "topic-list");
        assert_eq!(
            build_link(&ad, &no_extra()).unwrap(),
            "https://example.com/amazing?utm_source=discourse&utm_medium=topic-list"
        );
    }

    #[test]
    fn test_extra_params_follow_utm_fields() {
        let ad = AdDefinition::new("a", "https://x.com").with_field("utm_source", "discourse");
        let extra = BTreeMap::from([("click_id".to_string(), "123".to_string())]);
        assert_eq!(
            build_link(&ad, &extra).unwrap(),
            "https://x.com/?utm_source=discourse&click_id=123"
        );
    }

    #[test]
    fn test_extra_params_only_add() {
        let ad = AdDefinition::new("a", "https://x.com/p?ref=home")
            .with_field("utm_source", "discourse")
            .with_field("utm_campaign", "spring");
        let plain = build_link(&ad, &no_extra()).unwrap();
        let extra = BTreeMap::from([
            ("post".to_string(), "4".to_string()),
            ("empty".to_string(), String::new()),
        ]);
        let tracked = build_link(&ad, &extra).unwrap();

        assert_eq!(tracked, format!("{plain}&post=4"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let ad = AdDefinition::new("a", "https://x.com/landing").with_field("utm_source", "d");
        assert_eq!(
            build_link(&ad, &no_extra()).unwrap(),
            build_link(&ad, &no_extra()).unwrap()
        );
    }

    #[test]
    fn test_missing_link() {
        let ad = AdDefinition {
            id: "nolink".to_string(),
            ..AdDefinition::default()
        };
        assert!(matches!(
            build_link(&ad, &no_extra()),
            Err(AppError::MissingLink(id)) if id == "nolink"
        ));
        assert_eq!(try_build_link(&ad, &no_extra()), None);
    }

    #[test]
    fn test_malformed_link() {
        let ad = AdDefinition::new("bad", "example.com/no-scheme");
        assert!(matches!(build_link(&ad, &no_extra()), Err(AppError::Url(_))));
        assert_eq!(try_build_link(&ad, &no_extra()), None);
    }
}
