//! Ad definition and derived ad structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved prefix for tracking fields appended to outbound links.
pub const TRACKING_PREFIX: &str = "utm_";

/// One configured advertisement with its targeting rules and link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdDefinition {
    /// Unique ad identifier
    pub id: String,

    /// Display text or HTML snippet
    #[serde(default)]
    pub text: String,

    /// Base destination URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Comma-separated groups the ad is restricted to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_groups: Option<String>,

    /// Comma-separated groups the ad is hidden from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_groups: Option<String>,

    /// Comma-separated extra CSS classes for the placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<String>,

    /// Remaining fields in declaration order (`utm_*` and anything else)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AdDefinition {
    /// Create an ad with an id and base link.
    pub fn new(id: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link: Some(link.into()),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_include_groups(mut self, groups: impl Into<String>) -> Self {
        self.include_groups = Some(groups.into());
        self
    }

    pub fn with_exclude_groups(mut self, groups: impl Into<String>) -> Self {
        self.exclude_groups = Some(groups.into());
        self
    }

    pub fn with_custom_classes(mut self, classes: impl Into<String>) -> Self {
        self.custom_classes = Some(classes.into());
        self
    }

    /// Add a free-form field. Keys with the `utm_` prefix become tracking
    /// parameters.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Tracking parameters in declaration order.
    ///
    /// Only `utm_`-prefixed fields with a non-empty value are returned.
    /// Numbers are rendered as-is, `true` as `"true"`; `false`, null and
    /// nested values are skipped.
    pub fn tracking_params(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|(key, _)| key.starts_with(TRACKING_PREFIX))
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::String(s) if !s.is_empty() => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(true) => "true".to_string(),
                    _ => return None,
                };
                Some((key.clone(), value))
            })
            .collect()
    }

    /// Custom classes normalized to a space-joined string.
    pub fn class_string(&self) -> String {
        self.custom_classes
            .as_deref()
            .map(|classes| crate::utils::split_tokens(classes, ',').collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }
}

/// An ad that passed eligibility filtering for the current viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleAd {
    pub definition: AdDefinition,

    /// Base link with tracking parameters; `None` if it could not be built
    pub final_link: Option<String>,

    /// Space-joined custom CSS classes
    pub classes: String,
}

impl EligibleAd {
    pub fn id(&self) -> &str {
        &self.definition.id
    }
}

/// An ad served to a placement.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdResult {
    pub id: String,
    pub text: String,
    pub final_link: Option<String>,
    pub classes: String,
}

impl AdResult {
    /// Payload for the host's impression tracking.
    pub fn impression(&self) -> Impression {
        Impression {
            ad_id: self.id.clone(),
            text: self.text.clone(),
        }
    }
}

/// Impression event data handed to an analytics sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Impression {
    pub ad_id: String,
    pub text: String,
}
