//! Group targeting rules.
//!
//! Ad settings name groups as a comma-separated string. Two tokens are
//! reserved: `anon` matches viewers who are not logged in, and `staff`
//! matches staff members. Every other token is a group name.

use std::collections::HashSet;

use crate::models::ViewerContext;
use crate::utils::{is_blank, split_tokens};

const ANON_TOKEN: &str = "anon";
const STAFF_TOKEN: &str = "staff";

/// A parsed group targeting rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRule {
    tokens: HashSet<String>,
}

impl GroupRule {
    /// Parse a comma-separated group string.
    ///
    /// Returns `None` for an absent or blank string: no rule is configured.
    pub fn parse(groups: Option<&str>) -> Option<Self> {
        if is_blank(groups) {
            return None;
        }

        let tokens = groups
            .map(|g| split_tokens(g, ',').map(str::to_lowercase).collect())
            .unwrap_or_default();

        Some(Self { tokens })
    }

    /// Does the viewer satisfy this rule?
    pub fn matches(&self, viewer: &ViewerContext) -> bool {
        if viewer.is_anonymous() && self.tokens.contains(ANON_TOKEN) {
            return true;
        }
        if viewer.is_staff() && self.tokens.contains(STAFF_TOKEN) {
            return true;
        }
        !self.tokens.is_disjoint(viewer.groups())
    }
}
