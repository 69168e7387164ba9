//! Viewer identity used to evaluate targeting rules.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Identity attributes of the current viewer.
///
/// Group names are stored lowercased. An anonymous viewer never has groups
/// and is never staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ViewerProfile", into = "ViewerProfile")]
pub struct ViewerContext {
    groups: HashSet<String>,
    staff: bool,
    anonymous: bool,
}

impl ViewerContext {
    /// A viewer that is not logged in.
    pub fn anonymous() -> Self {
        Self {
            groups: HashSet::new(),
            staff: false,
            anonymous: true,
        }
    }

    /// A logged-in viewer with the given group memberships.
    pub fn user<I, S>(groups: I, staff: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|g| g.as_ref().trim().to_lowercase())
                .filter(|g| !g.is_empty())
                .collect(),
            staff,
            anonymous: false,
        }
    }

    pub fn groups(&self) -> &HashSet<String> {
        &self.groups
    }

    pub fn is_staff(&self) -> bool {
        self.staff
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// On-disk viewer description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ViewerProfile {
    #[serde(default)]
    anonymous: bool,
    #[serde(default)]
    staff: bool,
    #[serde(default)]
    groups: Vec<String>,
}

impl From<ViewerProfile> for ViewerContext {
    fn from(profile: ViewerProfile) -> Self {
        if profile.anonymous {
            Self::anonymous()
        } else {
            Self::user(profile.groups, profile.staff)
        }
    }
}

impl From<ViewerContext> for ViewerProfile {
    fn from(viewer: ViewerContext) -> Self {
        let mut groups: Vec<String> = viewer.groups.into_iter().collect();
        groups.sort();
        Self {
            anonymous: viewer.anonymous,
            staff: viewer.staff,
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_groups_normalized() {
        let viewer = ViewerContext::user(["AdverTarget ", "", "trust_level_1"], false);
        assert!(viewer.groups().contains("advertarget"));
        assert!(viewer.groups().contains("trust_level_1"));
        assert_eq!(viewer.groups().len(), 2);
        assert!(!viewer.is_anonymous());
    }

    #[test]
    fn test_anonymous_profile_drops_groups_and_staff() {
        let viewer: ViewerContext = toml::from_str(
            r#"
            anonymous = true
            staff = true
            groups = ["admins"]
            "#,
        )
        .unwrap();
        assert_eq!(viewer, ViewerContext::anonymous());
    }

    #[test]
    fn test_user_profile_from_toml() {
        let viewer: ViewerContext = toml::from_str(
            r#"
            staff = true
            groups = ["Staff", "moderators"]
            "#,
        )
        .unwrap();
        assert!(viewer.is_staff());
        assert!(viewer.groups().contains("moderators"));
    }
}
