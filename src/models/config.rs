//! Ad settings structures.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::AdDefinition;

/// Root ad settings, as stored by the forum theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Pipe-separated category ids where no ads are shown
    #[serde(default)]
    pub exclude_categories: String,

    /// Placement frequency settings
    #[serde(default)]
    pub placement: PlacementConfig,

    /// Configured ads in display order
    #[serde(default)]
    pub ads: Vec<AdDefinition>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load settings or return defaults (no ads) if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Settings load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate ad definitions for basic sanity.
    ///
    /// Links are not checked here; a bad link only costs that ad its link.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, ad) in self.ads.iter().enumerate() {
            if ad.id.trim().is_empty() {
                return Err(AppError::validation(format!("ads[{index}].id is empty")));
            }
            if !seen.insert(ad.id.as_str()) {
                return Err(AppError::validation(format!("Duplicate ad id '{}'", ad.id)));
            }
        }
        Ok(())
    }
}

/// How often ads are inserted into content streams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Show an ad every N posts (0 disables)
    #[serde(default = "defaults::every")]
    pub between_posts: usize,

    /// Show an ad every N topics in topic lists (0 disables)
    #[serde(default = "defaults::every")]
    pub between_topics: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            between_posts: defaults::every(),
            between_topics: defaults::every(),
        }
    }
}

mod defaults {
    pub fn every() -> usize {
        5
    }
}
