// src/config.rs

//! Configuration loading utilities.
//!
//! Convenience functions for loading ad settings and viewer profiles from
//! files.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{Settings, ViewerContext};

/// Load settings from a TOML file and validate them.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let settings = Settings::load(path)
        .map_err(|e| AppError::config(format!("Failed to load {}: {e}", path.display())))?;

    settings
        .validate()
        .map_err(|e| AppError::config(format!("Invalid settings: {e}")))?;

    Ok(settings)
}

/// Load a viewer profile from a TOML file.
pub fn load_viewer(path: &Path) -> Result<ViewerContext> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load settings and a viewer profile.
///
/// Without a profile path the viewer is anonymous.
pub fn load_all(settings_path: &Path, viewer_path: Option<&Path>) -> Result<(Settings, ViewerContext)> {
    let settings = load_settings(settings_path)?;
    let viewer = match viewer_path {
        Some(path) => load_viewer(path)?,
        None => ViewerContext::anonymous(),
    };
    Ok((settings, viewer))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_all_defaults_to_anonymous() {
        let settings = write_temp("[[ads]]\nid = \"a\"\nlink = \"https://x.com\"\n");
        let (settings, viewer) = load_all(settings.path(), None).unwrap();
        assert_eq!(settings.ads.len(), 1);
        assert!(viewer.is_anonymous());
    }

    #[test]
    fn test_load_viewer_profile() {
        let profile = write_temp("groups = [\"AdverTarget\"]\n");
        let viewer = load_viewer(profile.path()).unwrap();
        assert!(viewer.groups().contains("advertarget"));
        assert!(!viewer.is_staff());
    }

    #[test]
    fn test_load_settings_rejects_duplicates() {
        let settings = write_temp("[[ads]]\nid = \"a\"\n\n[[ads]]\nid = \"a\"\n");
        assert!(matches!(load_settings(settings.path()), Err(AppError::Config(_))));
    }

    #[test]
    fn test_bundled_sample_data() {
        let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let (settings, viewer) =
            load_all(&base.join("ads.toml"), Some(base.join("viewers/staff.toml").as_path()))
                .unwrap();

        assert_eq!(settings.ads.len(), 5);
        assert_eq!(settings.placement.between_topics, 2);
        assert!(viewer.is_staff());
    }

    #[test]
    fn test_load_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(&dir.path().join("ads.toml")).is_err());
    }
}
