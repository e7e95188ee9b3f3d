//! Preferences persisted between sessions.

use std::path::{Path, PathBuf};

use padcore::storage::{self, RecentFiles};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::PresentationSettings;

pub const APP_NAME: &str = "notepad";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub settings: PresentationSettings,
    pub recent: RecentFiles,
    /// Folder the file picker opens in. Falls back to `./assets`, then the
    /// user's documents folder.
    pub assets_dir: Option<PathBuf>,
}

impl Preferences {
    pub fn default_path() -> PathBuf {
        storage::config_dir(APP_NAME).join("preferences.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut prefs: Preferences = storage::load_json(path)?;
        prefs.settings = prefs.settings.sanitized();
        Ok(prefs)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                }
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        storage::save_json(path, self)?;
        Ok(())
    }

    pub fn picker_root(&self) -> PathBuf {
        if let Some(dir) = self.assets_dir.as_ref().filter(|d| d.is_dir()) {
            return dir.clone();
        }
        let local = PathBuf::from("assets");
        if local.is_dir() {
            return local;
        }
        storage::documents_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FontStyle;
    use tempfile::TempDir;

    #[test]
    fn test_preferences_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = Preferences::default();
        prefs.settings.style = FontStyle::Bold;
        prefs.settings.size = 18;
        prefs.recent.add(PathBuf::from("/tmp/a.txt"));
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn test_corrupt_preferences_fall_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
        assert_eq!(Preferences::load_or_default(&dir.path().join("absent.json")), Preferences::default());
    }

    #[test]
    fn test_picker_root_uses_configured_dir() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences { assets_dir: Some(dir.path().to_path_buf()), ..Default::default() };
        assert_eq!(prefs.picker_root(), dir.path());
    }
}
