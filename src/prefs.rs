// Presentation preferences.
// Theme selection and the skills list, persisted in the config directory.

use serde::{Deserialize, Serialize};

use crate::cache::{paths, store};
use crate::error::Result;

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// User preferences, persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    /// Technology names counted for the technologies stat.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Preferences {
    /// Load preferences from the config directory. Missing or unreadable
    /// files yield the defaults.
    pub fn load() -> Self {
        paths::prefs_path()
            .and_then(|path| store::read_json(&path).ok().flatten())
            .unwrap_or_default()
    }

    /// Save preferences to the config directory.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = paths::prefs_path() {
            store::write_json(&path, self)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::store;
    use tempfile::TempDir;

    #[test]
    fn toggle_flips_theme() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn roundtrips_through_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");

        let prefs = Preferences {
            theme: Theme::Light,
            skills: vec!["Rust".to_string(), "Python".to_string()],
        };
        store::write_json(&path, &prefs).unwrap();

        let loaded: Preferences = store::read_json(&path).unwrap().unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded: Preferences = store::read_json(&path).unwrap().unwrap();
        assert_eq!(loaded, Preferences::default());
    }
}
