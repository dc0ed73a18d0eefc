use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "tasks.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Task file used when none is given on the command line.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/checklist/config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("checklist").join("config.toml"))
        }
    }

    /// Loads the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_data_file() {
        let config = AppConfig::default();
        assert_eq!(config.effective_data_file(), PathBuf::from("tasks.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = \"/tmp/diary.json\"\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(
            config.effective_data_file(),
            PathBuf::from("/tmp/diary.json")
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml"));
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_invalid_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = [not toml").unwrap();

        let config = AppConfig::load_from(&path);
        assert!(config.data_file.is_none());
    }
}
