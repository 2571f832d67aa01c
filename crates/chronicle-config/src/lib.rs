use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Reader configuration: where the library lives, and optionally where
/// media (audio, imagery) is served from.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub library_path: PathBuf,
    #[serde(default)]
    pub media_base: Option<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded library path
        config.library_path = Self::expand_path(&config.library_path).unwrap_or(config.library_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chronicle");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_path_expands_the_tilde() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/chronicle/config.toml"));
    }

    #[test]
    fn serialization_round_trip() {
        let original = Config {
            library_path: PathBuf::from("/tmp/test-library"),
            media_base: Some("https://cdn.example.net/chronicle".to_string()),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.library_path, deserialized.library_path);
        assert_eq!(original.media_base, deserialized.media_base);
    }

    #[test]
    fn media_base_is_optional() {
        let config: Config = toml::from_str(r#"library_path = "/tmp/lib""#).unwrap();
        assert_eq!(config.media_base, None);
    }

    #[test]
    fn load_returns_none_when_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");
        assert!(Config::load_from_path(&missing).unwrap().is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let config = Config {
            library_path: PathBuf::from("/tmp/test-library"),
            media_base: None,
        };

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.library_path, config.library_path);
        assert_eq!(loaded.media_base, None);
    }

    #[test]
    fn tilde_in_library_path_is_expanded() {
        let config_content = r#"
library_path = "~/articles/library"
"#;
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, config_content).unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        let path_str = loaded.library_path.to_string_lossy();
        assert!(!path_str.starts_with('~'));
        assert!(path_str.contains("articles/library"));
    }

    #[test]
    fn malformed_toml_reports_the_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "library_path = [not toml").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
