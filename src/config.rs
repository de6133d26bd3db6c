use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_ENV_VAR: &str = "WORKOUT_SESSION_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "workout_session.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub form: FormDefaults,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Workout Session".to_string(),
            width: 480.0,
            height: 800.0,
        }
    }
}

/// Values a fresh new-workout form starts with.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormDefaults {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            name: "New Workout".to_string(),
            sets: "5".to_string(),
            reps: "5".to_string(),
            weight: String::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the config at `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }

    /// `$WORKOUT_SESSION_CONFIG` or `workout_session.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Loads from [`AppConfig::default_path`], falling back to defaults on error.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let json = r#"{ "form": { "name": "Squat" }, "window": { "width": 600.0 } }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.form.name, "Squat");
        assert_eq!(config.form.sets, "5");
        assert_eq!(config.form.reps, "5");
        assert_eq!(config.form.weight, "");
        assert_eq!(config.window.width, 600.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.window.title, "Workout Session");
    }

    #[test]
    fn load_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "form": {{ "weight": "135" }} }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.form.weight, "135");
        assert_eq!(config.form.name, "New Workout");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn directory_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
