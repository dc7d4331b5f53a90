use anyhow::{Context, Result};
use crossterm::style::Color;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::try_exists;

const DEFAULT_PROMPT: &str = ">";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Initial state of the cursor highlight (toggled with `.`)
    pub show_cursor: bool,
    /// ANSI background highlight; bracket markers otherwise
    pub use_color: bool,
    pub cursor_color: CursorColor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum undo depth, `None` for unlimited
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorColor {
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Red,
}

impl CursorColor {
    pub fn to_color(self) -> Color {
        match self {
            CursorColor::Green => Color::DarkGreen,
            CursorColor::Blue => Color::DarkBlue,
            CursorColor::Cyan => Color::DarkCyan,
            CursorColor::Magenta => Color::DarkMagenta,
            CursorColor::Yellow => Color::DarkYellow,
            CursorColor::Red => Color::DarkRed,
        }
    }
}

fn default_prompt() -> String {
    String::from(DEFAULT_PROMPT)
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_cursor: false,
            use_color: true,
            cursor_color: CursorColor::Green,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            display: DisplayConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Config {
    /// Loads the config from `explicit` if given, otherwise from the
    /// discovered location. Missing or broken files fall back to defaults.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(Self::config_path) {
            Some(path) => Self::load_from(&path).await,
            None => {
                log::info!("No config location available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub async fn load_from(config_path: &Path) -> Result<Self> {
        match try_exists(config_path).await {
            Ok(true) => {}
            Ok(false) => {
                log::info!(
                    "Config file {} does not exist, using defaults",
                    config_path.display()
                );
                return Ok(Self::default());
            }
            Err(io_err) => {
                log::warn!(
                    "Cannot access config file {}: {}, using defaults",
                    config_path.display(),
                    io_err
                );
                return Ok(Self::default());
            }
        }

        let content = match tokio::fs::read_to_string(config_path).await {
            Ok(content) => content,
            Err(io_err) => {
                log::error!("Failed to read config file: {}", io_err);
                return Ok(Self::default());
            }
        };

        if content.trim().is_empty() {
            log::warn!("Config file is empty, using defaults");
            return Ok(Self::default());
        }

        match serde_json::from_str::<Self>(&content) {
            Ok(mut config) => {
                config.validate()?;
                log::info!("Successfully loaded config from: {}", config_path.display());
                Ok(config)
            }
            Err(json_err) => {
                log::error!("Failed to parse config file: {}", json_err);

                // Keep the broken file around for the user to fix
                let backup_path = config_path.with_extension("bak");
                if let Err(e) = tokio::fs::copy(config_path, &backup_path).await {
                    log::warn!("Failed to backup broken config: {}", e);
                } else {
                    log::info!("Backed up broken config to: {}", backup_path.display());
                }

                Ok(Self::default())
            }
        }
    }

    /// Writes the config to `explicit` or the discovered location and
    /// returns the path written.
    pub async fn save(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        let config_path = explicit
            .map(Path::to_path_buf)
            .or_else(Self::config_path)
            .ok_or_else(|| anyhow::anyhow!("Could not determine a config file location"))?;

        let mut config_to_save = self.clone();
        config_to_save.validate()?;

        if let Some(parent) = config_path.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
            log::debug!("Config directory exists or was created: {}", parent.display());
        }

        let content = serde_json::to_string_pretty(&config_to_save)
            .context("Failed to serialize config")?;
        tokio::fs::write(&config_path, content)
            .await
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        log::info!("Successfully saved config to: {}", config_path.display());
        Ok(config_path)
    }

    /// Validate configuration values and fix invalid ones
    pub fn validate(&mut self) -> Result<()> {
        let mut has_issues = false;

        if self.prompt.is_empty() || self.prompt.contains('\n') {
            log::warn!("Invalid prompt {:?}, using default", self.prompt);
            self.prompt = default_prompt();
            has_issues = true;
        }

        if self.history.max_entries == Some(0) {
            log::warn!("History limit of 0 is not usable, keeping unlimited history");
            self.history.max_entries = None;
            has_issues = true;
        }

        if has_issues {
            log::info!("Configuration validation completed with corrections");
        }

        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("MONOLINE_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(dir) = std::env::var("MONOLINE_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.json"));
        }

        ProjectDirs::from("com", "monoline", "monoline")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.prompt, ">");
        assert!(!config.display.show_cursor);
        assert!(config.display.use_color);
        assert_eq!(config.display.cursor_color, CursorColor::Green);
        assert!(config.history.max_entries.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"prompt\""));
        assert!(json.contains("\"display\""));
        assert!(json.contains("\"history\""));
        assert!(json.contains("\"Green\""));

        let config_from_json: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, config_from_json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "prompt": "$ " }"#).unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.history, HistoryConfig::default());

        let config: Config =
            serde_json::from_str(r#"{ "display": { "show_cursor": true } }"#).unwrap();
        assert!(config.display.show_cursor);
        assert!(config.display.use_color);
        assert_eq!(config.prompt, ">");
    }

    #[test]
    fn test_validate_repairs_values() {
        let mut config = Config::default();
        config.prompt.clear();
        config.history.max_entries = Some(0);

        config.validate().unwrap();
        assert_eq!(config.prompt, ">");
        assert!(config.history.max_entries.is_none());
    }

    #[test]
    fn test_cursor_color_mapping() {
        assert_eq!(CursorColor::Green.to_color(), Color::DarkGreen);
        assert_eq!(CursorColor::Red.to_color(), Color::DarkRed);
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = Config::load_from(&path).await.unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_unreachable_path_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("plain");
        std::fs::write(&not_a_dir, "").unwrap();

        // Parent is a regular file, so the existence check itself fails
        let path = not_a_dir.join("config.json");
        let config = Config::load_from(&path).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_empty_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "   \n").unwrap();

        let config = Config::load_from(&path).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_broken_file_is_backed_up() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = Config::load_from(&path).await.unwrap();
        assert_eq!(config, Config::default());

        let backup = temp_dir.path().join("config.bak");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.prompt = String::from("edit> ");
        config.display.show_cursor = true;
        config.display.cursor_color = CursorColor::Cyan;
        config.history.max_entries = Some(50);

        let written = config.save(Some(path.as_path())).await.unwrap();
        assert_eq!(written, path);

        let loaded = Config::load(Some(path.as_path())).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_load_honours_config_dir_env() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.json"),
            r#"{ "prompt": "env>" }"#,
        )
        .unwrap();

        // Only test that touches the MONOLINE_CONFIG_* variables
        let previous = (
            std::env::var("MONOLINE_CONFIG_DIR").ok(),
            std::env::var("MONOLINE_CONFIG_PATH").ok(),
        );
        std::env::set_var("MONOLINE_CONFIG_DIR", temp_dir.path());
        std::env::remove_var("MONOLINE_CONFIG_PATH");

        let config = Config::load(None).await.unwrap();

        match previous.0 {
            Some(value) => std::env::set_var("MONOLINE_CONFIG_DIR", value),
            None => std::env::remove_var("MONOLINE_CONFIG_DIR"),
        }
        match previous.1 {
            Some(value) => std::env::set_var("MONOLINE_CONFIG_PATH", value),
            None => std::env::remove_var("MONOLINE_CONFIG_PATH"),
        }

        assert_eq!(config.prompt, "env>");
    }
}
