use crate::convert::Precision;
use crate::error::ConfigError;
use crate::settings::state::{Tab, Theme};
use crate::transfer::ProgressSettings;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "SMARTCONV_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "smartconv.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Decimal places per dimension
    #[serde(default)]
    pub display: Precision,

    // Progress bar simulation
    #[serde(default)]
    pub progress: ProgressSettings,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub default_tab: Tab,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Like [`Config::load_or_default`], but an unreadable or malformed file is
    /// logged and replaced by defaults
    pub fn load_or_warn<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_or_default(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Config path: explicit flag, then `SMARTCONV_CONFIG`, then `./smartconv.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    config_path_from_env(std::env::var_os(CONFIG_ENV_VAR))
}

/// An unset or empty `SMARTCONV_CONFIG` means the default file name
fn config_path_from_env(value: Option<OsString>) -> PathBuf {
    match value {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.display.speed, 3);
        assert_eq!(config.progress.cap_seconds, 20.0);
        assert_eq!(config.progress.tick_ms, 100);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.ui.default_tab, Tab::FileTransfer);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::load_from_str(
            r#"
[display]
weight = 2

[progress]
cap_seconds = 5.0

[ui]
theme = "light"
default_tab = "temperature"
"#,
        )
        .unwrap();
        assert_eq!(config.display.weight, 2);
        assert_eq!(config.display.distance, 4);
        assert_eq!(config.progress.cap_seconds, 5.0);
        assert_eq!(config.progress.tick_ms, 100);
        assert_eq!(config.ui.theme, Theme::Light);
        assert_eq!(config.ui.default_tab, Tab::Temperature);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::load_from_str("[ui]\ntheme = \"sepia\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        let mut config = Config::default();
        config.ui.theme = Theme::Light;
        config.display.temperature = 1;
        config.save_to_file(&path).unwrap();

        let reloaded = Config::load_from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_config_path_from_env() {
        assert_eq!(
            config_path_from_env(Some(OsString::from("/etc/smartconv/site.toml"))),
            PathBuf::from("/etc/smartconv/site.toml")
        );
        assert_eq!(
            config_path_from_env(Some(OsString::new())),
            PathBuf::from(DEFAULT_CONFIG_FILE)
        );
        assert_eq!(config_path_from_env(None), PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "display = \"oops\"\n").unwrap();

        assert!(matches!(
            Config::load_or_default(&path),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(Config::load_or_warn(&path), Config::default());
    }

    #[test]
    fn test_missing_or_valid_file_with_load_or_warn() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        assert_eq!(Config::load_or_warn(&path), Config::default());

        std::fs::write(&path, "[display]\nspeed = 1\n").unwrap();
        assert_eq!(Config::load_or_warn(&path).display.speed, 1);
    }
}
