#![doc = include_str!("../README.md")]

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use taupe_core::{Locale, LocaleError, Theme};
use thiserror::Error;

/// Name of the configuration file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = "taupe.toml";

/// Page title used when the configuration does not override it.
pub use taupe_core::DEFAULT_TITLE;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("taupe.toml configuration file not found at '{}'", .0.display())]
    NotFound(PathBuf),
    /// Failed to read or write the configuration file.
    #[error("Failed to access configuration file: {0}")]
    ReadError(#[from] io::Error),
    /// Failed to parse the configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Failed to serialize the configuration.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
    /// The `locale` value is not a supported language.
    #[error("Invalid locale '{value}'")]
    InvalidLocale {
        value: String,
        #[source]
        source: LocaleError,
    },
    /// The `theme` value is neither `light` nor `dark`.
    #[error("Invalid theme '{value}' (expected 'light' or 'dark')")]
    InvalidTheme {
        value: String,
        #[source]
        source: strum::ParseError,
    },
}

/// The contents of `taupe.toml`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaupeConfig {
    /// Initial locale of a session, e.g. `"en"` or `"fr-CA"`.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Initial theme of a session, `"light"` or `"dark"`.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Optional page title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn default_locale() -> String {
    Locale::default().to_string()
}

fn default_theme() -> String {
    Theme::default().to_string()
}

impl Default for TaupeConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            theme: default_theme(),
            title: None,
        }
    }
}

impl TaupeConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: TaupeConfig = toml::from_str(&content)?;

        tracing::debug!(path = %path.display(), "Read configuration");
        Ok(config)
    }

    /// Reads `taupe.toml` from a directory.
    pub fn read_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        Self::read_from_path(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Reads the configuration, or returns the defaults when the file is absent.
    pub fn read_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::read_from_path(path) {
            Err(ConfigError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            },
            other => other,
        }
    }

    /// Persists the configuration, creating parent directories as needed.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, toml::to_string(self)?)?;
        tracing::debug!(path = %path.display(), "Wrote configuration");
        Ok(())
    }

    /// Returns the configured locale, negotiated onto a supported one.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        self.locale
            .parse::<Locale>()
            .map_err(|source| ConfigError::InvalidLocale {
                value: self.locale.clone(),
                source,
            })
    }

    /// Returns the configured theme.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        self.theme
            .parse::<Theme>()
            .map_err(|source| ConfigError::InvalidTheme {
                value: self.theme.clone(),
                source,
            })
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale.to_string();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_from_path_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config_content = r#"
locale = "fr"
theme = "dark"
title = "My page"
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = TaupeConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.locale().unwrap(), Locale::Fr);
        assert_eq!(config.theme().unwrap(), Theme::Dark);
        assert_eq!(config.title(), "My page");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let config = TaupeConfig::read_from_dir(temp_dir.path()).unwrap();
        assert_eq!(config, TaupeConfig::default());
        assert_eq!(config.locale().unwrap(), Locale::En);
        assert_eq!(config.theme().unwrap(), Theme::Light);
        assert_eq!(config.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_read_from_path_file_not_found() {
        let result = TaupeConfig::read_from_path("/non/existent/path/taupe.toml");
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_read_or_default_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = TaupeConfig::read_or_default(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, TaupeConfig::default());
    }

    #[test]
    fn test_read_from_path_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "locale = \"en\"\n[unexpected]\ntheme = \"dark\"\n").unwrap();

        let result = TaupeConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[rstest]
    #[case("fr-CA", Locale::Fr)]
    #[case("en-GB", Locale::En)]
    fn test_locale_is_negotiated(#[case] value: &str, #[case] expected: Locale) {
        let config = TaupeConfig {
            locale: value.to_string(),
            ..TaupeConfig::default()
        };
        assert_eq!(config.locale().unwrap(), expected);
    }

    #[test]
    fn test_invalid_locale() {
        let config = TaupeConfig {
            locale: "de".to_string(),
            ..TaupeConfig::default()
        };

        assert!(matches!(
            config.locale(),
            Err(ConfigError::InvalidLocale { value, .. }) if value == "de"
        ));
    }

    #[test]
    fn test_padded_values_are_accepted() {
        let config = TaupeConfig {
            locale: " fr ".to_string(),
            theme: " dark ".to_string(),
            title: None,
        };

        assert_eq!(config.locale().unwrap(), Locale::Fr);
        assert_eq!(config.theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_invalid_theme() {
        let config = TaupeConfig {
            theme: "sepia".to_string(),
            ..TaupeConfig::default()
        };

        assert!(matches!(
            config.theme(),
            Err(ConfigError::InvalidTheme { value, .. }) if value == "sepia"
        ));
    }

    #[test]
    fn test_write_then_read_persists_choices() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = TaupeConfig::default();
        config.set_locale(Locale::Fr);
        config.set_theme(Theme::Dark);
        config.write_to_path(&config_path).unwrap();

        let written = fs::read_to_string(&config_path).unwrap();
        assert!(written.contains("locale = \"fr\""));
        assert!(written.contains("theme = \"dark\""));
        assert!(!written.contains("title"));

        let read = TaupeConfig::read_from_path(&config_path).unwrap();
        assert_eq!(read, config);
    }
}
