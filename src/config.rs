//! Configuration file handling for glyphcast.
//!
//! Loads configuration from `~/.config/glyphcast/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, Mode};

/// Built-in output width in characters.
pub const DEFAULT_WIDTH: u32 = 200;

/// Configuration file structure for glyphcast.
/// Loaded from ~/.config/glyphcast/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub color: bool,
}

impl RenderConfig {
    /// Parsed output mode, if one is set.
    pub fn mode(&self) -> Result<Option<Mode>, ConfigError> {
        self.mode
            .as_deref()
            .map(|name| {
                Mode::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                    key: "render.mode",
                    value: name.to_string(),
                    expected: "ascii, ansi or braille",
                })
            })
            .transpose()
    }

    /// Parsed ASCII charset, if one is set.
    pub fn charset(&self) -> Result<Option<CharSet>, ConfigError> {
        self.charset
            .as_deref()
            .map(|name| {
                CharSet::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                    key: "render.charset",
                    value: name.to_string(),
                    expected: "simple or detailed",
                })
            })
            .transpose()
    }

    /// Configured width, rejecting zero.
    pub fn width(&self) -> Result<Option<u32>, ConfigError> {
        match self.width {
            Some(0) => Err(ConfigError::InvalidValue {
                key: "render.width",
                value: "0".to_string(),
                expected: "a width greater than 0",
            }),
            other => Ok(other),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load a config file the user named explicitly; a missing file is an
    /// error rather than a silent fallback to defaults.
    pub fn load_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::IoError {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            });
        }
        Self::load(Some(path))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Default config file contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# glyphcast configuration

[render]
# Output mode: ascii, ansi, braille
mode = "braille"
# Output width in characters
width = 200
# ASCII glyph table: simple, detailed
charset = "detailed"
# Tint ASCII glyphs with the 256-color palette
color = false
"#;

/// Write the default config file, refusing to overwrite an existing one.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    AlreadyExists {
        path: PathBuf,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue {
                key,
                value,
                expected,
            } => {
                write!(f, "Invalid {} '{}' (expected {})", key, value, expected)
            }
            ConfigError::AlreadyExists { path } => {
                write!(
                    f,
                    "Config file already exists: {}\nUse 'glyphcast config show' to view current settings.",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphcast").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphcast/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[render]\nmode = \"ansi\"\nwidth = 80\ncharset = \"simple\"\ncolor = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.render.mode().unwrap(), Some(Mode::Ansi));
        assert_eq!(config.render.width().unwrap(), Some(80));
        assert_eq!(config.render.charset().unwrap(), Some(CharSet::Simple));
        assert!(config.render.color);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render\nmode = ").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_explicit_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_explicit(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_mode_name() {
        let config = Config::parse("[render]\nmode = \"sixel\"\n").unwrap();
        let err = config.render.mode().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "render.mode", .. }));
    }

    #[test]
    fn test_invalid_charset_name() {
        let config = Config::parse("[render]\ncharset = \"blocks\"\n").unwrap();
        assert!(config.render.charset().is_err());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = Config::parse("[render]\nwidth = 0\n").unwrap();
        assert!(config.render.width().is_err());
    }

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.render.mode().unwrap(), Some(Mode::Braille));
        assert_eq!(config.render.width().unwrap(), Some(DEFAULT_WIDTH));
        assert_eq!(config.render.charset().unwrap(), Some(CharSet::Detailed));
        assert!(!config.render.color);
    }

    #[test]
    fn test_write_default_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_default(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_write_default_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = write_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn test_default_path_file_name() {
        let path = default_path();
        assert!(path.ends_with("glyphcast/config.toml"));
    }
}
