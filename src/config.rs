//! Configuration file handling for asciify.
//!
//! Loads configuration from `<config dir>/asciify/config.toml` or a custom path,
//! and merges it with command-line flags and the detected terminal size.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{Palette, RenderOptions, DEFAULT_CHAR_ASPECT_RATIO, EDGES_DISABLED};

/// Fallback width when neither flags, config nor terminal provide one.
pub const DEFAULT_MAX_WIDTH: usize = 64;
/// Fallback height when neither flags, config nor terminal provide one.
pub const DEFAULT_MAX_HEIGHT: usize = 48;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Optional rendering settings. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub max_width: Option<u16>,
    pub max_height: Option<u16>,
    pub character_ratio: Option<f64>,
    pub edge_threshold: Option<f64>,
    pub retro_colors: Option<bool>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            log::info!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("Failed to write config file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Check a character dimension is at least 1.
pub fn check_dimension(n: u16) -> Result<u16, String> {
    if n == 0 {
        return Err("Size must be at least 1".to_string());
    }
    Ok(n)
}

/// Check a character ratio is positive and finite.
pub fn check_character_ratio(ratio: f64) -> Result<f64, String> {
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(format!("Character ratio must be positive, got {}", ratio));
    }
    Ok(ratio)
}

/// Check an edge threshold lies in `0.0..=4.0`.
pub fn check_edge_threshold(threshold: f64) -> Result<f64, String> {
    if !(0.0..=EDGES_DISABLED).contains(&threshold) {
        return Err(format!(
            "Edge threshold must be between 0.0 and {}, got {}",
            EDGES_DISABLED, threshold
        ));
    }
    Ok(threshold)
}

/// Fully resolved rendering settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub max_width: usize,
    pub max_height: usize,
    pub character_ratio: f64,
    pub edge_threshold: f64,
    pub retro_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            character_ratio: DEFAULT_CHAR_ASPECT_RATIO,
            edge_threshold: EDGES_DISABLED,
            retro_colors: false,
        }
    }
}

impl Settings {
    /// Merge layers: `flags`, then `file`, then the terminal size (bounds only),
    /// then built-in defaults. The merged values are range-checked.
    pub fn resolve(
        flags: &RenderConfig,
        file: &RenderConfig,
        terminal: Option<(u16, u16)>,
    ) -> Result<Self, ConfigError> {
        let (term_width, term_height) = match terminal {
            Some((w, h)) => (Some(w), Some(h)),
            None => (None, None),
        };

        let max_width = flags.max_width.or(file.max_width).or(term_width);
        let max_height = flags.max_height.or(file.max_height).or(term_height);
        let character_ratio = flags.character_ratio.or(file.character_ratio);
        let edge_threshold = flags.edge_threshold.or(file.edge_threshold);

        let defaults = Settings::default();
        Ok(Self {
            max_width: match max_width {
                Some(w) => usize::from(check_dimension(w).map_err(ConfigError::Invalid)?),
                None => defaults.max_width,
            },
            max_height: match max_height {
                Some(h) => usize::from(check_dimension(h).map_err(ConfigError::Invalid)?),
                None => defaults.max_height,
            },
            character_ratio: character_ratio
                .map(check_character_ratio)
                .transpose()
                .map_err(ConfigError::Invalid)?
                .unwrap_or(defaults.character_ratio),
            edge_threshold: edge_threshold
                .map(check_edge_threshold)
                .transpose()
                .map_err(ConfigError::Invalid)?
                .unwrap_or(defaults.edge_threshold),
            retro_colors: flags
                .retro_colors
                .or(file.retro_colors)
                .unwrap_or(defaults.retro_colors),
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            edge_threshold: self.edge_threshold,
            palette: Palette::from_retro(self.retro_colors),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}

/// Commented default config written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# asciify configuration

[render]
# Maximum output size in characters (default: terminal size, or 64x48)
# max_width = 64
# max_height = 48
# Height-to-width ratio of a terminal character cell
character_ratio = 2.0
# Edge detection threshold, 0.0 - 4.0 (4.0 disables edges)
edge_threshold = 4.0
# Use the 8-color retro palette instead of 24-bit color
retro_colors = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_section() {
        let config: Config = toml::from_str(
            r#"
            [render]
            max_width = 100
            edge_threshold = 1.5
            retro_colors = true
            "#,
        )
        .unwrap();
        assert_eq!(config.render.max_width, Some(100));
        assert_eq!(config.render.max_height, None);
        assert_eq!(config.render.edge_threshold, Some(1.5));
        assert_eq!(config.render.retro_colors, Some(true));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_render_key_rejected() {
        let result: Result<Config, _> = toml::from_str("[render]\nwidth = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.render.character_ratio, Some(2.0));
        assert_eq!(config.render.edge_threshold, Some(4.0));
        assert_eq!(config.render.retro_colors, Some(false));
    }

    #[test]
    fn test_resolve_defaults() {
        let s = Settings::resolve(&RenderConfig::default(), &RenderConfig::default(), None)
            .unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!((s.max_width, s.max_height), (64, 48));
    }

    #[test]
    fn test_resolve_precedence() {
        let flags = RenderConfig {
            max_width: Some(10),
            ..Default::default()
        };
        let file = RenderConfig {
            max_width: Some(20),
            max_height: Some(30),
            retro_colors: Some(true),
            ..Default::default()
        };
        let s = Settings::resolve(&flags, &file, Some((200, 50))).unwrap();
        assert_eq!(s.max_width, 10);
        assert_eq!(s.max_height, 30);
        assert!(s.retro_colors);
        assert_eq!(s.character_ratio, 2.0);
    }

    #[test]
    fn test_resolve_terminal_size() {
        let s = Settings::resolve(&RenderConfig::default(), &RenderConfig::default(), Some((120, 40)))
            .unwrap();
        assert_eq!((s.max_width, s.max_height), (120, 40));
    }

    #[test]
    fn test_resolve_rejects_invalid_file_values() {
        let cases = [
            RenderConfig {
                edge_threshold: Some(-1.0),
                ..Default::default()
            },
            RenderConfig {
                edge_threshold: Some(4.5),
                ..Default::default()
            },
            RenderConfig {
                character_ratio: Some(0.0),
                ..Default::default()
            },
            RenderConfig {
                character_ratio: Some(f64::INFINITY),
                ..Default::default()
            },
            RenderConfig {
                max_width: Some(0),
                ..Default::default()
            },
            RenderConfig {
                max_height: Some(0),
                ..Default::default()
            },
        ];
        for file in &cases {
            let err = Settings::resolve(&RenderConfig::default(), file, None).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{file:?}");
        }
    }

    #[test]
    fn test_flag_overrides_invalid_file_value() {
        let flags = RenderConfig {
            edge_threshold: Some(2.0),
            ..Default::default()
        };
        let file = RenderConfig {
            edge_threshold: Some(-1.0),
            ..Default::default()
        };
        let s = Settings::resolve(&flags, &file, None).unwrap();
        assert_eq!(s.edge_threshold, 2.0);
    }

    #[test]
    fn test_oversized_dimension_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str("[render]\nmax_width = 70000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_render_options() {
        let s = Settings {
            retro_colors: true,
            edge_threshold: 2.0,
            ..Default::default()
        };
        let opts = s.render_options();
        assert_eq!(opts.palette, Palette::Retro);
        assert_eq!(opts.edge_threshold, 2.0);
    }
}
