// SPDX-License-Identifier: MIT
//
// Configuration — optional TOML defaults for the command-line tool.
//
// Resolution order:
//
//   1. --config <PATH> / HUEFORGE_CONFIG   (must exist)
//   2. <config_dir>/hueforge/config.toml   (used when present)
//   3. built-in defaults
//
// Every section and field is optional. Command-line flags override
// whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level config file contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub gradient: GradientConfig,
    pub output: OutputConfig,
}

/// `[palette]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Scheme name. Unknown names fall back to complementary.
    pub scheme: String,
    /// Palette size, clamped into 2..=8 when used.
    pub count: usize,
    /// Base color as `#RRGGBB` when neither `--base` nor `--hsv` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            scheme: "complementary".to_string(),
            count: 5,
            base: None,
        }
    }
}

/// `[gradient]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub angle: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            kind: "linear".to_string(),
            angle: hue_gradient::DEFAULT_ANGLE,
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON instead of text.
    pub json: bool,
}

impl Config {
    /// Per-user config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hueforge").join("config.toml"))
    }

    /// Resolve and load the config.
    ///
    /// An explicit path must exist and parse. The per-user file is only
    /// read when it exists; otherwise defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and parse a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
            [palette]
            scheme = "triadic"
            count = 7
            base = "#FF8800"

            [gradient]
            type = "conic"
            angle = 45

            [output]
            json = true
            "##
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.palette.scheme, "triadic");
        assert_eq!(config.palette.count, 7);
        assert_eq!(config.palette.base.as_deref(), Some("#FF8800"));
        assert_eq!(config.gradient.kind, "conic");
        assert!((config.gradient.angle - 45.0).abs() < f64::EPSILON);
        assert!(config.output.json);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[palette]\nscheme = \"analogous\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.palette.scheme, "analogous");
        assert_eq!(config.palette.count, 5);
        assert_eq!(config.gradient, GradientConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn empty_file_is_default() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(Config::from_file(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[palette]\ncount = \"many\"").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn roundtrip_through_toml() {
        let config = Config {
            palette: PaletteConfig {
                scheme: "tetradic".into(),
                count: 4,
                base: None,
            },
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, text).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }
}
