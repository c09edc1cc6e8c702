//! Configuration file support for sketchloop.
//!
//! Settings are read from `~/.config/sketchloop/config.toml` (or a path given
//! on the command line). They cover the headless canvas size, frame pacing and
//! PNG export. If no config file exists, defaults are used.

pub mod types;

pub use types::{CanvasConfig, ExportConfig, FrameConfig};

use crate::export::{FrameExporter, expand_tilde, format_template};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_DIMENSION: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "#202020"
///
/// [frames]
/// fps = 30.0
/// max_frames = 120
///
/// [export]
/// directory = "~/Pictures/sketchloop"
/// filename_template = "frame_%Y%m%d_%H%M%S"
/// every = 1
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Off-screen surface settings
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Frame pacing and limits
    #[serde(default)]
    pub frames: FrameConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 1 - 16384
    /// - `canvas.background`: must parse as a color, otherwise white
    /// - `frames.fps`: 1.0 - 240.0
    /// - `export.filename_template`: must be a valid chrono format, otherwise the default
    /// - `export.every`: at least 1
    ///
    /// Also used after command line overrides are applied.
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_DIMENSION).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_DIMENSION
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_DIMENSION);
        }

        if !(1..=MAX_DIMENSION).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_DIMENSION
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_DIMENSION);
        }

        if let Err(err) = self.canvas.background.to_color() {
            log::warn!("Invalid canvas background ({}), falling back to white", err);
            self.canvas.background = types::default_background();
        }

        if !(1.0..=240.0).contains(&self.frames.fps) {
            log::warn!(
                "Invalid fps {:.1}, clamping to 1.0-240.0 range",
                self.frames.fps
            );
            self.frames.fps = if self.frames.fps.is_nan() {
                crate::frame::DEFAULT_FPS
            } else {
                self.frames.fps.clamp(1.0, 240.0)
            };
        }

        if let Err(err) = format_template(&self.export.filename_template) {
            log::warn!("{}, falling back to the default template", err);
            self.export.filename_template = types::default_filename_template();
        }

        if self.export.every == 0 {
            log::warn!("Invalid export interval 0, using 1");
            self.export.every = 1;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchloop");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// doesn't exist. All loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds a frame exporter from the `[export]` section.
    pub fn frame_exporter(&self) -> Result<FrameExporter> {
        self.frame_exporter_in(expand_tilde(&self.export.directory))
    }

    /// Builds a frame exporter writing into `directory` instead of the configured one.
    pub fn frame_exporter_in(&self, directory: PathBuf) -> Result<FrameExporter> {
        FrameExporter::new(
            directory,
            &self.export.filename_template,
            self.export.every,
        )
        .context("Invalid [export] filename_template")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ColorValue;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!((config.canvas.width, config.canvas.height), (640, 480));
        assert_eq!(config.frames.fps, 60.0);
        assert_eq!(config.frames.max_frames, 0);
        assert_eq!(config.export.every, 1);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [canvas]
            width = 0
            height = 99999
            background = "mauve-ish"

            [frames]
            fps = 1000.0

            [export]
            every = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_DIMENSION);
        assert_eq!(config.canvas.background, ColorValue::Name("white".into()));
        assert_eq!(config.frames.fps, 240.0);
        assert_eq!(config.export.every, 1);
    }

    #[test]
    fn invalid_filename_template_falls_back_to_default() {
        let config = Config::from_toml("[export]\nfilename_template = \"frame_%Q\"").unwrap();
        assert_eq!(config.export.filename_template, "frame_%Y%m%d_%H%M%S");
        assert!(config.frame_exporter_in(PathBuf::from("/tmp")).is_ok());
    }

    #[test]
    fn overrides_are_clamped_on_revalidation() {
        let mut config = Config::default();
        config.frames.fps = 1e-300;
        config.canvas.width = i32::MAX;
        config.validate_and_clamp();
        assert_eq!(config.frames.fps, 1.0);
        assert_eq!(config.canvas.width, MAX_DIMENSION);
    }

    #[test]
    fn background_accepts_arrays() {
        let config = Config::from_toml("[canvas]\nbackground = [10, 20, 30, 0.5]").unwrap();
        assert_eq!(config.canvas.background, ColorValue::Rgba(10, 20, 30, 0.5));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[canvas\nwidth = ").is_err());
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.canvas.width, 640);
    }

    #[test]
    fn load_from_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[frames]\nfps = 24.0\nmax_frames = 12\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.frames.fps, 24.0);
        assert_eq!(config.frames.max_frames, 12);
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("canvas").is_some());
        assert!(properties.get("frames").is_some());
        assert!(properties.get("export").is_some());
    }
}
