//! Configuration type definitions.

use crate::draw::ColorValue;
use crate::frame::DEFAULT_FPS;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Off-screen surface settings for headless runs.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Color the built-in demos paint at the start of every frame.
    /// Accepts a CSS color name, hex string, `rgb(...)`/`hsl(...)` or an
    /// `[r, g, b]` / `[r, g, b, a]` array
    #[serde(default = "default_background")]
    pub background: ColorValue,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Frame loop pacing.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FrameConfig {
    /// Target frames per second (valid range: 1.0 - 240.0)
    #[serde(default = "default_fps")]
    pub fps: f64,

    /// Stop after this many frames; 0 runs until interrupted
    #[serde(default)]
    pub max_frames: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            max_frames: 0,
        }
    }
}

/// PNG export of rendered frames.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory frames are written to (`~` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name prefix; supports chrono format specifiers such as `%Y%m%d`.
    /// The frame number and `.png` are appended
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Export every Nth frame (minimum 1)
    #[serde(default = "default_every")]
    pub every: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
            every: default_every(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    640
}

fn default_height() -> i32 {
    480
}

pub(super) fn default_background() -> ColorValue {
    ColorValue::Name("white".to_string())
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

fn default_export_directory() -> String {
    "~/Pictures/sketchloop".to_string()
}

pub(super) fn default_filename_template() -> String {
    "frame_%Y%m%d_%H%M%S".to_string()
}

fn default_every() -> u64 {
    1
}
