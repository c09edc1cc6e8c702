//! Error type shared by the canvas, the frame loop and frame export.

use thiserror::Error;

/// Errors that can occur while binding surfaces, running sketches or exporting frames.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode frame as PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SketchError> = std::result::Result<T, E>;
