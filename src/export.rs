//! Writing rendered frames to PNG files.

use crate::error::{Result, SketchError};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Saves every `every`-th frame of a run as a PNG.
///
/// File names are `<template>_<frame>.png`, where the template is expanded
/// once with chrono format specifiers when the exporter is created, so all
/// frames of one run share the same prefix.
#[derive(Debug, Clone)]
pub struct FrameExporter {
    directory: PathBuf,
    prefix: String,
    every: u64,
    written: usize,
    last_written: Option<PathBuf>,
}

impl FrameExporter {
    /// Creates an exporter writing into `directory`.
    ///
    /// Fails with [`SketchError::InvalidArgument`] if `filename_template`
    /// contains an unknown chrono specifier.
    pub fn new(directory: impl Into<PathBuf>, filename_template: &str, every: u64) -> Result<Self> {
        Ok(Self {
            directory: directory.into(),
            prefix: format_template(filename_template)?,
            every: every.max(1),
            written: 0,
            last_written: None,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Number of files written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// The most recently written file.
    pub fn last_written(&self) -> Option<&Path> {
        self.last_written.as_deref()
    }

    /// File name used for `frame`.
    pub fn filename_for(&self, frame: u64) -> String {
        format!("{}_{:05}.png", self.prefix, frame)
    }

    /// Writes `surface` if `frame` falls on the export interval.
    ///
    /// Returns the path written, or `None` when the frame is skipped.
    pub fn export(&mut self, surface: &cairo::ImageSurface, frame: u64) -> Result<Option<PathBuf>> {
        if frame % self.every != 0 {
            return Ok(None);
        }

        let directory = ensure_directory_exists(&self.directory)?;
        let file_path = directory.join(self.filename_for(frame));

        let mut file = fs::File::create(&file_path)?;
        surface.write_to_png(&mut file)?;
        log::debug!("Exported frame {} to {}", frame, file_path.display());

        self.written += 1;
        self.last_written = Some(file_path.clone());
        Ok(Some(file_path))
    }
}

/// Expands chrono specifiers in `template` against the current local time.
pub fn format_template(template: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(template).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(SketchError::InvalidArgument(format!(
            "invalid filename template '{}'",
            template
        )));
    }

    let mut formatted = String::new();
    write!(formatted, "{}", Local::now().format_with_items(items.iter())).map_err(|_| {
        SketchError::InvalidArgument(format!("cannot format filename template '{}'", template))
    })?;
    Ok(formatted)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
