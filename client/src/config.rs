use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, ensure};
use serde::Serialize;

use corridor_common::{
    images::ImagePool,
    theme::{ThemeConfig, ThemeKind},
};

use crate::{
    constants::{FRAME_EXTENSIONS, HEADLESS_REPORT_INTERVAL, PLACEHOLDER_FRAME_COUNT},
    resources::HeadlessRun,
};

// ============================================================================
// Theme Selection
// ============================================================================

// A theme file, when given, wins over the named preset
pub fn resolve_theme(kind: ThemeKind, theme_file: Option<&Path>) -> Result<ThemeConfig> {
    match theme_file {
        Some(path) => ThemeConfig::from_json_file(path).context("failed to load theme file"),
        None => Ok(ThemeConfig::preset(kind)),
    }
}

// ============================================================================
// Frame Images
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSource {
    // Path relative to the asset root
    File(String),
    // Generated solid swatch
    Placeholder(usize),
}

impl FrameSource {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

// Image files under `assets_root/frames_dir`, sorted by file name. A missing
// directory yields no frames.
pub fn discover_frames(assets_root: &Path, frames_dir: &str) -> Result<Vec<FrameSource>> {
    let dir = assets_root.join(frames_dir);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err).with_context(|| format!("failed to read frames dir {}", dir.display())),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && has_frame_extension(&path) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let prefix = frames_dir.trim_end_matches('/');
    Ok(names
        .into_iter()
        .map(|name| FrameSource::File(format!("{prefix}/{name}")))
        .collect())
}

fn has_frame_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FRAME_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

// Fall back to placeholder swatches when nothing was found
pub fn frame_pool(sources: Vec<FrameSource>) -> Result<ImagePool<FrameSource>> {
    let sources = if sources.is_empty() {
        (0..PLACEHOLDER_FRAME_COUNT).map(FrameSource::Placeholder).collect()
    } else {
        sources
    };
    Ok(ImagePool::new(sources)?)
}

// Directory Bevy resolves relative asset paths against
#[must_use]
pub fn asset_root(assets_dir: &str) -> PathBuf {
    bevy::asset::io::file::FileAssetReader::get_base_path().join(assets_dir)
}

// ============================================================================
// Headless Runs
// ============================================================================

// Tick budget and fixed step for a headless run
pub fn headless_settings(ticks: u64, tick_hz: f64) -> Result<(HeadlessRun, Duration)> {
    ensure!(tick_hz.is_finite() && tick_hz > 0.0, "tick rate must be positive, got {tick_hz}");
    ensure!(ticks > 0, "a headless run needs at least one tick");
    let run = HeadlessRun {
        ticks_left: ticks,
        report_every: HEADLESS_REPORT_INTERVAL,
    };
    Ok((run, Duration::from_secs_f64(1.0 / tick_hz)))
}
