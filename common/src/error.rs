use std::{io, path::PathBuf};

use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

// Configuration problems detected before the first tick. Per-tick operations
// never fail.
#[derive(Debug, Error)]
pub enum CorridorError {
    #[error("corridor needs at least one segment, got {0}")]
    NoSegments(usize),

    #[error("segment length must be positive and finite, got {0}")]
    InvalidSegmentLength(f32),

    #[error("image pool is empty")]
    EmptyImagePool,

    #[error("unknown theme '{0}' (expected sinister, warm or natural)")]
    UnknownTheme(String),

    #[error("invalid theme '{name}': {reason}")]
    InvalidTheme { name: String, reason: String },

    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),

    #[error("failed to read theme file {}", path.display())]
    ThemeRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse theme file {}", path.display())]
    ThemeParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = CorridorError> = std::result::Result<T, E>;
