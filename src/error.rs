use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with the settings file or CLI overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cell size {cell_size} must be between 1 and the box size {box_size}")]
    InvalidGeometry { box_size: u16, cell_size: u16 },

    #[error("board of {side}x{side} cells is outside the playable range {min}..={max}")]
    GridSide { side: u16, min: u16, max: u16 },

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("unknown {field} color {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

/// Top-level failure of the game binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to open log file {}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    LogInit(String),
}
