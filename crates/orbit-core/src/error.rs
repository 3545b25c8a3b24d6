//! Error types for orbit-tools.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for orbit-tools operations.
#[derive(Error, Debug)]
pub enum OrbitError {
    /// An input file could not be opened or read.
    #[error("cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file was read but its contents are not valid.
    #[error("cannot parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Construction was requested before a blueprint was selected.
    #[error("no blueprint selected - call select_blueprint() first")]
    NoBlueprintSelected,

    /// Deletion was requested while nothing is constructed.
    #[error("nothing constructed")]
    NothingConstructed,

    /// A library path does not contain a numeric asset id.
    #[error("invalid asset library path '{0}'")]
    InvalidAssetPath(String),

    /// An overridden object has a different number of material slots than its reference.
    #[error("object '{object}' has {actual} material slots, reference has {expected}")]
    MaterialSlotMismatch {
        object: String,
        expected: usize,
        actual: usize,
    },

    /// A replacement material is not linked from an asset library.
    #[error("material '{material}' on object '{object}' is not linked from a library")]
    UnlinkedMaterial { object: String, material: String },

    /// Recreating the output directory would delete the directory being scanned.
    #[error("output '{}' contains scan root '{}'", output.display(), root.display())]
    OutputContainsRoot { output: PathBuf, root: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrbitError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Wraps a JSON error with the path of the file being parsed.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for orbit-tools operations.
pub type Result<T> = std::result::Result<T, OrbitError>;
