use std::path::PathBuf;
use thiserror::Error;

/// Library errors using thiserror for structured error handling.
///
/// `SetupError` is fatal and stops the run before any file is touched.
/// `AssetError` describes a single skipped or failed item; the batch carries on.

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse icon configuration")]
    ParseFailed(#[source] serde_json::Error),

    #[error("Invalid icon configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("SVG rasterization backend is unavailable")]
    MissingCapability(#[source] RasterError),

    #[error("Icon configuration could not be loaded")]
    Config(#[from] ConfigError),

    #[error("Failed to compile attribute pattern")]
    Pattern(#[from] regex::Error),
}

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to parse SVG: {0}")]
    Parse(#[from] resvg::usvg::Error),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encode(String),
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read SVG file: {path}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SVG file is empty: {path}")]
    EmptySource { path: PathBuf },

    #[error("Conversion failed for {path}")]
    ConversionFailure {
        path: PathBuf,
        #[source]
        source: RasterError,
    },

    #[error("Failed to write PNG file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// The source or output path the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            AssetError::UnreadableSource { path, .. }
            | AssetError::EmptySource { path }
            | AssetError::ConversionFailure { path, .. }
            | AssetError::WriteFailed { path, .. } => path,
        }
    }
}
