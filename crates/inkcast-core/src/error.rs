//! Error types for the dashboard seams
//!
//! Each external collaborator (configuration, weather source, display sink,
//! icon assets) gets its own error enum. Drawing itself never fails because
//! the canvas is an in-memory framebuffer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A value is out of its allowed range
    #[error("Invalid configuration value for `{key}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value
        key: &'static str,
        /// Human readable explanation
        reason: String,
    },
}

/// Errors raised by a weather source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no data for this cycle
    #[error("Weather data unavailable: {0}")]
    Unavailable(String),

    /// The snapshot file could not be read
    #[error("Failed to read weather snapshot {path}: {source}")]
    Io {
        /// Path of the snapshot file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not a valid snapshot
    #[error("Failed to parse weather snapshot {path}: {source}")]
    Parse {
        /// Path of the snapshot file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while delivering a frame to a sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// Could not prepare the output location
    #[error("Failed to prepare output directory {path}: {source}")]
    Io {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing the image failed
    #[error("Failed to write frame to {path}: {source}")]
    Encode {
        /// Output path
        path: PathBuf,
        /// Underlying image error
        #[source]
        source: image::ImageError,
    },
}

/// Errors raised while loading a single icon asset
#[derive(Debug, Error)]
pub enum IconError {
    /// No file exists for the icon
    #[error("Icon file not found: {0}")]
    Missing(PathBuf),

    /// The file exists but could not be decoded
    #[error("Failed to decode icon {path}: {source}")]
    Decode {
        /// Icon file path
        path: PathBuf,
        /// Underlying image error
        #[source]
        source: image::ImageError,
    },
}

/// Top-level error for a render cycle
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration problem
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Weather source problem
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Display sink problem
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
