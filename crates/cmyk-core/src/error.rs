//! Error types for cmyk-core

use thiserror::Error;

/// Result type for cmyk-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading profiles, building transforms or
/// reading configuration.
///
/// Conversions themselves never return these: parser, adapters and color
/// spaces report failure as an absent value.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The color management engine could not be brought up
    #[error("Color engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Profile bytes could not be retrieved
    #[error("Failed to load {key} profile: {reason}")]
    ProfileFetch { key: String, reason: String },

    /// Profile bytes could not be parsed by the engine
    #[error("Failed to parse {key} profile: {reason}")]
    ProfileParse { key: String, reason: String },

    /// Transform construction failed
    #[error("Failed to create transform for {key}: {reason}")]
    Transform { key: String, reason: String },

    /// A single pixel could not be pushed through a transform
    #[error("Pixel transform error: {0}")]
    Pixel(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
