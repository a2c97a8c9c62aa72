//! Error types for the Usher engine

use thiserror::Error;

/// Result type alias for Usher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the engine core
///
/// The answer pipeline itself is total — classification, scoring and
/// synthesis never fail for well-typed inputs. These variants cover the
/// collaborator edges only: loading corpus bundles, profiles and config
/// files.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Structurally invalid corpus bundle
    #[error("corpus error: {0}")]
    Corpus(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
