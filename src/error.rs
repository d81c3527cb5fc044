//! Error types for installconfig
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for installconfig operations
pub type InstallConfigResult<T> = Result<T, InstallConfigError>;

/// Main error type for asset generation
#[derive(Error, Debug)]
pub enum InstallConfigError {
    /// Neither an override nor the prompter produced a value
    #[error("no value for '{prompt}': set {env_var} or run interactively")]
    Unresolved { prompt: String, env_var: String },

    /// Platform identifier outside the registry
    #[error("unknown platform type {0:?}")]
    UnknownPlatform(String),

    /// Region value that cannot yield a region code
    #[error("invalid region {value:?}: {reason}")]
    InvalidRegion { value: String, reason: String },

    /// State does not have the shape its producing asset documents
    #[error("malformed {asset} state: {message}")]
    MalformedState { asset: String, message: String },

    /// Interactive prompt failed (terminal I/O)
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Asset graph loops back on itself
    #[error("dependency cycle: {}", path.join(" -> "))]
    DependencyCycle { path: Vec<String> },

    /// Generate asked for a parent that was not declared or not resolved
    #[error("{asset} requires {dependency}, which was not generated")]
    MissingDependency { asset: String, dependency: String },
}
