//! Core error types for navigator-core.
//!
//! Every public operation returns either a value or one of these typed
//! errors. None of them are fatal to a session.

use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::StepId;

/// Core error type for navigator-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A step submission was rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Navigation was not possible
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Answer sheet could not be loaded
    #[error("Answer sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejection of a step submission. The wizard state is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or blank
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A rating fell outside 1..=5
    #[error("value for '{0}' is out of range (expected 1-5)")]
    OutOfRange(String),

    /// The submission targeted a step other than the current one
    #[error("submission for step '{submitted}' does not match current step '{expected}'")]
    StepMismatch { expected: StepId, submitted: StepId },

    /// The wizard is at its terminal step
    #[error("the results step accepts no further submissions")]
    Terminal,
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField(field.into())
    }

    pub fn out_of_range(field: impl Into<String>) -> Self {
        ValidationError::OutOfRange(field.into())
    }
}

/// Rejection of a backwards move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// Already at the first step
    #[error("already at the first step")]
    AtStart,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No usable data directory
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading an answer sheet from disk.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to read answer sheet {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON answer sheet: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML answer sheet: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported answer sheet format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
