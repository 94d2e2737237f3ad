use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Measurement field a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    /// Validation order
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which input constraint was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Not a real number (NaN, infinite, or unparsable text)
    NotANumber,
    /// Real number below zero
    Negative,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NotANumber => f.write_str("must be a number"),
            InvalidReason::Negative => f.write_str("must be non-negative"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SorterError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: Field, reason: InvalidReason },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}' (expected one of: {expected})")]
    InvalidConfigValue {
        key: String,
        value: String,
        expected: String,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, SorterError>;

impl SorterError {
    pub fn invalid_input(field: Field, reason: InvalidReason) -> Self {
        Self::InvalidInput { field, reason }
    }

    /// True for the single classification failure kind
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } => 2,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 3,
            _ => 1,
        }
    }
}
