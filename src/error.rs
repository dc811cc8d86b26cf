//! Error types for event book operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The attribute key is not one of the supported keys
    #[error("Invalid attribute: {0}")]
    UnsupportedAttribute(String),

    #[error("Invalid date/time '{0}' (expected yyyy-MM-dd HH:mm)")]
    InvalidDateTime(String),

    #[error("Invalid priority '{0}' (expected true/false, high/normal or yes/no)")]
    InvalidPriority(String),

    #[error("Invalid date range '{0}' (expected <start> to <end>)")]
    InvalidDateRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;
