//! Error types for argument validation and file output

use thiserror::Error;

/// Failures detected while reading command-line arguments.
///
/// Every variant is fatal: the process reports it on stderr and exits
/// with code 1 before any file is written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Too few arguments, extra trailing arguments, or a required
    /// positional slot missing after the optional flags were consumed.
    #[error("missing or unexpected arguments")]
    Usage,

    /// A token that could not be parsed as the expected numeric type.
    #[error("Invalid argument: {literal}")]
    InvalidArgument { literal: String },

    /// Brightness coefficient outside (0, 1.0].
    #[error("Brightness coefficient ({value}) must be greater than 0.0 and less than or equal to 1.0.")]
    CoefficientOutOfRange { value: f64 },

    /// A physical dimension that rounds to zero pixels (or overflows)
    /// at the resolved resolution.
    #[error("Invalid image {axis}: {inches} inches at {dpi} DPI does not yield a positive pixel count")]
    InvalidDimension { axis: &'static str, inches: f64, dpi: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to {operation} {path}: {error}")]
    FileSystem {
        operation: &'static str,
        path: String,
        #[source]
        error: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
