//! Error types for vrgda-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vrgda-viz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV read or field parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PNG encoding error.
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or chart.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Length mismatch between energy and multiplier columns.
    #[error("Data length mismatch: {x_len} energy values, {y_len} multiplier values")]
    DataLengthMismatch {
        /// Number of energy values.
        x_len: usize,
        /// Number of multiplier values.
        y_len: usize,
    },

    /// Empty dataset where samples are required.
    #[error("Empty dataset")]
    EmptyData,

    /// Scale domain error (e.g., log of a non-positive domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),
}
