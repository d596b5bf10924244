//! Error types shared by the whole crate.

use std::io;
use thiserror::Error;

/// Result type for line-code operations.
pub type Result<T> = std::result::Result<T, LineCodeError>;

/// Errors that can occur before or around encoding.
///
/// The encoder itself is total over valid input, so every variant here is
/// raised either at the input boundary or by one of the downstream sinks.
#[derive(Error, Debug)]
pub enum LineCodeError {
    /// The bit sequence was rejected by validation.
    #[error("invalid binary sequence: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The scheme name is not part of the catalogue.
    #[error("unsupported scheme: {0:?}")]
    UnknownScheme(String),

    /// The requested noise standard deviation cannot drive a normal distribution.
    #[error("invalid noise standard deviation: {0}")]
    InvalidNoise(f64),

    /// A packed payload (hex or base64) could not be decoded.
    #[error("could not decode payload: {0}")]
    Decode(String),

    /// Writing an export failed.
    #[error("could not write export: {0}")]
    Io(#[from] io::Error),
}

/// Reasons a candidate bit sequence is not accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// No bits were supplied.
    #[error("sequence is empty")]
    Empty,

    /// A character outside `{0, 1}` was found.
    #[error("unexpected character {found:?} at position {position}")]
    InvalidBit {
        /// Zero-based character index of the offending symbol.
        position: usize,
        /// The offending symbol.
        found: char,
    },
}
