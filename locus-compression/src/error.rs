//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompressionError {
    /// Input string contains a character outside of the encoding alphabet.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// Input string ended in the middle of a value.
    #[error("unexpected end of data at position {0}")]
    UnexpectedEnd(usize),

    /// Decoded value does not fit into the coordinate range.
    #[error("value starting at position {0} is out of range")]
    Overflow(usize),

    /// Location cannot be encoded.
    #[error("cannot encode location {latitude},{longitude}")]
    InvalidCoordinate {
        /// Latitude of the location.
        latitude: f64,
        /// Longitude of the location.
        longitude: f64,
    },

    /// Number of decimal digits is not supported.
    #[error("precision must be at most {max}, got {precision}")]
    InvalidPrecision {
        /// Requested precision.
        precision: u8,
        /// Largest supported precision.
        max: u8,
    },
}
