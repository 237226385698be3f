//! Error type used by the crate.

use locus_compression::CompressionError;
use locus_types::LocusTypesError;
use thiserror::Error;

/// Locus error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocusError {
    /// Invalid location or rectangle.
    #[error(transparent)]
    Types(#[from] LocusTypesError),
    /// Failed to encode or decode a compressed coordinate string.
    #[error(transparent)]
    Compression(#[from] CompressionError),
    /// String is not a `#rrggbb` or `#aarrggbb` color.
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    /// String is not a quadkey.
    #[error("invalid quadkey '{0}'")]
    InvalidQuadkey(String),
    /// Tile coordinates are outside of the pyramid.
    #[error("tile {x},{y} does not exist at zoom level {zoom}")]
    InvalidTile {
        /// X coordinate of the tile.
        x: u32,
        /// Y coordinate of the tile.
        y: u32,
        /// Zoom level.
        zoom: u8,
    },
}
