//! Locus is a small toolkit of geographic value types for map clients and geodata services:
//!
//! * [`Location`] and the seam-aware bounding rectangle [`LocationRect`], which handles rectangles that span the
//!   180th meridian,
//! * the compressed coordinate string format used by elevation and boundary services ([`encode`], [`decode`],
//!   [`PointCodec`]),
//! * pixel [`Point`], ARGB [`Color`] and quadtree [`PyramidTileId`] helpers.
//!
//! ```
//! use locus::{decode, encode, latlon, LocationRect};
//!
//! let path = [latlon!(-16.5, 177.0), latlon!(-17.2, 179.9), latlon!(-18.0, -179.5)];
//!
//! let compressed = encode(&path)?;
//! let restored = decode(&compressed)?;
//! assert_eq!(restored.len(), 3);
//!
//! let bounds = LocationRect::from_locations(&restored).unwrap();
//! assert!(bounds.crosses_international_date_line());
//! # Ok::<(), locus::LocusError>(())
//! ```
//!
//! The member crates [`locus_types`] and [`locus_compression`] can be used on their own when only a part of the
//! functionality is needed.

mod color;
pub mod error;
mod tile_id;

pub use color::Color;
pub use error::LocusError;
pub use locus_compression::{
    decode, encode, CompressionError, CompressionOptions, PointCodec, ALPHABET, DEFAULT_PRECISION,
    MAX_PRECISION,
};
pub use locus_types::{
    latlon, Field, GeoPoint, Location, LocationRect, LocusTypesError, NewGeoPoint, Point,
};
pub use tile_id::{PyramidTileId, DEFAULT_TILE_SIZE, MAX_ZOOM};

// Reexport member crates
pub use locus_compression;
pub use locus_types;
