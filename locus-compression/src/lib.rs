//! Compressed coordinate strings.
//!
//! The format packs an ordered list of locations into a short URL-safe string. It is accepted by elevation
//! services for requests with many points and returned by geodata services for boundary polygons, so the
//! layout here must stay byte-compatible with them:
//!
//! 1. Latitude and longitude are multiplied by `10^5` and rounded half-up to integers.
//! 2. The first location is stored as is, every next one as a difference from the previous location.
//! 3. Both differences are zig-zag encoded and combined into one value with the Cantor pairing function.
//! 4. The value is written in 5-bit groups, least significant first, using the characters of [`ALPHABET`].
//!
//! ```
//! use locus_compression::{decode, encode};
//! use locus_types::Location;
//!
//! let path = [
//!     Location::new(35.894309002906084, -110.72522000409663),
//!     Location::new(35.893930979073048, -110.72577999904752),
//!     Location::new(35.893744984641671, -110.72606003843248),
//!     Location::new(35.893366960808635, -110.72661500424147),
//! ];
//!
//! let compressed = encode(&path).unwrap();
//! assert_eq!(compressed, "vx1vilihnM6hR7mEl2Q");
//!
//! let decoded = decode(&compressed).unwrap();
//! assert_eq!(decoded[0], Location::new(35.89431, -110.72522));
//! ```
//!
//! Differences across the 180th meridian are stored as plain numeric differences: a step from `179.9` to
//! `-179.9` is encoded as `-359.8`, not as `0.2`.

use locus_types::{GeoPoint, Location};
use serde::{Deserialize, Serialize};

pub mod error;
mod pairing;
mod varint;

pub use error::CompressionError;
pub use varint::ALPHABET;

use crate::pairing::{pair, unpair, unzigzag, zigzag};
use crate::varint::{write_value, ValueReader};

/// Number of decimal digits kept by the services that use the format.
pub const DEFAULT_PRECISION: u8 = 5;

/// Largest supported number of decimal digits.
pub const MAX_PRECISION: u8 = 9;

// Integers up to 2^53 are exact in f64.
const MAX_SCALED: f64 = 9_007_199_254_740_992.0;

/// Configuration of a [`PointCodec`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionOptions {
    precision: u8,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CompressionOptions {
    /// Number of decimal digits kept for every coordinate.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Sets the number of decimal digits kept for every coordinate.
    ///
    /// The default value is `5`. Strings encoded with any other precision can only be decoded by a codec
    /// with the same setting.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }
}

/// Encoder and decoder of compressed coordinate strings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointCodec {
    options: CompressionOptions,
    scale: f64,
}

impl Default for PointCodec {
    fn default() -> Self {
        Self {
            options: CompressionOptions::default(),
            scale: 10f64.powi(DEFAULT_PRECISION as i32),
        }
    }
}

impl PointCodec {
    /// Creates a codec with the given options.
    pub fn new(options: CompressionOptions) -> Result<Self, CompressionError> {
        if options.precision > MAX_PRECISION {
            return Err(CompressionError::InvalidPrecision {
                precision: options.precision,
                max: MAX_PRECISION,
            });
        }

        Ok(Self {
            options,
            scale: 10f64.powi(options.precision as i32),
        })
    }

    /// Options the codec was created with.
    pub fn options(&self) -> CompressionOptions {
        self.options
    }

    /// Compresses the locations into a string. An empty list gives an empty string.
    ///
    /// Fails if a coordinate is not finite or too large to be represented at the codec's precision.
    pub fn encode<'a, P: GeoPoint<Num = f64> + 'a>(
        &self,
        locations: impl IntoIterator<Item = &'a P>,
    ) -> Result<String, CompressionError> {
        let mut result = String::new();
        let mut latitude = 0i64;
        let mut longitude = 0i64;
        let mut count = 0usize;

        for location in locations {
            let invalid = || CompressionError::InvalidCoordinate {
                latitude: location.lat(),
                longitude: location.lon(),
            };
            let next_latitude = self.to_scaled(location.lat()).ok_or_else(invalid)?;
            let next_longitude = self.to_scaled(location.lon()).ok_or_else(invalid)?;

            let dy = zigzag(next_latitude - latitude);
            let dx = zigzag(next_longitude - longitude);
            write_value(pair(dy, dx), &mut result);

            latitude = next_latitude;
            longitude = next_longitude;
            count += 1;
        }

        log::trace!(
            "Encoded {count} locations into {} characters",
            result.len()
        );

        Ok(result)
    }

    /// Restores the locations from a compressed string, rounded to the codec's precision.
    ///
    /// Fails without returning partial data if the string contains characters outside of [`ALPHABET`], ends
    /// in the middle of a value or encodes values out of range.
    pub fn decode(&self, value: &str) -> Result<Vec<Location>, CompressionError> {
        let mut locations = vec![];
        let mut latitude = 0i64;
        let mut longitude = 0i64;

        for item in ValueReader::new(value) {
            let (position, index) = item.inspect_err(|e| {
                log::debug!("Failed to decode compressed coordinates: {e}");
            })?;

            let (dy, dx) = unpair(index).ok_or(CompressionError::Overflow(position))?;
            latitude = latitude
                .checked_add(unzigzag(dy))
                .ok_or(CompressionError::Overflow(position))?;
            longitude = longitude
                .checked_add(unzigzag(dx))
                .ok_or(CompressionError::Overflow(position))?;

            locations.push(Location::new(
                latitude as f64 / self.scale,
                longitude as f64 / self.scale,
            ));
        }

        log::trace!(
            "Decoded {} locations from {} characters",
            locations.len(),
            value.len()
        );

        Ok(locations)
    }

    fn to_scaled(&self, coordinate: f64) -> Option<i64> {
        // Half-up rounding, same as the reference encoders.
        let scaled = (coordinate * self.scale + 0.5).floor();
        if scaled.is_finite() && scaled.abs() <= MAX_SCALED {
            Some(scaled as i64)
        } else {
            None
        }
    }
}

/// Compresses the locations into a string with the default precision of 5 decimal digits.
///
/// See [`PointCodec::encode`].
pub fn encode<'a, P: GeoPoint<Num = f64> + 'a>(
    locations: impl IntoIterator<Item = &'a P>,
) -> Result<String, CompressionError> {
    PointCodec::default().encode(locations)
}

/// Restores the locations from a string compressed with the default precision of 5 decimal digits.
///
/// See [`PointCodec::decode`].
pub fn decode(value: &str) -> Result<Vec<Location>, CompressionError> {
    PointCodec::default().decode(value)
}
