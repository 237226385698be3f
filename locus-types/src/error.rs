//! Error type used by the crate.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Named numeric field of a textual location or rectangle representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Latitude of a location.
    Latitude,
    /// Longitude of a location.
    Longitude,
    /// Northern edge of a rectangle.
    North,
    /// Western edge of a rectangle.
    West,
    /// Southern edge of a rectangle.
    South,
    /// Eastern edge of a rectangle.
    East,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::North => "north",
            Field::West => "west",
            Field::South => "south",
            Field::East => "east",
        };

        write!(f, "{name}")
    }
}

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocusTypesError {
    /// Textual representation has a wrong number of comma separated values.
    #[error("expected {expected} comma separated values, found {found}")]
    FieldCount {
        /// Number of values the format requires.
        expected: usize,
        /// Number of values in the input.
        found: usize,
    },

    /// One of the values is not a finite number.
    #[error("invalid {field} value: '{value}'")]
    InvalidField {
        /// Which value failed.
        field: Field,
        /// Raw text of the value.
        value: String,
    },

    /// Northern edge of a rectangle lies south of its southern edge.
    #[error("northern edge {north} is below southern edge {south}")]
    InvertedLatitude {
        /// Northern latitude.
        north: f64,
        /// Southern latitude.
        south: f64,
    },

    /// Width or height of a rectangle is negative or not finite.
    #[error("invalid rectangle size {width}x{height}")]
    InvalidSize {
        /// Width in degrees.
        width: f64,
        /// Height in degrees.
        height: f64,
    },

    /// Operation is not defined for a rectangle spanning the 180th meridian.
    #[error("rectangle crosses the international date line")]
    CrossesDateLine,
}

/// Splits `value` by commas into exactly `N` finite numbers, reporting failures with the given field names.
pub(crate) fn parse_fields<const N: usize>(
    value: &str,
    fields: [Field; N],
) -> Result<[f64; N], LocusTypesError> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != N {
        return Err(LocusTypesError::FieldCount {
            expected: N,
            found: parts.len(),
        });
    }

    let mut result = [0.0; N];
    for ((slot, part), field) in result.iter_mut().zip(parts).zip(fields) {
        *slot = match part.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                log::debug!("Failed to parse {field} from '{value}'");
                return Err(LocusTypesError::InvalidField {
                    field,
                    value: part.trim().to_string(),
                });
            }
        };
    }

    Ok(result)
}
