use std::fmt::{Display, Formatter};
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::{parse_fields, Field, LocusTypesError};
use crate::geo_point::{GeoPoint, NewGeoPoint};

/// Geographic location given by latitude and longitude in degrees.
///
/// Latitude is expected to lie in `[-90, 90]` and longitude in `[-180, 180]`, but the values are stored
/// as given. Use [`Location::normalized`] to wrap the longitude into the canonical range.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a new location.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees, north of the equator is positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east of the prime meridian is positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Wraps the longitude around the Earth into `[-180, 180]`.
    ///
    /// Values that are already inside the range (including both ends) are returned unchanged. Values
    /// outside of it end up in `[-180, 180)`.
    ///
    /// ```
    /// use locus_types::Location;
    ///
    /// assert_eq!(Location::normalize_longitude(190.0), -170.0);
    /// assert_eq!(Location::normalize_longitude(-540.0), -180.0);
    /// assert_eq!(Location::normalize_longitude(180.0), 180.0);
    /// ```
    pub fn normalize_longitude(longitude: f64) -> f64 {
        if (-180.0..=180.0).contains(&longitude) {
            longitude
        } else {
            (longitude + 180.0).rem_euclid(360.0) - 180.0
        }
    }

    /// Returns a copy of the location with the longitude wrapped into `[-180, 180]`.
    pub fn normalized(&self) -> Self {
        Self {
            latitude: self.latitude,
            longitude: Self::normalize_longitude(self.longitude),
        }
    }

    /// Creates a new location from any other geographic point.
    pub fn from_point(other: &impl GeoPoint<Num = f64>) -> Self {
        other.to_location()
    }
}

impl GeoPoint for Location {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }
}

impl NewGeoPoint<f64> for Location {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon)
    }
}

impl AbsDiffEq for Location {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.latitude.abs_diff_eq(&other.latitude, epsilon)
            && self.longitude.abs_diff_eq(&other.longitude, epsilon)
    }
}

/// Formats the location as `"lat,long"`.
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses a location string of the form `"lat,long"`. Whitespace around the values is ignored.
impl FromStr for Location {
    type Err = LocusTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [latitude, longitude] = parse_fields(s, [Field::Latitude, Field::Longitude])?;
        Ok(Self::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;
    use crate::latlon;

    #[test]
    fn normalize_longitude() {
        assert_eq!(Location::normalize_longitude(0.0), 0.0);
        assert_eq!(Location::normalize_longitude(-180.0), -180.0);
        assert_eq!(Location::normalize_longitude(180.0), 180.0);
        assert_abs_diff_eq!(Location::normalize_longitude(181.0), -179.0);
        assert_abs_diff_eq!(Location::normalize_longitude(-181.0), 179.0);
        assert_abs_diff_eq!(Location::normalize_longitude(360.0), 0.0);
        assert_abs_diff_eq!(Location::normalize_longitude(725.5), 5.5);
        assert_abs_diff_eq!(Location::normalize_longitude(-370.0), -10.0);
        assert!(Location::normalize_longitude(f64::NAN).is_nan());
    }

    #[test]
    fn normalized_keeps_latitude() {
        let location = Location::new(95.0, 200.0).normalized();
        assert_eq!(location.latitude(), 95.0);
        assert_abs_diff_eq!(location.longitude(), -160.0);
    }

    #[test]
    fn geo_point_accessors() {
        let location = latlon!(45.0, -90.0);
        assert_eq!(location.lat(), 45.0);
        assert_eq!(location.lon(), -90.0);
        assert_eq!(location.normalized_lon(), -90.0);
        assert_eq!(latlon!(45.0, 270.0).normalized_lon(), -90.0);
        assert_eq!(latlon!(45.0, 270.0).to_location(), Location::new(45.0, 270.0));
        assert_eq!(Location::lonlat(-90.0, 45.0), location);
        assert_eq!(Location::from_point(&location), location);
    }

    #[test]
    fn tolerant_equality() {
        let a = Location::new(10.0, 20.0);
        let b = Location::new(10.000_001, 19.999_999);
        assert_ne!(a, b);
        assert!(a.abs_diff_eq(&b, 1e-5));
        assert!(!a.abs_diff_eq(&b, 1e-7));
    }

    #[test]
    fn parse_and_format() {
        let location: Location = "47.6097, -122.3331".parse().unwrap();
        assert_eq!(location, Location::new(47.6097, -122.3331));
        assert_eq!(location.to_string(), "47.6097,-122.3331");
        assert_eq!(location.to_string().parse::<Location>().unwrap(), location);
    }

    #[test]
    fn parse_invalid() {
        assert_matches!(
            "47.6".parse::<Location>(),
            Err(LocusTypesError::FieldCount {
                expected: 2,
                found: 1
            })
        );
        assert_matches!(
            "north,10".parse::<Location>(),
            Err(LocusTypesError::InvalidField {
                field: Field::Latitude,
                ..
            })
        );
    }

    #[test]
    fn serialization() {
        let location = Location::new(1.5, -2.25);
        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.25}"#);
        assert_eq!(serde_json::from_str::<Location>(&json).unwrap(), location);
    }
}
