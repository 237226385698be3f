use num_traits::Float;

use crate::location::Location;

/// Anything that has a position on the Earth given by latitude and longitude in degrees.
///
/// Rectangle constructors and the coordinate codec accept any implementor, so paths stored in other
/// geometry types can be used without copying them into [`Location`]s first.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees, not necessarily inside `[-180, 180]`.
    fn lon(&self) -> Self::Num;

    /// Longitude wrapped into `[-180, 180]`.
    fn normalized_lon(&self) -> f64
    where
        Self: GeoPoint<Num = f64>,
    {
        Location::normalize_longitude(self.lon())
    }

    /// Copies the coordinates into a [`Location`] without normalizing them.
    fn to_location(&self) -> Location
    where
        Self: GeoPoint<Num = f64>,
    {
        Location::new(self.lat(), self.lon())
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// Creates a new [`Location`](crate::Location) from latitude and longitude values (in degrees).
///
/// ```
/// use locus_types::{latlon, GeoPoint};
///
/// let location = latlon!(47.6, -122.3);
/// assert_eq!(location.lat(), 47.6);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::Location as $crate::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
