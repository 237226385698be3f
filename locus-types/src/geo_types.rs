//! Conversions between this crate's types and [`geo_types`] geometries.
//!
//! `geo_types` uses `x` for longitude and `y` for latitude.

use geo_types::{coord, point, CoordNum, MultiPolygon, Rect};
use num_traits::Float;

use crate::error::LocusTypesError;
use crate::geo_point::{GeoPoint, NewGeoPoint};
use crate::location::Location;
use crate::location_rect::LocationRect;

impl<T: CoordNum + Float> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

impl From<Location> for geo_types::Point<f64> {
    fn from(value: Location) -> Self {
        point!(x: value.longitude(), y: value.latitude())
    }
}

impl From<geo_types::Point<f64>> for Location {
    fn from(value: geo_types::Point<f64>) -> Self {
        Location::new(value.y(), value.x())
    }
}

impl TryFrom<Rect<f64>> for LocationRect {
    type Error = LocusTypesError;

    fn try_from(value: Rect<f64>) -> Result<Self, Self::Error> {
        LocationRect::from_edges(value.max().y, value.min().x, value.min().y, value.max().x)
    }
}

/// Fails for rectangles that span the 180th meridian, since a `Rect` cannot wrap around.
impl TryFrom<LocationRect> for Rect<f64> {
    type Error = LocusTypesError;

    fn try_from(value: LocationRect) -> Result<Self, Self::Error> {
        if value.crosses_international_date_line() {
            return Err(LocusTypesError::CrossesDateLine);
        }

        Ok(Rect::new(
            coord! { x: value.west(), y: value.south() },
            coord! { x: value.east(), y: value.north() },
        ))
    }
}

/// Covers a rectangle spanning the 180th meridian with two polygons, one on each side of it.
impl From<LocationRect> for MultiPolygon<f64> {
    fn from(value: LocationRect) -> Self {
        MultiPolygon::new(
            value
                .split_by_international_date_line()
                .into_iter()
                .map(|part| {
                    Rect::new(
                        coord! { x: part.west(), y: part.south() },
                        coord! { x: part.east(), y: part.north() },
                    )
                    .to_polygon()
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn geo_point_for_geo_types() {
        let point = geo_types::Point::<f64>::latlon(10.0, 20.0);
        assert_eq!(point.x(), 20.0);
        assert_eq!(GeoPoint::lat(&point), 10.0);
        assert_eq!(GeoPoint::lon(&point), 20.0);
        assert_eq!(point.to_location(), Location::new(10.0, 20.0));

        let wrapped = geo_types::Point::new(200.0, 10.0);
        assert_eq!(wrapped.normalized_lon(), -160.0);
        assert_eq!(Location::from(point), Location::new(10.0, 20.0));
        assert_eq!(geo_types::Point::from(Location::new(10.0, 20.0)), point);
    }

    #[test]
    fn rect_conversion() {
        let rect = LocationRect::from_edges(60.0, -10.0, 40.0, 30.0).unwrap();
        let geo_rect = Rect::try_from(rect).unwrap();
        assert_eq!(geo_rect.min(), coord! { x: -10.0, y: 40.0 });
        assert_eq!(geo_rect.max(), coord! { x: 30.0, y: 60.0 });
        assert_eq!(LocationRect::try_from(geo_rect).unwrap(), rect);

        let crossing = LocationRect::from_edges(10.0, 170.0, -10.0, -170.0).unwrap();
        assert_matches!(
            Rect::try_from(crossing),
            Err(LocusTypesError::CrossesDateLine)
        );
    }

    #[test]
    fn multi_polygon_conversion() {
        let plain = LocationRect::from_edges(60.0, -10.0, 40.0, 30.0).unwrap();
        assert_eq!(MultiPolygon::from(plain).0.len(), 1);

        let crossing = LocationRect::from_edges(10.0, 170.0, -10.0, -170.0).unwrap();
        let multi_polygon = MultiPolygon::from(crossing);
        assert_eq!(multi_polygon.0.len(), 2);
        assert!(multi_polygon.0[0]
            .exterior()
            .points()
            .all(|p| p.x() >= 170.0));
        assert!(multi_polygon.0[1]
            .exterior()
            .points()
            .all(|p| p.x() <= -170.0));
    }
}
