use std::fmt::{Display, Formatter};
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::{parse_fields, Field, LocusTypesError};
use crate::geo_point::GeoPoint;
use crate::location::Location;

const FULL_CIRCLE: f64 = 360.0;
const HALF_CIRCLE: f64 = 180.0;

/// Axis-aligned geographic bounding rectangle (bounding box).
///
/// The rectangle is described by its center and its width and height in degrees. Longitude is
/// circular, so a rectangle can span the 180th meridian (the international date line). In that case its
/// western edge has a larger longitude value than its eastern edge, and every operation takes the wrap
/// around into account.
///
/// Latitudes are never clamped: a rectangle that extends beyond the poles reports edges beyond `+-90`.
///
/// ```
/// use locus_types::{Location, LocationRect};
///
/// let pacific = LocationRect::from_edges(10.0, 170.0, -10.0, -170.0).unwrap();
/// assert!(pacific.crosses_international_date_line());
/// assert!(pacific.contains(&Location::new(0.0, 180.0)));
/// assert!(!pacific.contains(&Location::new(0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectFields")]
pub struct LocationRect {
    center: Location,
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RectFields {
    center: Location,
    width: f64,
    height: f64,
}

impl TryFrom<RectFields> for LocationRect {
    type Error = LocusTypesError;

    fn try_from(value: RectFields) -> Result<Self, Self::Error> {
        Self::new(value.center, value.width, value.height)
    }
}

impl LocationRect {
    /// Creates a rectangle by its center and size in degrees.
    ///
    /// Returns an error if the width or height is negative or not finite.
    pub fn new(center: Location, width: f64, height: f64) -> Result<Self, LocusTypesError> {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(LocusTypesError::InvalidSize { width, height });
        }

        Ok(Self {
            center,
            width,
            height,
        })
    }

    /// Creates a rectangle by its northwest and southeast corners.
    ///
    /// If the southeast corner has a smaller longitude than the northwest one, the rectangle spans the
    /// 180th meridian.
    pub fn from_corners(northwest: Location, southeast: Location) -> Result<Self, LocusTypesError> {
        Self::from_edges(
            northwest.latitude(),
            northwest.longitude(),
            southeast.latitude(),
            southeast.longitude(),
        )
    }

    /// Creates a rectangle by its bounding latitudes and longitudes.
    ///
    /// Longitudes are normalized first. If `east < west` after that, the rectangle spans the 180th
    /// meridian and its width is `360 - west + east`.
    ///
    /// Returns an error if `north < south`.
    pub fn from_edges(
        north: f64,
        west: f64,
        south: f64,
        east: f64,
    ) -> Result<Self, LocusTypesError> {
        if north.is_nan() || south.is_nan() || north < south {
            log::debug!("Rejected rectangle with north {north} below south {south}");
            return Err(LocusTypesError::InvertedLatitude { north, south });
        }

        let west = Location::normalize_longitude(west);
        let east = Location::normalize_longitude(east);
        let width = if east < west {
            FULL_CIRCLE - west + east
        } else {
            east - west
        };

        let center = Location::new(
            (north + south) / 2.0,
            Location::normalize_longitude(west + width / 2.0),
        );

        Self::new(center, width, north - south)
    }

    /// Creates the smallest rectangle that encloses all the given locations.
    ///
    /// When the locations can be enclosed both with and without spanning the 180th meridian, the narrower
    /// of the two is chosen. On a tie the rectangle that does not span the meridian wins, unless the span
    /// is wider than a half of the circle.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_locations<'a, P: GeoPoint<Num = f64> + 'a>(
        locations: impl IntoIterator<Item = &'a P>,
    ) -> Option<Self> {
        let mut north = f64::NEG_INFINITY;
        let mut south = f64::INFINITY;
        let mut longitudes = vec![];

        for location in locations {
            north = north.max(location.lat());
            south = south.min(location.lat());
            longitudes.push(location.normalized_lon());
        }

        if longitudes.is_empty() {
            return None;
        }

        longitudes.sort_by(f64::total_cmp);
        let min = longitudes[0];
        let max = longitudes[longitudes.len() - 1];

        let mut gap = 0.0;
        let mut gap_index = 0;
        for (index, pair) in longitudes.windows(2).enumerate() {
            if pair[1] - pair[0] > gap {
                gap = pair[1] - pair[0];
                gap_index = index;
            }
        }

        let direct_span = max - min;
        let crossing_span = FULL_CIRCLE - gap;
        let use_crossing = gap > 0.0
            && (crossing_span < direct_span
                || (crossing_span == direct_span && direct_span > HALF_CIRCLE));

        let (west, east) = if use_crossing {
            log::trace!("Enclosing {} locations across the 180th meridian", longitudes.len());
            (longitudes[gap_index + 1], longitudes[gap_index])
        } else {
            (min, max)
        };

        Self::from_edges(north, west, south, east).ok()
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Location {
        self.center
    }

    /// Width of the rectangle in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the rectangle in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Latitude of the northern edge.
    pub fn north(&self) -> f64 {
        self.center.latitude() + self.height / 2.0
    }

    /// Latitude of the southern edge.
    pub fn south(&self) -> f64 {
        self.center.latitude() - self.height / 2.0
    }

    /// Longitude of the western edge, normalized into `[-180, 180]`.
    pub fn west(&self) -> f64 {
        if self.is_full_width() {
            return -HALF_CIRCLE;
        }

        let west = Location::normalize_longitude(self.center.longitude() - self.width / 2.0);
        if west == HALF_CIRCLE && self.width > 0.0 {
            -HALF_CIRCLE
        } else {
            west
        }
    }

    /// Longitude of the eastern edge, normalized into `[-180, 180]`.
    pub fn east(&self) -> f64 {
        if self.is_full_width() {
            return HALF_CIRCLE;
        }

        let east = Location::normalize_longitude(self.center.longitude() + self.width / 2.0);
        if east == -HALF_CIRCLE && self.width > 0.0 {
            HALF_CIRCLE
        } else {
            east
        }
    }

    /// Northwest corner of the rectangle.
    pub fn northwest(&self) -> Location {
        Location::new(self.north(), self.west())
    }

    /// Southeast corner of the rectangle.
    pub fn southeast(&self) -> Location {
        Location::new(self.south(), self.east())
    }

    fn is_full_width(&self) -> bool {
        self.width >= FULL_CIRCLE
    }

    /// Returns true if the rectangle spans the 180th meridian, i.e. its western edge is east of its
    /// eastern edge.
    pub fn crosses_international_date_line(&self) -> bool {
        self.west() > self.east()
    }

    /// Returns true if the location lies inside the rectangle or on its boundary.
    pub fn contains(&self, location: &impl GeoPoint<Num = f64>) -> bool {
        let lat = location.lat();
        if !(self.south() <= lat && lat <= self.north()) {
            return false;
        }

        let lon = location.normalized_lon();
        if self.is_full_width() {
            return lon.is_finite();
        }

        // -180 and 180 are the same meridian
        self.contains_longitude(lon)
            || (lon == HALF_CIRCLE && self.contains_longitude(-HALF_CIRCLE))
            || (lon == -HALF_CIRCLE && self.contains_longitude(HALF_CIRCLE))
    }

    fn contains_longitude(&self, lon: f64) -> bool {
        let (west, east) = (self.west(), self.east());
        if west > east {
            lon >= west || lon <= east
        } else {
            west <= lon && lon <= east
        }
    }

    /// Returns true if the two rectangles overlap or touch. Edges at `-180` and `180` touch each other.
    pub fn intersects(&self, other: &LocationRect) -> bool {
        if !(self.south() <= other.north() && other.south() <= self.north()) {
            return false;
        }

        if self.is_full_width() || other.is_full_width() {
            return true;
        }

        let own = self.longitude_ranges();
        let others = other.longitude_ranges();
        let overlap = own.iter().any(|(west, east)| {
            others
                .iter()
                .any(|(other_west, other_east)| west <= other_east && other_west <= east)
        });

        // -180 and 180 are the same meridian
        let touches_seam = |left: &[(f64, f64)], right: &[(f64, f64)]| {
            left.iter().any(|(_, east)| *east == HALF_CIRCLE)
                && right.iter().any(|(west, _)| *west == -HALF_CIRCLE)
        };

        overlap || touches_seam(&own, &others) || touches_seam(&others, &own)
    }

    fn longitude_ranges(&self) -> Vec<(f64, f64)> {
        let (west, east) = (self.west(), self.east());
        if west > east {
            vec![(west, HALF_CIRCLE), (-HALF_CIRCLE, east)]
        } else {
            vec![(west, east)]
        }
    }

    /// Splits the rectangle by the 180th meridian.
    ///
    /// A rectangle spanning the meridian is split into the part west of it (ending at `180`) and the part
    /// east of it (starting at `-180`). Any other rectangle is returned as the only element.
    pub fn split_by_international_date_line(&self) -> Vec<LocationRect> {
        if !self.crosses_international_date_line() {
            return vec![*self];
        }

        let (west, east) = (self.west(), self.east());
        let latitude = self.center.latitude();

        vec![
            Self {
                center: Location::new(latitude, (west + HALF_CIRCLE) / 2.0),
                width: HALF_CIRCLE - west,
                height: self.height,
            },
            Self {
                center: Location::new(latitude, (east - HALF_CIRCLE) / 2.0),
                width: east + HALF_CIRCLE,
                height: self.height,
            },
        ]
    }

    /// Returns a copy of the rectangle with width and height scaled by `1 + percentage / 100` around the
    /// same center.
    ///
    /// Percentages below `-100` collapse the rectangle into its center.
    pub fn inflate(&self, percentage: f64) -> Self {
        let factor = (1.0 + percentage / 100.0).max(0.0);
        Self {
            center: self.center,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

impl AbsDiffEq for LocationRect {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.width.abs_diff_eq(&other.width, epsilon)
            && self.height.abs_diff_eq(&other.height, epsilon)
    }
}

/// Formats the rectangle as `"north,west,south,east"`.
impl Display for LocationRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.north(),
            self.west(),
            self.south(),
            self.east()
        )
    }
}

/// Parses a rectangle from `"north,west,south,east"`.
impl FromStr for LocationRect {
    type Err = LocusTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [north, west, south, east] =
            parse_fields(s, [Field::North, Field::West, Field::South, Field::East])?;
        Self::from_edges(north, west, south, east)
    }
}
