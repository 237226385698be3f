//! Geographic value types: [`Location`], the seam-aware bounding rectangle [`LocationRect`] and the pixel
//! [`Point`].
//!
//! All types are plain immutable values. Operations never mutate their inputs and never touch any global
//! state, so they can be used from any thread.
//!
//! Longitude is circular. Everything that compares longitudes (containment, intersection, enclosing
//! rectangles) handles the 180th meridian explicitly:
//!
//! ```
//! use locus_types::{latlon, LocationRect};
//!
//! let fiji = LocationRect::from_locations(&[
//!     latlon!(-16.5, 177.0),
//!     latlon!(-18.0, -179.5),
//! ])
//! .unwrap();
//!
//! assert!(fiji.crosses_international_date_line());
//! assert_eq!(fiji.width(), 3.5);
//! assert_eq!(fiji.split_by_international_date_line().len(), 2);
//! ```

pub mod error;
mod geo_point;
#[cfg(feature = "geo-types")]
mod geo_types;
mod location;
mod location_rect;
mod point;

pub use error::{Field, LocusTypesError};
pub use geo_point::{GeoPoint, NewGeoPoint};
pub use location::Location;
pub use location_rect::LocationRect;
pub use point::Point;
