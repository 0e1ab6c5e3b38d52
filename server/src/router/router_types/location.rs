//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` is a bare WGS84 coordinate. Named campus places wrap
//! it in a [`Node`](`super::node::Node`).

use geo::Point;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is an interface type that represents a geographic
/// position on campus. Typically, this type is used in tandem with
/// the [`Node`](`super::node::Node`) type and as a vertex of a
/// [`Road`](`super::road::Road`) polyline.
///
/// Serialized as a `[latitude, longitude]` pair, the same layout the
/// map frontend consumes for polylines.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Location {
    /// The latitude of the location in decimal degrees.
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the location in decimal degrees.
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from latitude and longitude in decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Both coordinates are finite and inside the valid WGS84 range.
    pub fn is_valid(&self) -> bool {
        let lat = self.latitude.into_inner();
        let lon = self.longitude.into_inner();
        lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Location::new(latitude, longitude)
    }
}

impl From<Location> for (f64, f64) {
    fn from(location: Location) -> Self {
        (location.latitude.into_inner(), location.longitude.into_inner())
    }
}

impl From<Location> for Point {
    fn from(location: Location) -> Self {
        Point::new(location.longitude.into_inner(), location.latitude.into_inner())
    }
}

impl From<&Location> for Point {
    fn from(location: &Location) -> Self {
        (*location).into()
    }
}

impl From<Point> for Location {
    fn from(point: Point) -> Self {
        Location::new(point.y(), point.x())
    }
}
