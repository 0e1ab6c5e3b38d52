//! Implementation of the Haversine formula for calculating the distance
//! between two points on a sphere.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distance is returned in meters**.

use crate::router::router_types::location::Location;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Calculate the distance between two points on a sphere.
///
/// NaN coordinates propagate to a NaN result.
pub fn distance(start: &Location, end: &Location) -> f64 {
    distance_meters(
        start.latitude.into_inner(),
        start.longitude.into_inner(),
        end.latitude.into_inner(),
        end.longitude.into_inner(),
    )
}

/// Calculate the distance in meters between two latitude/longitude
/// pairs given in decimal degrees.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    // clamp guards the sqrt against rounding just above 1.0
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
