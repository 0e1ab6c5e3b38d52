//! Struct definitions and implementations for [`Road`].
//!
//! A road is a named walkway drawn as a polyline. Points are stored in
//! the order they were surveyed, but a road can be walked either way.

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::router::router_utils::{haversine, polyline};

/// A named polyline of at least two points.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Road {
    /// Unique road identifier, e.g. `main_road_1`.
    pub name: String,

    /// Ordered vertices of the road.
    pub points: Vec<Location>,
}

impl Road {
    /// Length of the polyline in meters.
    pub fn length_meters(&self) -> f64 {
        polyline::length_meters(&self.points)
    }

    /// First point of the polyline.
    pub fn first(&self) -> Option<&Location> {
        self.points.first()
    }

    /// Last point of the polyline.
    pub fn last(&self) -> Option<&Location> {
        self.points.last()
    }

    /// Distance from `location` to whichever road end is closer.
    ///
    /// Returns [`None`] for a road without points.
    pub fn nearest_end_distance(&self, location: &Location) -> Option<f64> {
        let first = haversine::distance(location, self.first()?);
        let last = haversine::distance(location, self.last()?);
        Some(first.min(last))
    }

    /// The polyline oriented to start at the end nearest to `location`.
    ///
    /// Ties keep the stored order.
    pub fn oriented_from(&self, location: &Location) -> Vec<Location> {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return Vec::new();
        };

        if haversine::distance(location, last) < haversine::distance(location, first) {
            self.points.iter().rev().copied().collect()
        } else {
            self.points.clone()
        }
    }
}
