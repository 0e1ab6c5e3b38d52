//! The answer handed back to callers of
//! [`Navigator::find_path`](`crate::router::navigator::Navigator::find_path`).

use serde::Serialize;

use super::location::Location;

/// Walking pace used when none is configured, in km/h.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// A walking route between two campus places.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct RouteResult {
    /// Display names of the visited places, source and destination
    /// included.
    pub location_sequence: Vec<String>,

    /// Route length rounded to whole meters.
    pub total_distance_meters: u64,

    /// Full-resolution geometry for rendering, as `[lat, lng]` pairs.
    pub polyline: Vec<Location>,

    /// `true` when no connected path exists and the route is a straight
    /// line between source and destination.
    pub degraded: bool,
}

impl RouteResult {
    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.location_sequence.len().saturating_sub(1)
    }

    /// Whole minutes needed to walk the route, rounded up.
    pub fn walking_minutes(&self, speed_kmh: f64) -> u64 {
        if self.total_distance_meters == 0 || speed_kmh <= 0.0 {
            return 0;
        }

        let hours = self.total_distance_meters as f64 / 1000.0 / speed_kmh;
        (hours * 60.0).ceil() as u64
    }

    /// Short human readable distance: meters below 100 m, otherwise
    /// kilometers with one decimal.
    pub fn formatted_distance(&self) -> String {
        format_distance(self.total_distance_meters as f64)
    }
}

/// Format a distance the way the map sidebar shows it.
pub fn format_distance(meters: f64) -> String {
    if meters < 100.0 {
        format!("{meters:.0}m")
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}
