//! Helper functions for working with polylines.

use crate::router::router_types::location::Location;
use crate::router::router_utils::haversine;

/// Total length in meters of a polyline. Fewer than two points yield 0.
pub fn length_meters(points: &[Location]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine::distance(&pair[0], &pair[1]))
        .sum()
}

/// Append `segment` to `polyline`, skipping points equal to the last
/// point already emitted. Consecutive duplicates never survive, so the
/// shared point at a segment boundary is written once.
pub fn append_segment(polyline: &mut Vec<Location>, segment: &[Location]) {
    for point in segment {
        if polyline.last() != Some(point) {
            polyline.push(*point);
        }
    }
}
