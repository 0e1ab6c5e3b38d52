//! A number of methods to generate random campus data for testing.

use crate::campus::{
    CampusDefinition, EdgeDefinition, LocationDefinition, RoadConnectionDefinition,
};
use crate::router::router_types::{location::Location, node::Category, road::Road};
use crate::router::router_utils::haversine;
use geo::prelude::*;
use geo::{LineString, Point, Polygon, Rect};
use rand::Rng;

/// Generate a random location within `radius` meters of `center`.
pub fn generate_location_near(center: &Location, radius: f64) -> Location {
    let mut rng = rand::thread_rng();
    gen_around_location(&mut rng, &center.into(), radius).into()
}

/// Generate `capacity` uniquely named places within `radius` meters of
/// `center`.
pub fn generate_locations_near(
    center: &Location,
    radius: f64,
    capacity: usize,
) -> Vec<LocationDefinition> {
    let mut rng = rand::thread_rng();
    (0..capacity)
        .map(|i| {
            let location: Location = gen_around_location(&mut rng, &center.into(), radius).into();
            LocationDefinition {
                name: format!("Place {i}"),
                latitude: location.latitude.into_inner(),
                longitude: location.longitude.into_inner(),
                category: Category::ALL[i % Category::ALL.len()],
                description: format!("Generated place {i}"),
            }
        })
        .collect()
}

/// Generate a connected random campus.
///
/// Places are chained `0 - 1 - ... - n-1` so the campus is always
/// connected, and every other pair is linked with probability
/// `link_probability`. Each link becomes a graph edge weighted by its
/// straight-line length and a straight two-segment road whose ends sit
/// exactly on the places it joins.
pub fn generate_campus_near(
    center: &Location,
    radius: f64,
    capacity: usize,
    link_probability: f64,
) -> CampusDefinition {
    let mut rng = rand::thread_rng();
    let locations = generate_locations_near(center, radius, capacity);
    let points: Vec<Location> = locations
        .iter()
        .map(|l| Location::new(l.latitude, l.longitude))
        .collect();

    let mut links = Vec::new();
    for i in 0..capacity {
        for j in (i + 1)..capacity {
            if j == i + 1 || rng.gen_bool(link_probability) {
                links.push((i, j));
            }
        }
    }

    let mut roads = Vec::new();
    let mut road_sets: Vec<Vec<String>> = vec![Vec::new(); capacity];
    let mut graph = Vec::new();
    for (i, j) in links {
        let name = format!("road_{i}_{j}");
        let middle = Location::new(
            (points[i].latitude.into_inner() + points[j].latitude.into_inner()) / 2.0,
            (points[i].longitude.into_inner() + points[j].longitude.into_inner()) / 2.0,
        );
        roads.push(Road {
            name: name.clone(),
            points: vec![points[i], middle, points[j]],
        });
        road_sets[i].push(name.clone());
        road_sets[j].push(name);

        // guard against coincident random points
        let weight = haversine::distance(&points[i], &points[j]).max(0.01);
        graph.push(EdgeDefinition {
            from: locations[i].name.clone(),
            to: locations[j].name.clone(),
            weight_meters: weight,
        });
    }

    let road_connections = locations
        .iter()
        .zip(road_sets)
        .filter(|(_, roads)| !roads.is_empty())
        .map(|(location, roads)| RoadConnectionDefinition {
            location: location.name.clone(),
            roads,
        })
        .collect();

    CampusDefinition {
        locations,
        roads,
        road_connections,
        graph,
    }
}

/// Generate a random location within a radius (in meters).
///
/// Creates a circle using 360 points around the given latitude/longitude values.
/// Then randomly generates a new point within this circle using a bounding rect.
fn gen_around_location(
    rng: &mut rand::rngs::ThreadRng,
    start_point: &Point,
    radius: f64,
) -> Point<f64> {
    let mut points = vec![];
    for i in 0..360 {
        points.push(start_point.geodesic_destination(i as f64, radius));
    }

    let polygon = Polygon::new(LineString::from(points), vec![]);
    let Some(bounding_rect): Option<Rect> = polygon.bounding_rect() else {
        return *start_point;
    };

    loop {
        let random_x = rng.gen_range(bounding_rect.min().x..bounding_rect.max().x);
        let random_y = rng.gen_range(bounding_rect.min().y..bounding_rect.max().y);
        let random_point = Point::new(random_x, random_y);

        if polygon.contains(&random_point) {
            return random_point;
        }
    }
}
