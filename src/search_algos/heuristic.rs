use crate::geometry::Point;
use crate::graph::{Location, StreetMap};


/// Estimate of the remaining cost from a location to a fixed destination
/// Implemented for any `Fn(&Location) -> f64`, so closures can be injected directly
pub trait Heuristic {
    fn estimate(&self, location: &Location) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Location) -> f64,
{
    fn estimate(&self, location: &Location) -> f64 {
        self(location)
    }
}


/// Straight line travel time to the destination at the fastest speed seen on the map
///
/// The top speed is the largest `distance(from, to) / cost` over every road.
/// No road can be traversed faster than that, so the estimate never exceeds
/// the true remaining time and the heuristic is admissible.
#[derive(Clone, Debug)]
pub struct StraightLineHeuristic {
    destination: Point,
    top_speed: f64,
}

impl StraightLineHeuristic {

    pub fn new(map: &StreetMap, destination: &Location) -> Self {
        Self {
            destination: *destination.point(),
            top_speed: top_speed(map),
        }
    }

    pub fn top_speed(&self) -> f64 {
        self.top_speed
    }
}

impl Heuristic for StraightLineHeuristic {
    fn estimate(&self, location: &Location) -> f64 {
        // No measurable speed means coordinates carry no information
        if self.top_speed <= 0.0 {
            return 0.0;
        }
        location.point().distance_to(&self.destination) / self.top_speed
    }
}


/// Fastest straight line speed over all roads
/// Zero cost roads with length give an infinite speed, which collapses the estimate to zero
fn top_speed(map: &StreetMap) -> f64 {
    let mut speed: f64 = 0.0;

    for location in map.locations() {
        for road in location.roads() {
            let Some(to) = map.location_at(road.destination_index()) else {
                continue;
            };
            // f64::max ignores the NaN of a zero length, zero cost road
            speed = speed.max(location.point().distance_to(to.point()) / road.cost);
        }
    }

    speed
}
