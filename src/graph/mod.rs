
pub mod loader;

use crate::collections::FxIndexMap;
use crate::errors::MapError;
use crate::geometry::Point;

use std::fmt;


/// A place on the map - a single state of the search space
/// Names are unique within a map, two locations are the same if their names match
#[derive(Clone, Debug)]
pub struct Location {
    name: String,
    point: Point,
    roads: Vec<Road>, // roads leading away from this location
}

impl Location {

    pub fn new(name: impl Into<String>, point: Point) -> Self {
        Self {
            name: name.into(),
            point,
            roads: Vec::new(),
        }
    }

    /// Location without coordinates, placed at the origin
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Point::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Outgoing roads, in the order they were recorded
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// First road leading directly to the named location
    pub fn find_road(&self, destination: &str) -> Option<&Road> {
        self.roads.iter().find(|road| road.to == destination)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Location {}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}


/// Directed road segment between two locations
/// Road names are not required to be unique
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub name: String,
    pub from: String,
    pub to: String,
    pub cost: f64, // time or distance needed to traverse the segment
    destination: usize, // index of `to` in the owning map, usize::MAX until recorded
}

impl Road {

    pub fn new(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            to: to.into(),
            cost,
            destination: usize::MAX,
        }
    }

    pub(crate) fn destination_index(&self) -> usize {
        self.destination
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FROM {} TO {}", self.name, self.from, self.to)
    }
}


/// Street map - adjacency list graph of locations and the roads leaving them
/// Read-only once built, searches only borrow it
#[derive(Clone, Debug, Default)]
pub struct StreetMap {
    locations: FxIndexMap<String, Location>,
}

impl StreetMap {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub(crate) fn location_at(&self, index: usize) -> Option<&Location> {
        self.locations.get_index(index).map(|(_, location)| location)
    }

    /// Add a location to the map
    /// Fails if a location with the same name is already recorded
    pub fn record_location(&mut self, location: Location) -> Result<(), MapError> {
        if self.locations.contains_key(location.name()) {
            return Err(MapError::DuplicateLocation(location.name));
        }
        self.locations.insert(location.name.clone(), location);
        Ok(())
    }

    /// Resolve both endpoints of the road and attach it to its source location
    /// Both locations must already be recorded
    pub fn record_road(&mut self, mut road: Road) -> Result<(), MapError> {
        if !road.cost.is_finite() || road.cost < 0.0 {
            return Err(MapError::InvalidCost { road: road.name, cost: road.cost });
        }

        road.destination = self.locations.get_index_of(&road.to)
            .ok_or_else(|| MapError::MissingLocation(road.to.clone()))?;

        match self.locations.get_mut(&road.from) {
            Some(source) => {
                source.roads.push(road);
                Ok(())
            }
            None => Err(MapError::MissingLocation(road.from)),
        }
    }

    /// All locations in the order they were recorded
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Every road on the map, grouped by source location
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.locations.values().flat_map(|location| location.roads.iter())
    }
}
