use crate::errors::MapError;
use crate::geometry::Point;
use super::{Location, Road, StreetMap};

use std::{fs::File, io::{BufRead, BufReader}, path::Path};
use log::{debug, info};


/// Build a street map from a location source and a road source
/// All locations are recorded before the first road is resolved
///
/// Location records: `name [x [y]]`, one per line
/// Road records: `name from to cost`, one per line, anything after the cost is ignored
/// Blank lines are skipped in both sources
pub fn load<L, R>(locations: L, roads: R) -> Result<StreetMap, MapError>
where
    L: BufRead,
    R: BufRead,
{
    let mut map = StreetMap::new();

    for (line, text) in records(locations) {
        let location = parse_location(line, &text?)?;
        map.record_location(location)?;
    }

    let mut road_count = 0;
    for (line, text) in records(roads) {
        let road = parse_road(line, &text?)?;
        debug!("recording road {road}");
        map.record_road(road)?;
        road_count += 1;
    }

    info!("loaded map with {} locations and {} roads", map.len(), road_count);
    Ok(map)
}

/// Read the location file and the road file from disk
pub fn load_files<P, Q>(location_path: P, road_path: Q) -> Result<StreetMap, MapError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let locations = BufReader::new(File::open(location_path)?);
    let roads = BufReader::new(File::open(road_path)?);
    load(locations, roads)
}


/// Non-blank lines with their 1-based line numbers
fn records<B: BufRead>(source: B) -> impl Iterator<Item = (usize, std::io::Result<String>)> {
    source.lines()
        .enumerate()
        .map(|(idx, text)| (idx + 1, text))
        .filter(|(_, text)| !matches!(text, Ok(t) if t.trim().is_empty()))
}

fn parse_location(line: usize, text: &str) -> Result<Location, MapError> {
    let mut fields = text.split_whitespace();

    let name = fields.next().ok_or_else(|| malformed(line, "missing location name"))?;
    let x = parse_coordinate(line, fields.next())?;
    let y = parse_coordinate(line, fields.next())?;

    if fields.next().is_some() {
        return Err(malformed(line, "unexpected fields after coordinates"));
    }

    Ok(Location::new(name, Point::new(x, y)))
}

fn parse_coordinate(line: usize, field: Option<&str>) -> Result<f64, MapError> {
    match field {
        None => Ok(0.0),
        Some(value) => value.parse()
            .map_err(|_| malformed(line, &format!("invalid coordinate {value:?}"))),
    }
}

fn parse_road(line: usize, text: &str) -> Result<Road, MapError> {
    let fields: Vec<&str> = text.split_whitespace().collect();

    match fields.as_slice() {
        [name, from, to, cost, ..] => {
            let cost: f64 = cost.parse()
                .map_err(|_| malformed(line, &format!("invalid road cost {cost:?}")))?;
            Ok(Road::new(*name, *from, *to, cost))
        }
        _ => Err(malformed(line, "expected `name from to cost`")),
    }
}

fn malformed(line: usize, reason: &str) -> MapError {
    MapError::MalformedRecord { line, reason: reason.to_string() }
}
