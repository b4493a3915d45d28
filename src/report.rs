//! Text reports for route searches, one block per strategy and checking mode

use crate::errors::ReportError;
use crate::graph::StreetMap;
use crate::search_algos::{Node, Search, SearchOutcome, Strategy};

use std::io::Write;


/// Summary of one search run
#[derive(Clone, Debug, PartialEq)]
pub struct Trial {
    pub strategy: Strategy,
    pub checked: bool,
    pub cost: Option<f64>, // None when no route was found
    pub expansions: usize,
}


/// Write the route from the root of the search tree to `node`
pub fn write_solution<W: Write>(out: &mut W, node: &Node<'_>) -> std::io::Result<()> {
    writeln!(out, "START AT {}.", node.tree_root().location())?;
    for (road, _) in node.path() {
        writeln!(out, "TAKE {road}.")?;
    }
    Ok(())
}

/// Run one search and write its result block
pub fn write_trial<W: Write>(out: &mut W, search: &mut Search<'_>, checked: bool) -> Result<Trial, ReportError> {
    let mode = if checked { "WITH" } else { "WITHOUT" };
    writeln!(out, "TESTING {} {} REPEATED STATE CHECKING", search.strategy().title(), mode)?;

    let outcome = search.search(checked)?;

    writeln!(out, "Solution:")?;
    let cost = match &outcome {
        SearchOutcome::Solved(node) => {
            write_solution(out, node)?;
            writeln!(out, "Path Cost = {:.6}.", node.cost())?;
            Some(node.cost())
        }
        SearchOutcome::Exhausted | SearchOutcome::UnknownLocation(_) => {
            writeln!(out, "None found.")?;
            None
        }
    };
    writeln!(out, "Number of Node Expansions = {}.", search.expansions())?;

    Ok(Trial {
        strategy: search.strategy(),
        checked,
        cost,
        expansions: search.expansions(),
    })
}

/// Run every strategy without, then with, repeated state checking
pub fn compare<W: Write>(
    out: &mut W,
    map: &StreetMap,
    strategies: &[Strategy],
    initial: &str,
    destination: &str,
    depth_limit: usize,
) -> Result<Vec<Trial>, ReportError> {
    let kind = if strategies.iter().any(|s| s.is_informed()) { "HEURISTIC" } else { "UNINFORMED" };
    writeln!(out, "{kind} SEARCH ALGORITHM COMPARISON")?;

    let mut trials = Vec::with_capacity(strategies.len() * 2);
    for &strategy in strategies {
        let mut search = Search::new(map, strategy, initial, destination, depth_limit);
        trials.push(write_trial(out, &mut search, false)?);
        trials.push(write_trial(out, &mut search, true)?);
    }

    writeln!(out, "ALGORITHM COMPARISON COMPLETE")?;
    Ok(trials)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::loader::load;
    use crate::search_algos::DEFAULT_DEPTH_LIMIT;

    const LOCATIONS: &str = "A 0 0\nB 2 1\nC 4 0\n";
    const ROADS: &str = "ab A B 2\nbc B C 2\nac A C 5\n";

    #[test]
    fn test_write_solution() {
        let map = load(LOCATIONS.as_bytes(), ROADS.as_bytes()).unwrap();
        let mut search = Search::new(&map, Strategy::UniformCost, "A", "C", DEFAULT_DEPTH_LIMIT);
        let node = search.search(true).unwrap().into_solution().unwrap();

        let mut out = Vec::new();
        write_solution(&mut out, &node).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "START AT A.\nTAKE ab FROM A TO B.\nTAKE bc FROM B TO C.\n",
        );
    }

    #[test]
    fn test_write_trial() {
        let map = load(LOCATIONS.as_bytes(), ROADS.as_bytes()).unwrap();
        let mut search = Search::new(&map, Strategy::BreadthFirst, "A", "C", DEFAULT_DEPTH_LIMIT);

        let mut out = Vec::new();
        let trial = write_trial(&mut out, &mut search, false).unwrap();
        assert_eq!(trial, Trial { strategy: Strategy::BreadthFirst, checked: false, cost: Some(5.0), expansions: 2 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "TESTING BFS WITHOUT REPEATED STATE CHECKING\n\
             Solution:\n\
             START AT A.\n\
             TAKE ac FROM A TO C.\n\
             Path Cost = 5.000000.\n\
             Number of Node Expansions = 2.\n",
        );
    }

    #[test]
    fn test_write_trial_without_solution() {
        let map = load(LOCATIONS.as_bytes(), ROADS.as_bytes()).unwrap();
        let mut search = Search::new(&map, Strategy::AStar, "C", "A", DEFAULT_DEPTH_LIMIT);

        let mut out = Vec::new();
        let trial = write_trial(&mut out, &mut search, true).unwrap();
        assert_eq!(trial.cost, None);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("TESTING A* SEARCH WITH REPEATED STATE CHECKING\n"));
        assert!(text.contains("None found.\n"));
        assert!(text.ends_with("Number of Node Expansions = 1.\n"));
    }

    #[test]
    fn test_compare() {
        let map = load(LOCATIONS.as_bytes(), ROADS.as_bytes()).unwrap();

        let mut out = Vec::new();
        let trials = compare(&mut out, &map, &Strategy::ALL, "A", "C", DEFAULT_DEPTH_LIMIT).unwrap();
        assert_eq!(trials.len(), 10);

        let costs: Vec<_> = trials.iter().map(|t| t.cost.unwrap()).collect();
        assert_eq!(costs, vec![5.0, 5.0, 5.0, 5.0, 4.0, 4.0, 5.0, 5.0, 4.0, 4.0]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HEURISTIC SEARCH ALGORITHM COMPARISON\n"));
        assert!(text.ends_with("ALGORITHM COMPARISON COMPLETE\n"));
    }

    #[test]
    fn test_compare_uninformed_header() {
        let map = load(LOCATIONS.as_bytes(), ROADS.as_bytes()).unwrap();
        let strategies = [Strategy::BreadthFirst, Strategy::DepthFirst];

        let mut out = Vec::new();
        compare(&mut out, &map, &strategies, "A", "C", DEFAULT_DEPTH_LIMIT).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("UNINFORMED SEARCH ALGORITHM COMPARISON\n"));
    }
}
