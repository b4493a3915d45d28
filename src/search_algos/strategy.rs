use crate::errors::UnknownStrategy;
use super::sorted_frontier::SortBy;

use std::{fmt, str::FromStr};


/// How the open list hands out nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    Fifo, // insert at the bottom, remove from the top
    Lifo, // insert at the top, remove from the top
    Sorted(SortBy), // lowest statistic first
}


/// The five search strategies, all run by the same expansion loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    Greedy,
    AStar,
}

impl Strategy {

    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    pub fn discipline(self) -> Discipline {
        match self {
            Strategy::BreadthFirst => Discipline::Fifo,
            Strategy::DepthFirst => Discipline::Lifo,
            Strategy::UniformCost => Discipline::Sorted(SortBy::Cost),
            Strategy::Greedy => Discipline::Sorted(SortBy::Heuristic),
            Strategy::AStar => Discipline::Sorted(SortBy::Total),
        }
    }

    /// Children carry a heuristic estimate
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar)
    }

    /// With repeated state checking, a cheaper node for a location already in the
    /// frontier replaces the resident one. Only strategies ordered on path cost need it.
    pub fn requeues_cheaper(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::AStar)
    }

    /// Heading used in comparison reports
    pub fn title(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::UniformCost => "UNIFORM-COST SEARCH",
            Strategy::Greedy => "GREEDY SEARCH",
            Strategy::AStar => "A* SEARCH",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "greedy" => Ok(Strategy::Greedy),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disciplines() {
        assert_eq!(Strategy::BreadthFirst.discipline(), Discipline::Fifo);
        assert_eq!(Strategy::DepthFirst.discipline(), Discipline::Lifo);
        assert_eq!(Strategy::UniformCost.discipline(), Discipline::Sorted(SortBy::Cost));
        assert_eq!(Strategy::Greedy.discipline(), Discipline::Sorted(SortBy::Heuristic));
        assert_eq!(Strategy::AStar.discipline(), Discipline::Sorted(SortBy::Total));
    }

    #[test]
    fn test_informed_strategies() {
        let informed: Vec<_> = Strategy::ALL.into_iter().filter(|s| s.is_informed()).collect();
        assert_eq!(informed, vec![Strategy::Greedy, Strategy::AStar]);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert!("dijkstra".parse::<Strategy>().is_err());
    }
}
