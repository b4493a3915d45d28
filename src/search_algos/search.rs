use crate::collections::FxHashSet;
use crate::errors::SearchError;
use crate::graph::StreetMap;
use super::frontier::Frontier;
use super::heuristic::{Heuristic, StraightLineHeuristic};
use super::node::Node;
use super::sorted_frontier::SortedFrontier;
use super::strategy::{Discipline, Strategy};

use std::rc::Rc;
use log::{debug, trace, warn};


/// Depth limit used by the drivers, keeps cyclic maps from running forever
pub const DEFAULT_DEPTH_LIMIT: usize = 1000;


/// Result of a single search
#[derive(Debug)]
pub enum SearchOutcome<'g> {
    Solved(Rc<Node<'g>>), // node at the destination, its parent chain is the route
    Exhausted, // frontier emptied or depth limit reached
    UnknownLocation(String), // initial or destination location is not on the map
}

impl<'g> SearchOutcome<'g> {

    pub fn solution(&self) -> Option<&Rc<Node<'g>>> {
        match self {
            SearchOutcome::Solved(node) => Some(node),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Rc<Node<'g>>> {
        match self {
            SearchOutcome::Solved(node) => Some(node),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}


/// Open list for one search run
enum OpenList<'g> {
    Queue(Frontier<'g>),
    Stack(Frontier<'g>),
    Sorted(SortedFrontier<'g>),
}

impl<'g> OpenList<'g> {

    fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Fifo => OpenList::Queue(Frontier::new()),
            Discipline::Lifo => OpenList::Stack(Frontier::new()),
            Discipline::Sorted(by) => OpenList::Sorted(SortedFrontier::new(by)),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            OpenList::Queue(frontier) | OpenList::Stack(frontier) => frontier.is_empty(),
            OpenList::Sorted(frontier) => frontier.is_empty(),
        }
    }

    fn remove_next(&mut self) -> Option<Rc<Node<'g>>> {
        match self {
            OpenList::Queue(frontier) | OpenList::Stack(frontier) => frontier.remove_next(),
            OpenList::Sorted(frontier) => frontier.remove_next(),
        }
    }

    fn insert(&mut self, node: Rc<Node<'g>>) -> Result<(), SearchError> {
        match self {
            OpenList::Queue(frontier) => frontier.insert_bottom(node),
            OpenList::Stack(frontier) => frontier.insert_top(node),
            OpenList::Sorted(frontier) => frontier.insert(node)?,
        }
        Ok(())
    }

    /// Swap in `node` if the frontier holds a costlier node for the same location
    fn requeue_if_cheaper(&mut self, node: Rc<Node<'g>>) -> Result<(), SearchError> {
        let OpenList::Sorted(frontier) = self else {
            return Ok(());
        };

        let costlier = frontier.find(node.location().name())
            .is_some_and(|resident| node.cost() < resident.cost());

        if costlier {
            trace!("requeueing {} at cost {}", node.location(), node.cost());
            frontier.replace(node)?;
        }
        Ok(())
    }
}


/// Route search between two named locations with one of the five strategies
///
/// The frontier and explored set live only for the duration of a `search` call,
/// so one instance can be searched repeatedly, with and without repeated state
/// checking, over the same borrowed map.
pub struct Search<'g> {
    map: &'g StreetMap,
    strategy: Strategy,
    initial: String,
    destination: String,
    depth_limit: usize,
    heuristic: Option<Box<dyn Heuristic + 'g>>, // overrides the straight line estimate
    expansions: usize, // node expansions during the last search
}

impl<'g> Search<'g> {

    pub fn new(
        map: &'g StreetMap,
        strategy: Strategy,
        initial: impl Into<String>,
        destination: impl Into<String>,
        depth_limit: usize,
    ) -> Self {
        Self {
            map,
            strategy,
            initial: initial.into(),
            destination: destination.into(),
            depth_limit,
            heuristic: None,
            expansions: 0,
        }
    }

    /// Use a custom estimate for informed strategies
    pub fn with_heuristic<H>(mut self, heuristic: H) -> Self
    where
        H: Heuristic + 'g,
    {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Number of nodes expanded by the most recent search
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Run the search to completion
    ///
    /// With `check_repeated`, a location is put on the frontier at most once,
    /// except that uniform-cost and A* swap in a cheaper node for a location
    /// still waiting in the frontier.
    pub fn search(&mut self, check_repeated: bool) -> Result<SearchOutcome<'g>, SearchError> {
        self.expansions = 0;
        let map = self.map;

        let Some(start) = map.find_location(&self.initial) else {
            warn!("initial location {} is not on the map", self.initial);
            return Ok(SearchOutcome::UnknownLocation(self.initial.clone()));
        };

        let root = Node::root(start);
        if root.is_goal(&self.destination) {
            return Ok(SearchOutcome::Solved(root));
        }

        let Some(goal) = map.find_location(&self.destination) else {
            warn!("destination location {} is not on the map", self.destination);
            return Ok(SearchOutcome::UnknownLocation(self.destination.clone()));
        };

        let straight_line;
        let heuristic: Option<&dyn Heuristic> = match (self.strategy.is_informed(), self.heuristic.as_deref()) {
            (false, _) => None,
            (true, Some(custom)) => Some(custom),
            (true, None) => {
                straight_line = StraightLineHeuristic::new(map, goal);
                Some(&straight_line)
            }
        };

        debug!(
            "{} search from {} to {} (repeated state checking: {})",
            self.strategy, self.initial, self.destination, check_repeated,
        );

        let mut open = OpenList::new(self.strategy.discipline());
        let mut explored: FxHashSet<&'g str> = FxHashSet::default();

        open.insert(Rc::clone(&root))?;
        if check_repeated {
            explored.insert(start.name());
        }

        // children of the most recently removed node must stay within the limit
        let mut depth = root.depth();
        while !open.is_empty() && depth + 1 < self.depth_limit {
            let Some(node) = open.remove_next() else {
                break;
            };
            depth = node.depth();

            if node.is_goal(&self.destination) {
                debug!(
                    "{} reached {} at cost {} after {} expansions",
                    self.strategy, self.destination, node.cost(), self.expansions,
                );
                return Ok(SearchOutcome::Solved(node));
            }

            let children = node.expand(map, heuristic);
            self.expansions += 1;
            trace!("expanded {} at depth {} into {} children", node.location(), depth, children.len());

            for child in children {
                if !check_repeated {
                    open.insert(child)?;
                } else if explored.insert(child.location().name()) {
                    open.insert(child)?;
                } else if self.strategy.requeues_cheaper() {
                    open.requeue_if_cheaper(child)?;
                }
            }
        }

        debug!("{} exhausted after {} expansions", self.strategy, self.expansions);
        Ok(SearchOutcome::Exhausted)
    }
}
