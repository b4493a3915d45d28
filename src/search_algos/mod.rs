
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod sorted_frontier;
pub mod strategy;

pub use frontier::Frontier;
pub use heuristic::{Heuristic, StraightLineHeuristic};
pub use node::Node;
pub use search::{Search, SearchOutcome, DEFAULT_DEPTH_LIMIT};
pub use sorted_frontier::{SortBy, SortedFrontier};
pub use strategy::{Discipline, Strategy};
