//! Route search over street maps
//!
//! Breadth-first, depth-first, uniform-cost, greedy and A* search, all driven by
//! one expansion loop over search tree nodes and a FIFO, LIFO or sorted frontier.

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod report;
pub mod search_algos;

pub use errors::{MapError, ReportError, SearchError, UnknownStrategy};
pub use graph::{Location, Road, StreetMap};
pub use search_algos::{Search, SearchOutcome, Strategy, DEFAULT_DEPTH_LIMIT};
