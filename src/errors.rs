use thiserror::Error;


/// Failures while building a street map
#[derive(Debug, Error)]
pub enum MapError {
    #[error("The location, {0}, is not known.")]
    MissingLocation(String), // Road endpoint was never recorded

    #[error("The location, {0}, is already recorded.")]
    DuplicateLocation(String),

    #[error("Road {road} has an invalid cost of {cost}")]
    InvalidCost { road: String, cost: f64 },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures raised by the search machinery itself
/// Running out of frontier is not one of them, see `SearchOutcome`
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Two distinct search trees reached {0} with identical statistics")]
    AmbiguousOrder(String),
}

/// Name that does not match any search strategy
#[derive(Debug, Error)]
#[error("Unknown search strategy {0:?}, expected one of bfs, dfs, ucs, greedy, astar")]
pub struct UnknownStrategy(pub String);

/// Failures while writing a search report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
