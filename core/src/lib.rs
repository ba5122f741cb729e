//! country-router-core: In-memory country border graph and route search.
//!
//! Indexes a static country dataset by numeric id and three-letter code and
//! finds shortest routes (by hop count) across shared borders. Borders are
//! directed exactly as each country lists them.
//!
//! The default search is a depth-first branch-and-bound with a per-query
//! distance memo; a breadth-first search is available as an alternative
//! strategy and as a reference.

mod bfs;
mod error;
mod graph;
mod limits;
mod search;

pub use bfs::bfs_path;
pub use error::{GraphError, SearchError};
pub use graph::{Country, CountryGraph, NodeId};
pub use limits::{CancelToken, SearchLimits};
pub use search::{find_path, PathSearch, SearchOutcome, SearchStats, Strategy};
