use crate::graph::NodeId;

/// Dataset violates an index invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate numeric id {id} in country dataset")]
    DuplicateId { id: NodeId },

    #[error("duplicate three-letter code '{code}' in country dataset")]
    DuplicateCode { code: String },
}

/// A limited search stopped before it could finish.
///
/// Never produced for "no route": an unreachable destination is `Ok` with no path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("route search cancelled after expanding {expanded} nodes")]
    Cancelled { expanded: usize },

    #[error("route search exceeded its deadline after expanding {expanded} nodes")]
    DeadlineExceeded { expanded: usize },

    #[error("route search hit the expansion limit of {limit} nodes")]
    ExpansionLimit { limit: usize },
}
