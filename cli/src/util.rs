use country_router_core::{CountryGraph, NodeId};

/// Resolve user input to a country id: three-letter code first
/// (case-insensitive), then decimal numeric code.
///
/// Returns None for unknown countries.
pub fn resolve_country(graph: &CountryGraph, input: &str) -> Option<NodeId> {
    let input = input.trim();
    graph
        .find_by_code(&input.to_uppercase())
        .map(|c| c.numeric_id)
        .or_else(|| {
            input
                .parse::<NodeId>()
                .ok()
                .filter(|id| graph.find_by_id(*id).is_some())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;

    #[test]
    fn test_resolve_by_code() {
        let ds = sample();
        assert_eq!(resolve_country(&ds.graph, "ESP"), Some(724));
        assert_eq!(resolve_country(&ds.graph, " esp "), Some(724));
    }

    #[test]
    fn test_resolve_by_numeric_code() {
        let ds = sample();
        assert_eq!(resolve_country(&ds.graph, "020"), Some(20));
        assert_eq!(resolve_country(&ds.graph, "20"), Some(20));
    }

    #[test]
    fn test_resolve_unknown() {
        let ds = sample();
        assert_eq!(resolve_country(&ds.graph, "KOS"), None);
        assert_eq!(resolve_country(&ds.graph, "4"), None);
        assert_eq!(resolve_country(&ds.graph, ""), None);
    }
}
