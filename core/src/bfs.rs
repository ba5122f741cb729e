use std::collections::{HashMap, VecDeque};

use crate::error::SearchError;
use crate::graph::{CountryGraph, NodeId};
use crate::limits::SearchLimits;
use crate::search::SearchStats;

/// Shortest route by breadth-first search (unbounded).
///
/// Among equal-length routes this returns the one whose nodes were
/// discovered first, layer by layer, in border order. That can differ from
/// the depth-first result on ties; hop counts always agree.
pub fn bfs_path(graph: &CountryGraph, source: NodeId, destination: NodeId) -> Option<Vec<NodeId>> {
    let mut stats = SearchStats::default();
    breadth_first(graph, source, destination, &SearchLimits::unbounded(), &mut stats)
        .ok()
        .flatten()
}

pub(crate) fn breadth_first(
    graph: &CountryGraph,
    source: NodeId,
    destination: NodeId,
    limits: &SearchLimits,
    stats: &mut SearchStats,
) -> Result<Option<Vec<NodeId>>, SearchError> {
    if graph.find_by_id(source).is_none() || graph.find_by_id(destination).is_none() {
        return Ok(None);
    }

    if source == destination {
        limits.check(stats.expanded)?;
        stats.expanded = 1;
        stats.max_depth = 1;
        return Ok(Some(vec![source]));
    }

    // node -> (parent, path length in nodes); source is its own parent
    let mut visited: HashMap<NodeId, (NodeId, usize)> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(source, (source, 1));
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        limits.check(stats.expanded)?;
        stats.expanded += 1;

        let depth = visited[&current].1;
        stats.max_depth = stats.max_depth.max(depth);

        for next in graph.neighbor_ids(current) {
            if visited.contains_key(&next) {
                stats.pruned += 1;
                continue;
            }
            visited.insert(next, (current, depth + 1));

            if next == destination {
                return Ok(Some(reconstruct(&visited, source, destination)));
            }

            queue.push_back(next);
        }
    }

    Ok(None)
}

fn reconstruct(
    visited: &HashMap<NodeId, (NodeId, usize)>,
    source: NodeId,
    destination: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![destination];
    let mut current = destination;

    while current != source {
        current = visited[&current].0;
        path.push(current);
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Country;

    fn chain(n: u32) -> CountryGraph {
        let codes: Vec<String> = (0..n).map(|i| format!("C{:02}", i)).collect();
        let countries = (0..n)
            .map(|i| {
                let mut borders = Vec::new();
                if i > 0 {
                    borders.push(codes[(i - 1) as usize].as_str());
                }
                if i + 1 < n {
                    borders.push(codes[(i + 1) as usize].as_str());
                }
                Country::new(i, &codes[i as usize], &codes[i as usize], &borders)
            })
            .collect();
        CountryGraph::new(countries).unwrap()
    }

    #[test]
    fn test_bfs_border_chain() {
        let g = chain(5);
        assert_eq!(bfs_path(&g, 0, 4), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(bfs_path(&g, 4, 1), Some(vec![4, 3, 2, 1]));
    }

    #[test]
    fn test_bfs_self() {
        let g = chain(3);
        assert_eq!(bfs_path(&g, 1, 1), Some(vec![1]));
    }

    #[test]
    fn test_bfs_unknown_endpoints() {
        let g = chain(3);
        assert_eq!(bfs_path(&g, 99, 0), None);
        assert_eq!(bfs_path(&g, 0, 99), None);
    }

    #[test]
    fn test_bfs_directed_edge() {
        let g = CountryGraph::new(vec![
            Country::new(1, "AAA", "A", &["BBB"]),
            Country::new(2, "BBB", "B", &[]),
        ])
        .unwrap();
        assert_eq!(bfs_path(&g, 1, 2), Some(vec![1, 2]));
        assert_eq!(bfs_path(&g, 2, 1), None);
    }

    #[test]
    fn test_bfs_respects_expansion_limit() {
        let g = chain(10);
        let limits = SearchLimits::unbounded().with_max_expansions(2);
        let mut stats = SearchStats::default();
        let err = breadth_first(&g, 0, 9, &limits, &mut stats).unwrap_err();
        assert_eq!(err, SearchError::ExpansionLimit { limit: 2 });
    }
}
