use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bfs;
use crate::error::SearchError;
use crate::graph::{CountryGraph, NodeId};
use crate::limits::SearchLimits;

/// Which algorithm answers a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Depth-first branch-and-bound. Ties go to the first route found in
    /// depth-first border order.
    #[default]
    #[serde(alias = "dfs")]
    BranchAndBound,
    /// Breadth-first. Same hop counts; ties go to the first route discovered
    /// layer by layer.
    #[serde(alias = "bfs")]
    BreadthFirst,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "branch-and-bound" | "dfs" => Ok(Strategy::BranchAndBound),
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            other => Err(format!(
                "unknown search strategy '{}' (use 'branch-and-bound' or 'breadth-first')",
                other
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BranchAndBound => f.write_str("branch-and-bound"),
            Strategy::BreadthFirst => f.write_str("breadth-first"),
        }
    }
}

/// Work counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose neighbours were examined (or that matched the destination).
    pub expanded: usize,
    /// Branches cut by the distance memo, the incumbent bound, or a prior visit.
    pub pruned: usize,
    /// Longest path held during the search, in nodes.
    pub max_depth: usize,
}

/// Result of a completed search. `path` is `None` when no route exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Vec<NodeId>>,
    pub stats: SearchStats,
}

/// Route query over a country graph.
///
/// Each `run` owns its own search state; the graph is only read, so one
/// `PathSearch` (or many) can serve concurrent callers.
pub struct PathSearch<'g> {
    graph: &'g CountryGraph,
    strategy: Strategy,
    limits: SearchLimits,
}

impl<'g> PathSearch<'g> {
    pub fn new(graph: &'g CountryGraph) -> Self {
        Self {
            graph,
            strategy: Strategy::default(),
            limits: SearchLimits::unbounded(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Find a shortest route from `source` to `destination` by hop count.
    ///
    /// Unknown ids and unreachable destinations yield `Ok` with no path.
    /// Errors only come from the configured limits.
    pub fn run(&self, source: NodeId, destination: NodeId) -> Result<SearchOutcome, SearchError> {
        let mut stats = SearchStats::default();

        let path = match self.strategy {
            Strategy::BranchAndBound => {
                branch_and_bound(self.graph, source, destination, &self.limits, &mut stats)?
            }
            Strategy::BreadthFirst => {
                bfs::breadth_first(self.graph, source, destination, &self.limits, &mut stats)?
            }
        };

        debug!(
            source,
            destination,
            strategy = %self.strategy,
            expanded = stats.expanded,
            pruned = stats.pruned,
            max_depth = stats.max_depth,
            hops = path.as_ref().map(|p| p.len()),
            "route search finished"
        );

        Ok(SearchOutcome { path, stats })
    }
}

/// Shortest route by depth-first branch-and-bound, with no limits.
///
/// Returns the ordered ids from `source` to `destination`, both inclusive,
/// or `None` when either id is unknown or no route exists.
pub fn find_path(graph: &CountryGraph, source: NodeId, destination: NodeId) -> Option<Vec<NodeId>> {
    let mut stats = SearchStats::default();
    branch_and_bound(graph, source, destination, &SearchLimits::unbounded(), &mut stats)
        .ok()
        .flatten()
}

fn branch_and_bound(
    graph: &CountryGraph,
    source: NodeId,
    destination: NodeId,
    limits: &SearchLimits,
    stats: &mut SearchStats,
) -> Result<Option<Vec<NodeId>>, SearchError> {
    if graph.find_by_id(source).is_none() || graph.find_by_id(destination).is_none() {
        return Ok(None);
    }

    let mut state = BranchAndBound {
        graph,
        destination,
        limits,
        stats,
        best_distance_seen: HashMap::new(),
        current_path: vec![source],
        on_path: HashSet::from([source]),
        best_solution: None,
    };
    state.search()?;
    Ok(state.best_solution)
}

/// Per-search state. Built fresh for every query and dropped with it.
struct BranchAndBound<'a> {
    graph: &'a CountryGraph,
    destination: NodeId,
    limits: &'a SearchLimits,
    stats: &'a mut SearchStats,
    /// Shortest path length (in nodes) by which each node has been reached.
    best_distance_seen: HashMap<NodeId, usize>,
    current_path: Vec<NodeId>,
    /// Mirrors `current_path` for O(1) cycle checks.
    on_path: HashSet<NodeId>,
    best_solution: Option<Vec<NodeId>>,
}

impl BranchAndBound<'_> {
    fn search(&mut self) -> Result<(), SearchError> {
        let Some(&node) = self.current_path.last() else {
            return Ok(());
        };
        let len = self.current_path.len();

        match self.best_distance_seen.get(&node) {
            Some(&seen) if len >= seen => {
                self.stats.pruned += 1;
                return Ok(());
            }
            _ => {
                self.best_distance_seen.insert(node, len);
            }
        }

        self.limits.check(self.stats.expanded)?;
        self.stats.expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(len);

        if node == self.destination {
            // Only reachable when no incumbent is as short (see the bound below).
            if self.best_solution.as_ref().map_or(true, |best| best.len() > len) {
                self.best_solution = Some(self.current_path.clone());
            }
            return Ok(());
        }

        let graph = self.graph;
        let Some(country) = graph.find_by_id(node) else {
            return Ok(());
        };

        for neighbor in graph.neighbors_of(country) {
            let next = neighbor.numeric_id;
            if self.on_path.contains(&next) {
                continue;
            }
            // Loose bound: a tie with the incumbent is not worth exploring.
            if let Some(best) = &self.best_solution {
                if best.len() <= len + 1 {
                    self.stats.pruned += 1;
                    continue;
                }
            }

            self.current_path.push(next);
            self.on_path.insert(next);
            let result = self.search();
            self.current_path.pop();
            self.on_path.remove(&next);
            result?;
        }

        Ok(())
    }
}
