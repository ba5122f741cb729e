use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Numeric country identifier (ISO 3166-1 numeric code in the stock dataset).
pub type NodeId = u32;

/// A country record. Immutable once handed to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub numeric_id: NodeId,
    /// Three-letter code. Border lists refer to countries by this code.
    pub code3: String,
    pub name: String,
    /// Codes of directly adjacent countries, in dataset order.
    /// Directed: listing B here does not imply B lists this country.
    #[serde(default)]
    pub borders: Vec<String>,
}

impl Country {
    pub fn new(numeric_id: NodeId, code3: &str, name: &str, borders: &[&str]) -> Self {
        Self {
            numeric_id,
            code3: code3.to_string(),
            name: name.to_string(),
            borders: borders.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// Lookup index over a static country dataset.
///
/// Countries are kept in dataset order; both identifier spaces map to a slot
/// in that vector. Adjacency is resolved lazily from each country's
/// `borders` list, so the index never stores a second copy of the edges.
#[derive(Debug, Clone)]
pub struct CountryGraph {
    countries: Vec<Country>,
    by_id: HashMap<NodeId, usize>,
    by_code: HashMap<String, usize>,
}

impl CountryGraph {
    /// Build the index, rejecting datasets that reuse a numeric id or a code.
    pub fn new(countries: Vec<Country>) -> Result<Self, GraphError> {
        let mut by_id = HashMap::with_capacity(countries.len());
        let mut by_code = HashMap::with_capacity(countries.len());

        for (slot, country) in countries.iter().enumerate() {
            if by_id.insert(country.numeric_id, slot).is_some() {
                return Err(GraphError::DuplicateId {
                    id: country.numeric_id,
                });
            }
            if by_code.insert(country.code3.clone(), slot).is_some() {
                return Err(GraphError::DuplicateCode {
                    code: country.code3.clone(),
                });
            }
        }

        Ok(Self {
            countries,
            by_id,
            by_code,
        })
    }

    pub fn find_by_id(&self, numeric_id: NodeId) -> Option<&Country> {
        self.by_id.get(&numeric_id).map(|&slot| &self.countries[slot])
    }

    pub fn find_by_code(&self, code3: &str) -> Option<&Country> {
        self.by_code.get(code3).map(|&slot| &self.countries[slot])
    }

    /// Neighbours of `country` in `borders` order.
    ///
    /// Border codes with no matching country are skipped.
    pub fn neighbors_of<'a>(&'a self, country: &'a Country) -> impl Iterator<Item = &'a Country> {
        country
            .borders
            .iter()
            .filter_map(move |code| self.find_by_code(code))
    }

    /// Neighbour ids of the country with `numeric_id`. Empty if the id is unknown.
    pub fn neighbor_ids(&self, numeric_id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.find_by_id(numeric_id)
            .into_iter()
            .flat_map(move |c| self.neighbors_of(c))
            .map(|c| c.numeric_id)
    }

    /// All countries in dataset order.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn node_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of border entries that resolve to a country.
    pub fn edge_count(&self) -> usize {
        self.countries
            .iter()
            .map(|c| self.neighbors_of(c).count())
            .sum()
    }

    /// Border entries naming a code that is not in the dataset.
    pub fn dangling_borders(&self) -> Vec<(NodeId, String)> {
        self.countries
            .iter()
            .flat_map(move |c| {
                c.borders
                    .iter()
                    .filter(move |code| !self.by_code.contains_key(code.as_str()))
                    .map(move |code| (c.numeric_id, code.clone()))
            })
            .collect()
    }

    /// Edges `a -> b` where `b` does not list `a` back.
    pub fn asymmetric_borders(&self) -> Vec<(NodeId, NodeId)> {
        let edges: HashSet<(NodeId, NodeId)> = self
            .countries
            .iter()
            .flat_map(move |c| self.neighbors_of(c).map(move |n| (c.numeric_id, n.numeric_id)))
            .collect();

        let mut one_way: Vec<(NodeId, NodeId)> = edges
            .iter()
            .filter(|&&(a, b)| !edges.contains(&(b, a)))
            .copied()
            .collect();
        one_way.sort_unstable();
        one_way
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let records: usize = self
            .countries
            .iter()
            .map(|c| {
                size_of::<Country>()
                    + c.code3.len()
                    + c.name.len()
                    + c.borders.iter().map(|b| size_of::<String>() + b.len()).sum::<usize>()
            })
            .sum();
        let id_index = self.by_id.len() * (size_of::<NodeId>() + size_of::<usize>() + 8);
        let code_index = self.by_code.len() * (size_of::<String>() + 3 + size_of::<usize>() + 8);

        records + id_index + code_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CountryGraph {
        CountryGraph::new(vec![
            Country::new(1, "AAA", "Alpha", &["BBB", "ZZZ"]),
            Country::new(2, "BBB", "Beta", &["AAA", "CCC"]),
            Country::new(3, "CCC", "Gamma", &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_id_and_code() {
        let g = sample();
        assert_eq!(g.find_by_id(2).unwrap().code3, "BBB");
        assert_eq!(g.find_by_code("CCC").unwrap().numeric_id, 3);
        assert!(g.find_by_id(99).is_none());
        assert!(g.find_by_code("XYZ").is_none());
    }

    #[test]
    fn test_neighbors_skip_dangling_codes() {
        let g = sample();
        let alpha = g.find_by_id(1).unwrap();
        let names: Vec<&str> = g.neighbors_of(alpha).map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beta"]);
    }

    #[test]
    fn test_neighbors_keep_border_order() {
        let g = sample();
        let ids: Vec<NodeId> = g.neighbor_ids(2).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_neighbor_ids_unknown_node() {
        let g = sample();
        assert_eq!(g.neighbor_ids(42).count(), 0);
    }

    #[test]
    fn test_isolated_node_has_no_neighbors() {
        let g = sample();
        assert_eq!(g.neighbor_ids(3).count(), 0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = CountryGraph::new(vec![
            Country::new(1, "AAA", "Alpha", &[]),
            Country::new(1, "BBB", "Beta", &[]),
        ])
        .unwrap_err();
        assert_eq!(err, GraphError::DuplicateId { id: 1 });
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let err = CountryGraph::new(vec![
            Country::new(1, "AAA", "Alpha", &[]),
            Country::new(2, "AAA", "Beta", &[]),
        ])
        .unwrap_err();
        assert_eq!(err, GraphError::DuplicateCode { code: "AAA".into() });
    }

    #[test]
    fn test_counts() {
        let g = sample();
        assert_eq!(g.node_count(), 3);
        // AAA->BBB, BBB->AAA, BBB->CCC; AAA->ZZZ does not resolve
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_dangling_borders() {
        let g = sample();
        assert_eq!(g.dangling_borders(), vec![(1, "ZZZ".to_string())]);
    }

    #[test]
    fn test_asymmetric_borders() {
        let g = sample();
        assert_eq!(g.asymmetric_borders(), vec![(2, 3)]);
    }

    #[test]
    fn test_countries_in_dataset_order() {
        let g = sample();
        let codes: Vec<&str> = g.countries().map(|c| c.code3.as_str()).collect();
        assert_eq!(codes, vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn test_empty_graph() {
        let g = CountryGraph::new(Vec::new()).unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.dangling_borders().is_empty());
    }

    #[test]
    fn test_memory_usage_nonzero() {
        assert!(sample().memory_usage() > 0);
    }

    #[test]
    fn test_country_deserializes_without_borders() {
        let c: Country =
            serde_json::from_str(r#"{"numeric_id": 7, "code3": "ABC", "name": "Abc"}"#).unwrap();
        assert!(c.borders.is_empty());
    }
}
