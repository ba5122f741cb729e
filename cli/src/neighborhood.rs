use std::fmt;

use country_router_core::NodeId;

use crate::dataset::Dataset;

/// A country page: name, flag, and bordering countries.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryView {
    pub numeric_id: NodeId,
    pub name: String,
    pub flag: Option<String>,
    /// Neighbour (id, name) pairs in border order.
    pub neighbors: Vec<(NodeId, String)>,
}

pub fn country_view(dataset: &Dataset, id: NodeId) -> Option<CountryView> {
    let country = dataset.graph.find_by_id(id)?;
    let neighbors = dataset
        .graph
        .neighbors_of(country)
        .map(|n| (n.numeric_id, n.name.clone()))
        .collect();

    Some(CountryView {
        numeric_id: id,
        name: country.name.clone(),
        flag: dataset.record(id).and_then(|r| r.flag.clone()),
        neighbors,
    })
}

impl fmt::Display for CountryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        if let Some(flag) = &self.flag {
            writeln!(f, "Flag: {}", flag)?;
        }
        writeln!(f, "Neighbors")?;
        for (_, name) in &self.neighbors {
            writeln!(f, "  {}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;

    #[test]
    fn test_neighbors_in_border_order() {
        let ds = sample();
        let view = country_view(&ds, 724).unwrap();
        let names: Vec<&str> = view.neighbors.iter().map(|(_, n)| n.as_str()).collect();
        // GIB and MAR are not in the dataset
        assert_eq!(names, vec!["Andorra", "France", "Portugal"]);
    }

    #[test]
    fn test_isolated_country() {
        let ds = sample();
        let view = country_view(&ds, 352).unwrap();
        assert!(view.neighbors.is_empty());
        assert_eq!(view.to_string(), "Name: Iceland\nFlag: https://restcountries.eu/data/isl.svg\nNeighbors\n");
    }

    #[test]
    fn test_unknown_country() {
        assert!(country_view(&sample(), 4).is_none());
    }
}
