use std::cmp::Ordering;

use crate::dataset::{CountryRecord, Dataset};

/// Column the country list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Alphabetical.
    #[default]
    Name,
    /// Largest first.
    Population,
    /// Largest first; countries without an area go last.
    Area,
}

impl SortKey {
    /// Unrecognised keys sort by name.
    pub fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "population" => SortKey::Population,
            "area" => SortKey::Area,
            _ => SortKey::Name,
        }
    }
}

pub fn speaks_english(record: &CountryRecord) -> bool {
    record.languages.iter().any(|l| l == "eng")
}

/// Countries to list, filtered and sorted. Equal keys keep dataset order.
pub fn list_countries(dataset: &Dataset, key: SortKey, english_only: bool) -> Vec<&CountryRecord> {
    let mut rows: Vec<&CountryRecord> = dataset
        .records
        .iter()
        .filter(|r| !english_only || speaks_english(r))
        .collect();

    match key {
        SortKey::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Population => rows.sort_by(|a, b| b.population.cmp(&a.population)),
        SortKey::Area => rows.sort_by(|a, b| match (a.area, b.area) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }

    rows
}
