use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use country_router_core::{Country, CountryGraph, NodeId};
use serde::Deserialize;
use tracing::{info, warn};

/// Display data kept alongside the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub numeric_id: NodeId,
    pub code3: String,
    pub name: String,
    pub population: u64,
    pub area: Option<f64>,
    /// ISO 639-2 codes of official languages.
    pub languages: Vec<String>,
    pub flag: Option<String>,
}

/// A loaded country dataset: display records plus the border graph.
#[derive(Debug)]
pub struct Dataset {
    pub records: Vec<CountryRecord>,
    pub graph: CountryGraph,
    by_id: HashMap<NodeId, usize>,
    /// Records dropped for lacking a usable numeric code.
    pub skipped: usize,
    pub load_time_ms: f64,
}

// ---------------------------------------------------------------------------
// REST Countries v2 wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCountry {
    name: String,
    alpha3_code: String,
    numeric_code: Option<String>,
    #[serde(default)]
    borders: Vec<String>,
    #[serde(default)]
    population: u64,
    area: Option<f64>,
    #[serde(default)]
    languages: Vec<RawLanguage>,
    flag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLanguage {
    iso639_2: Option<String>,
}

impl Dataset {
    /// Load a REST Countries v2 JSON array from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading dataset {}", path.display()))?;
        let dataset = Self::from_json_str(&text)
            .with_context(|| format!("loading dataset {}", path.display()))?;

        info!(
            path = %path.display(),
            countries = dataset.graph.node_count(),
            borders = dataset.graph.edge_count(),
            skipped = dataset.skipped,
            load_time_ms = dataset.load_time_ms,
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let start = Instant::now();
        let raw: Vec<RawCountry> = serde_json::from_str(text).context("invalid country JSON")?;

        let mut records = Vec::with_capacity(raw.len());
        let mut countries = Vec::with_capacity(raw.len());
        let mut skipped = 0;

        for rc in raw {
            let Some(numeric_id) = rc.numeric_code.as_deref().and_then(parse_numeric_code) else {
                warn!(
                    country = %rc.name,
                    code = %rc.alpha3_code,
                    numeric_code = ?rc.numeric_code,
                    "skipping country without a usable numeric code"
                );
                skipped += 1;
                continue;
            };

            records.push(CountryRecord {
                numeric_id,
                code3: rc.alpha3_code.clone(),
                name: rc.name.clone(),
                population: rc.population,
                area: rc.area,
                languages: rc.languages.into_iter().filter_map(|l| l.iso639_2).collect(),
                flag: rc.flag,
            });
            countries.push(Country {
                numeric_id,
                code3: rc.alpha3_code,
                name: rc.name,
                borders: rc.borders,
            });
        }

        let graph = CountryGraph::new(countries)?;
        let by_id = records
            .iter()
            .enumerate()
            .map(|(slot, r)| (r.numeric_id, slot))
            .collect();

        Ok(Self {
            records,
            graph,
            by_id,
            skipped,
            load_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }

    pub fn record(&self, id: NodeId) -> Option<&CountryRecord> {
        self.by_id.get(&id).map(|&slot| &self.records[slot])
    }

    /// Display name for `id`, falling back to the id itself.
    pub fn name_of(&self, id: NodeId) -> String {
        self.record(id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Parse a numeric code such as `"004"`. Leading zeros are not significant.
fn parse_numeric_code(code: &str) -> Option<NodeId> {
    code.trim().parse::<NodeId>().ok()
}
