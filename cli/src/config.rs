use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use country_router_core::{SearchLimits, Strategy};
use serde::Deserialize;

pub const DEFAULT_DATASET: &str = "countries.json";
pub const DEFAULT_SEPARATOR: &str = " -> ";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Upper bound for `deadline_ms` (10 minutes).
pub const MAX_DEADLINE_MS: u64 = 600_000;

/// Runtime settings.
///
/// Built-in defaults, then the TOML file, then command-line overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// REST Countries v2 JSON file to load.
    pub dataset: PathBuf,
    pub strategy: Strategy,
    /// Printed between country names in a route.
    pub separator: String,
    /// Per-search deadline. 0 disables it.
    pub deadline_ms: u64,
    /// Per-search cap on expanded countries. 0 disables it.
    pub max_expansions: usize,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            strategy: Strategy::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            deadline_ms: 0,
            max_expansions: 0,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_toml(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Command-line values win over the file; `None` keeps the file value.
    pub fn apply_overrides(
        &mut self,
        dataset: Option<PathBuf>,
        strategy: Option<Strategy>,
        deadline_ms: Option<u64>,
    ) {
        if let Some(dataset) = dataset {
            self.dataset = dataset;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(deadline_ms) = deadline_ms {
            self.deadline_ms = deadline_ms;
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reject values outside their allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.deadline_ms > MAX_DEADLINE_MS {
            bail!(
                "deadline_ms must be between 0 and {}, got {}",
                MAX_DEADLINE_MS,
                self.deadline_ms
            );
        }
        if self.separator.is_empty() {
            bail!("separator must not be empty");
        }
        Ok(())
    }

    /// Fresh limits for one search. The deadline starts counting now.
    pub fn limits(&self) -> SearchLimits {
        let mut limits = SearchLimits::unbounded();
        if self.deadline_ms > 0 {
            limits = limits.with_timeout(Duration::from_millis(self.deadline_ms));
        }
        if self.max_expansions > 0 {
            limits = limits.with_max_expansions(self.max_expansions);
        }
        limits
    }
}
