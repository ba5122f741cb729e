use std::fmt;
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;

/// Summary of the loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub dataset: PathBuf,
    pub country_count: usize,
    pub border_count: usize,
    pub memory_bytes: usize,
    pub skipped: usize,
    pub dangling_borders: usize,
    pub one_way_borders: usize,
    pub load_time_ms: f64,
}

impl StatusReport {
    pub fn new(path: &Path, dataset: &Dataset) -> Self {
        Self {
            dataset: path.to_path_buf(),
            country_count: dataset.graph.node_count(),
            border_count: dataset.graph.edge_count(),
            memory_bytes: dataset.graph.memory_usage(),
            skipped: dataset.skipped,
            dangling_borders: dataset.graph.dangling_borders().len(),
            one_way_borders: dataset.graph.asymmetric_borders().len(),
            load_time_ms: dataset.load_time_ms,
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18} {}", "dataset", self.dataset.display())?;
        writeln!(f, "{:<18} {}", "countries", self.country_count)?;
        writeln!(f, "{:<18} {}", "borders", self.border_count)?;
        writeln!(f, "{:<18} {}", "memory_bytes", self.memory_bytes)?;
        writeln!(f, "{:<18} {}", "skipped_records", self.skipped)?;
        writeln!(f, "{:<18} {}", "dangling_borders", self.dangling_borders)?;
        writeln!(f, "{:<18} {}", "one_way_borders", self.one_way_borders)?;
        writeln!(f, "{:<18} {:.1}ms", "load_time", self.load_time_ms)
    }
}
