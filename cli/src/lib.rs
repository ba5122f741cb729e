//! country-router: browse country borders and plan border-crossing routes.
//!
//! Wraps country-router-core with dataset loading (REST Countries v2 JSON),
//! layered configuration, and the text views printed by the binary.

pub mod config;
pub mod dataset;
pub mod listing;
pub mod neighborhood;
pub mod route;
pub mod status;
pub mod util;

#[cfg(test)]
pub(crate) mod fixtures {
    pub const SAMPLE_JSON: &str = include_str!("../tests/fixtures/sample_countries.json");

    pub fn sample() -> crate::dataset::Dataset {
        crate::dataset::Dataset::from_json_str(SAMPLE_JSON).unwrap()
    }
}
