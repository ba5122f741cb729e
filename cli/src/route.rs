use std::fmt;

use anyhow::Result;
use country_router_core::PathSearch;
use tracing::warn;

use crate::config::{Settings, DEFAULT_SEPARATOR};
use crate::dataset::Dataset;
use crate::util::resolve_country;

/// What the route line shows for the current country.
///
/// `NotSelected` and `NoRoute` are different states: the first prints
/// nothing, the second prints a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteView {
    NotSelected,
    NoRoute,
    /// Countries to cross after the starting one, ending at the destination.
    Route(Vec<String>),
}

impl RouteView {
    pub fn render(&self, separator: &str) -> String {
        match self {
            RouteView::NotSelected => String::new(),
            RouteView::NoRoute => "No route found.".to_string(),
            RouteView::Route(names) => names.join(separator),
        }
    }
}

impl fmt::Display for RouteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}

/// Plan a route from `source` to `destination` (both as user input).
///
/// Unknown countries and unreachable destinations give `NoRoute`, as does a
/// destination equal to the source. Fails only when a configured search
/// limit stops the search.
pub fn plan_route(
    dataset: &Dataset,
    settings: &Settings,
    source: &str,
    destination: Option<&str>,
) -> Result<RouteView> {
    let Some(destination) = destination else {
        return Ok(RouteView::NotSelected);
    };

    let graph = &dataset.graph;
    let (Some(from), Some(to)) = (
        resolve_country(graph, source),
        resolve_country(graph, destination),
    ) else {
        warn!(source, destination, "route endpoint not in dataset");
        return Ok(RouteView::NoRoute);
    };

    let outcome = PathSearch::new(graph)
        .with_strategy(settings.strategy)
        .with_limits(settings.limits())
        .run(from, to)?;

    let names: Vec<String> = outcome
        .path
        .unwrap_or_default()
        .into_iter()
        .skip(1)
        .map(|id| dataset.name_of(id))
        .collect();

    if names.is_empty() {
        Ok(RouteView::NoRoute)
    } else {
        Ok(RouteView::Route(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;
    use country_router_core::Strategy;

    fn plan(source: &str, destination: Option<&str>) -> RouteView {
        plan_route(&sample(), &Settings::default(), source, destination).unwrap()
    }

    #[test]
    fn test_route_excludes_source() {
        assert_eq!(
            plan("PRT", Some("DEU")),
            RouteView::Route(vec!["Spain".into(), "France".into(), "Germany".into()])
        );
    }

    #[test]
    fn test_route_to_neighbor() {
        assert_eq!(plan("PRT", Some("724")), RouteView::Route(vec!["Spain".into()]));
    }

    #[test]
    fn test_not_selected() {
        let view = plan("PRT", None);
        assert_eq!(view, RouteView::NotSelected);
        assert_eq!(view.to_string(), "");
    }

    #[test]
    fn test_island_has_no_route() {
        let view = plan("PRT", Some("ISL"));
        assert_eq!(view, RouteView::NoRoute);
        assert_eq!(view.to_string(), "No route found.");
    }

    #[test]
    fn test_same_country_has_no_route() {
        assert_eq!(plan("FRA", Some("fra")), RouteView::NoRoute);
    }

    #[test]
    fn test_unknown_endpoints_have_no_route() {
        assert_eq!(plan("PRT", Some("KOS")), RouteView::NoRoute);
        assert_eq!(plan("XXX", Some("ESP")), RouteView::NoRoute);
    }

    #[test]
    fn test_render_with_separator() {
        let view = plan("PRT", Some("DEU"));
        assert_eq!(view.to_string(), "Spain -> France -> Germany");
        assert_eq!(view.render(" | "), "Spain | France | Germany");
    }

    #[test]
    fn test_breadth_first_setting() {
        let settings = Settings {
            strategy: Strategy::BreadthFirst,
            ..Settings::default()
        };
        let view = plan_route(&sample(), &settings, "DEU", Some("PRT")).unwrap();
        assert_eq!(
            view,
            RouteView::Route(vec!["France".into(), "Spain".into(), "Portugal".into()])
        );
    }

    #[test]
    fn test_expansion_limit_is_error() {
        let settings = Settings {
            max_expansions: 1,
            ..Settings::default()
        };
        assert!(plan_route(&sample(), &settings, "PRT", Some("DEU")).is_err());
    }
}
