//! Route command executor

use console::style;
use miette::{Result, WrapErr};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::RouteConfig;
use crate::error::WayfinderError;
use crate::executors::CommandExecutor;
use crate::loader::{LoadedGraph, load_graph};
use crate::traversal::shortest_path;
use crate::utils::string::pluralize;

pub struct RouteExecutor;

impl CommandExecutor for RouteExecutor {
    type Config = RouteConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let loaded = load_graph(&config.file)
            .wrap_err_with(|| format!("Failed to load graph '{}'", config.file.display()))?;

        eprintln!(
            "{} Routing through {} from {} to {}...\n",
            style("🧭").cyan(),
            style(&loaded.name).bold(),
            style(&config.from).green(),
            style(&config.to).green()
        );

        let report = Self::route(&config, &loaded)?;
        print!("{report}");

        Ok(())
    }
}

impl RouteExecutor {
    /// Find the fewest-edge route and format it
    pub fn route(config: &RouteConfig, loaded: &LoadedGraph) -> Result<String> {
        let path = shortest_path(&loaded.graph, &config.from, &config.to)
            .wrap_err_with(|| format!("Cannot route through graph '{}'", loaded.name))?;

        let report = match config.format {
            OutputFormat::Human => match &path {
                Some(nodes) => {
                    let hops = nodes.len() - 1;
                    format!(
                        "{} {}\n\n{} {} {}\n",
                        style("🔗").cyan(),
                        nodes.join(" → "),
                        style("✓").green(),
                        hops,
                        pluralize("edge", hops)
                    )
                }
                None => format!(
                    "{} No route from {} to {}\n",
                    style("✗").red(),
                    config.from,
                    config.to
                ),
            },
            OutputFormat::Json => {
                let report = json!({
                    "graph": loaded.name,
                    "from": config.from,
                    "to": config.to,
                    "reachable": path.is_some(),
                    "length": path.as_ref().map(|nodes| nodes.len() - 1),
                    "path": path,
                });
                let mut output = serde_json::to_string_pretty(&report).map_err(WayfinderError::Json)?;
                output.push('\n');
                output
            }
            OutputFormat::Junit | OutputFormat::GitHub => {
                return Err(WayfinderError::ConfigurationError {
                    message: format!("{:?} output is not supported by route", config.format),
                }
                .into());
            }
        };

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::graph::{Graph, Orientation};

    fn sample(orientation: Orientation) -> LoadedGraph {
        LoadedGraph {
            name: "sample".to_string(),
            path: PathBuf::from("sample.graph.toml"),
            graph: Graph::from_edges(
                orientation,
                [("A", "B"), ("B", "C"), ("A", "D"), ("D", "E"), ("E", "C")]
                    .map(|(from, to)| (from.to_string(), to.to_string())),
            ),
        }
    }

    fn config(from: &str, to: &str, format: OutputFormat) -> RouteConfig {
        RouteConfig::builder()
            .with_file(PathBuf::from("sample.graph.toml"))
            .with_from(from)
            .with_to(to)
            .with_format(format)
            .build()
            .unwrap()
    }

    #[test]
    fn test_route_human() {
        let report = RouteExecutor::route(
            &config("A", "C", OutputFormat::Human),
            &sample(Orientation::Directed),
        )
        .unwrap();

        assert!(report.contains("A → B → C"));
        assert!(report.contains("2 edges"));
    }

    #[test]
    fn test_route_unreachable_json() {
        let report = RouteExecutor::route(
            &config("C", "A", OutputFormat::Json),
            &sample(Orientation::Directed),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["reachable"], false);
        assert_eq!(value["path"], serde_json::Value::Null);
        assert_eq!(value["length"], serde_json::Value::Null);
    }

    #[test]
    fn test_route_undirected_goes_backwards() {
        let report = RouteExecutor::route(
            &config("C", "A", OutputFormat::Json),
            &sample(Orientation::Undirected),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["path"], json!(["C", "B", "A"]));
        assert_eq!(value["length"], 2);
    }

    #[test]
    fn test_route_unknown_target() {
        let result = RouteExecutor::route(
            &config("A", "Z", OutputFormat::Human),
            &sample(Orientation::Directed),
        );
        assert!(result.is_err());
    }
}
