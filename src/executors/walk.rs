//! Walk command executor

use console::style;
use miette::{Result, WrapErr};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::WalkConfig;
use crate::error::WayfinderError;
use crate::executors::CommandExecutor;
use crate::loader::{LoadedGraph, load_graph};
use crate::utils::string::pluralize;

pub struct WalkExecutor;

impl CommandExecutor for WalkExecutor {
    type Config = WalkConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let loaded = load_graph(&config.file)
            .wrap_err_with(|| format!("Failed to load graph '{}'", config.file.display()))?;

        eprintln!(
            "{} Walking {} {} from {}...\n",
            style("🧭").cyan(),
            style(&loaded.name).bold(),
            config.order,
            style(&config.from).green()
        );

        let report = Self::walk(&config, &loaded)?;
        print!("{report}");

        Ok(())
    }
}

impl WalkExecutor {
    /// Traverse `loaded` as configured and format the visit order
    pub fn walk(config: &WalkConfig, loaded: &LoadedGraph) -> Result<String> {
        let order = config
            .order
            .traverse(&loaded.graph, &config.from)
            .wrap_err_with(|| format!("Cannot walk graph '{}'", loaded.name))?;

        let report = match config.format {
            OutputFormat::Human => {
                let mut output = String::new();
                for (i, node) in order.iter().enumerate() {
                    output.push_str(&format!("{:>4}. {}\n", i + 1, node));
                }
                output.push_str(&format!(
                    "\n{} Visited {} {}\n",
                    style("✓").green(),
                    order.len(),
                    pluralize("node", order.len())
                ));
                output
            }
            OutputFormat::Json => {
                let report = json!({
                    "graph": loaded.name,
                    "from": config.from,
                    "order": config.order,
                    "nodes": order,
                });
                let mut output = serde_json::to_string_pretty(&report).map_err(WayfinderError::Json)?;
                output.push('\n');
                output
            }
            OutputFormat::Junit | OutputFormat::GitHub => {
                return Err(WayfinderError::ConfigurationError {
                    message: format!("{:?} output is not supported by walk", config.format),
                }
                .into());
            }
        };

        Ok(report)
    }
}
