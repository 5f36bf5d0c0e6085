//! Inspect command executor

use std::path::PathBuf;

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::core::GraphCheck;
use crate::discovery::GraphDiscovery;
use crate::executors::CommandExecutor;
use crate::loader::load_graph;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking graph files for cycles...\n",
            style("🧭").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_stderr();

        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }
        let files = GraphDiscovery::new().discover_all(&config.paths, progress.as_ref());
        if let Some(p) = progress.as_mut() {
            p.finish_discovery(files.len());
        }

        if files.is_empty() {
            eprintln!("{} No graph files found to inspect", style("ℹ").blue());
            return Ok(());
        }

        let checks = Self::check_files(&files, progress.as_mut())?;

        let report = Self::generate_report(&config, &checks)?;
        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && checks.iter().any(GraphCheck::has_cycle) {
            std::process::exit(1);
        }

        Ok(())
    }
}

impl InspectExecutor {
    /// Load every file and run the detector matching its orientation
    pub fn check_files(
        files: &[PathBuf],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<GraphCheck>> {
        if let Some(p) = progress.as_deref_mut() {
            p.start_checking(files.len());
        }

        let mut checks = Vec::with_capacity(files.len());
        for file in files {
            let loaded = load_graph(file)
                .wrap_err_with(|| format!("Failed to load graph '{}'", file.display()))?;

            if let Some(p) = progress.as_deref() {
                p.update_check_progress(&loaded.name);
            }
            checks.push(GraphCheck::from_loaded(&loaded));
        }

        if let Some(p) = progress {
            p.finish_checking(checks.iter().filter(|check| check.has_cycle()).count());
        }

        Ok(checks)
    }

    pub fn generate_report(config: &InspectConfig, checks: &[GraphCheck]) -> Result<String> {
        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(config.max_cycles).generate_report(checks),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(checks),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(checks),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(checks),
        };

        report.wrap_err("Failed to generate report")
    }
}
