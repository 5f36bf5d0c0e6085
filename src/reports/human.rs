//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, sorted_checks};
use crate::core::GraphCheck;
use crate::error::WayfinderError;
use crate::graph::Orientation;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, WayfinderError> {
        let mut output = String::new();

        let cyclic: Vec<&GraphCheck> = sorted_checks(checks)
            .into_iter()
            .filter(|check| check.has_cycle())
            .collect();

        if cyclic.is_empty() {
            write!(
                output,
                "\n{} No cycles detected! Checked {} {}.\n",
                style("✅").green().bold(),
                style(checks.len()).bold(),
                pluralize("graph", checks.len())
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found cycles in {} of {} {}:\n\n",
            style("❌").red().bold(),
            style(cyclic.len()).red().bold(),
            checks.len(),
            pluralize("graph", checks.len())
        )?;

        let total_cycles = cyclic.len();
        let limit = self.max_cycles.unwrap_or(total_cycles);

        for (i, check) in cyclic.iter().take(limit).enumerate() {
            writeln!(
                output,
                "{} Cycle #{} in {} ({})",
                style("🔄").yellow(),
                i + 1,
                style(&check.name).bold(),
                check.orientation
            )?;
            writeln!(
                output,
                "  {} {}",
                style("📄").blue(),
                style(check.path.display()).dim()
            )?;
            writeln!(
                output,
                "  {} {} {}, {} {}",
                style("📊").blue(),
                check.node_count,
                pluralize("node", check.node_count),
                check.edge_count,
                pluralize("edge", check.edge_count)
            )?;
            if let Some(path) = check.cycle_path() {
                writeln!(output, "  {} {}", style("🔗").cyan(), style(path).yellow())?;
            }
            writeln!(output)?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cyclic graphs. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        if cyclic
            .iter()
            .any(|check| check.orientation == Orientation::Directed)
        {
            writeln!(
                output,
                "\n{} A directed cycle is broken by removing or reversing any one of its edges.",
                style("💡").yellow()
            )?;
        }
        if cyclic
            .iter()
            .any(|check| check.orientation == Orientation::Undirected)
        {
            writeln!(
                output,
                "{} An undirected graph is acyclic only when it is a forest; removing any edge on \
                 the cycle breaks it.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}
