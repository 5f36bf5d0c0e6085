//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, sorted_checks};
use crate::core::GraphCheck;
use crate::error::WayfinderError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, WayfinderError> {
        let mut output = String::new();
        let cyclic: Vec<&GraphCheck> = sorted_checks(checks)
            .into_iter()
            .filter(|check| check.has_cycle())
            .collect();

        if cyclic.is_empty() {
            writeln!(
                output,
                "::notice title=Cycle Check::No cycles detected in {} {} ✅",
                checks.len(),
                pluralize("graph", checks.len())
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Graph Cycles::Found cycles in {} {}",
            cyclic.len(),
            pluralize("graph", cyclic.len())
        )?;

        for check in cyclic {
            let path = check.cycle_path().unwrap_or_default();
            writeln!(
                output,
                "::warning file={},title={}::{}",
                escape_property(&check.path.display().to_string()),
                escape_property(&format!("Cycle in {} ({})", check.name, check.orientation)),
                escape_data(&path)
            )?;
        }

        writeln!(
            output,
            "::notice title=Recommendation::Remove one edge from each reported cycle to make the \
             graph acyclic."
        )?;

        Ok(output)
    }
}

fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}
