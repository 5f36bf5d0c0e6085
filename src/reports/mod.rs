//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::core::GraphCheck;
use crate::error::WayfinderError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the cycle checks of one or more graphs
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, WayfinderError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

/// Checks ordered by graph name, then path
pub(crate) fn sorted_checks(checks: &[GraphCheck]) -> Vec<&GraphCheck> {
    let mut sorted: Vec<&GraphCheck> = checks.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    sorted
}
