//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, sorted_checks};
use crate::core::GraphCheck;
use crate::error::WayfinderError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, WayfinderError> {
        let graphs: Vec<_> = sorted_checks(checks)
            .into_iter()
            .map(|check| {
                json!({
                    "name": check.name,
                    "path": check.path,
                    "orientation": check.orientation,
                    "node_count": check.node_count,
                    "edge_count": check.edge_count,
                    "component_count": check.component_count,
                    "has_cycle": check.has_cycle(),
                    "cycle": check.cycle,
                })
            })
            .collect();

        let cyclic_count = checks.iter().filter(|check| check.has_cycle()).count();
        let report = json!({
            "has_cycles": cyclic_count > 0,
            "graph_count": checks.len(),
            "cyclic_count": cyclic_count,
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(WayfinderError::Json)
    }
}
