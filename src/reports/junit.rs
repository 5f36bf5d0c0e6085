//! JUnit XML format report generation

use std::fmt::Write;

use super::{ReportGenerator, sorted_checks};
use crate::core::GraphCheck;
use crate::error::WayfinderError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, WayfinderError> {
        let mut output = String::new();
        let failures = checks.iter().filter(|check| check.has_cycle()).count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="wayfinder" tests="{}" failures="{}">"#,
            checks.len(),
            failures
        )?;
        writeln!(
            output,
            r#"  <testsuite name="graph-cycles" tests="{}" failures="{}">"#,
            checks.len(),
            failures
        )?;

        for check in sorted_checks(checks) {
            let name = xml_escape(&check.name);
            let classname = format!("wayfinder.{}", check.orientation);

            match check.cycle_path() {
                Some(path) => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="{classname}">"#
                    )?;
                    writeln!(output, r#"      <failure message="Cycle detected">"#)?;
                    writeln!(output, "File: {}", xml_escape(&check.path.display().to_string()))?;
                    writeln!(output, "Cycle: {}", xml_escape(&path))?;
                    writeln!(output, r#"      </failure>"#)?;
                    writeln!(output, r#"    </testcase>"#)?;
                }
                None => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="{classname}" />"#
                    )?;
                }
            }
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
