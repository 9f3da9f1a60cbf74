//! Suite report writers
//!
//! A standalone HTML report for humans and a JSON dump for tooling, both
//! written into the configured report directory.

use crate::runner::SuiteResult;
use crate::screenshot;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Escape text for embedding in HTML
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_html(suite: &SuiteResult) -> String {
    let mut rows = String::new();
    for result in &suite.results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        let class = if result.passed { "pass" } else { "fail" };
        let error = result.error.as_deref().unwrap_or("");
        rows.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{} ms</td><td><pre>{}</pre></td></tr>\n",
            class,
            escape(&result.name),
            status,
            result.duration_ms,
            escape(error)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Insider Test Report</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.5em; text-align: left; vertical-align: top; }}
tr.pass td {{ background: #e8f5e9; }}
tr.fail td {{ background: #ffebee; }}
pre {{ white-space: pre-wrap; margin: 0; }}
</style>
</head>
<body>
<h1>Insider Test Report</h1>
<p>Total: {total} &middot; Passed: {passed} &middot; Failed: {failed} &middot; Duration: {duration} ms</p>
<table>
<tr><th>Test</th><th>Status</th><th>Duration</th><th>Error</th></tr>
{rows}</table>
</body>
</html>
"#,
        total = suite.total,
        passed = suite.passed,
        failed = suite.failed,
        duration = suite.duration_ms,
        rows = rows
    )
}

/// Write the timestamped HTML report and return its path
pub fn write_html(suite: &SuiteResult, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::report(format!("Failed to create report directory: {}", e)))?;

    let path = dir.join(format!("InsiderTestReport_{}.html", screenshot::timestamp()));
    std::fs::write(&path, render_html(suite))
        .map_err(|e| Error::report(format!("Failed to write HTML report: {}", e)))?;

    info!("HTML report written to: {}", path.display());
    Ok(path)
}

/// Write the machine-readable JSON results and return the path
pub fn write_json(suite: &SuiteResult, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::report(format!("Failed to create report directory: {}", e)))?;

    let path = dir.join("test-results.json");
    let json = serde_json::to_string_pretty(suite)?;
    std::fs::write(&path, json)
        .map_err(|e| Error::report(format!("Failed to write JSON results: {}", e)))?;

    info!("Results written to: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{SuiteResult, TestResult};

    fn sample_suite() -> SuiteResult {
        SuiteResult::summarize(
            vec![
                TestResult {
                    name: "end_to_end_insider_flow".to_string(),
                    passed: true,
                    duration_ms: 1234,
                    error: None,
                },
                TestResult {
                    name: "broken_flow".to_string(),
                    passed: false,
                    duration_ms: 56,
                    error: Some("Step 'Careers Page Verification' failed 1 check(s):\n<title>".to_string()),
                },
            ],
            1300,
        )
    }

    #[test]
    fn html_report_lists_every_test_with_escaped_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_html(&sample_suite(), dir.path()).expect("Failed to write report");

        assert!(path.exists());
        let html = std::fs::read_to_string(&path).expect("Failed to read report");
        assert!(html.contains("end_to_end_insider_flow"));
        assert!(html.contains("broken_flow"));
        assert!(html.contains("Passed: 1"));
        assert!(html.contains("Failed: 1"));
        // Error text is escaped, not injected
        assert!(html.contains("&lt;title&gt;"));
    }

    #[test]
    fn json_results_round_trip_the_counters() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_json(&sample_suite(), dir.path()).expect("Failed to write results");

        let value: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(&path).expect("Failed to read results"),
        )
        .expect("Failed to parse results");

        assert_eq!(value["total"], 2);
        assert_eq!(value["passed"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["results"][1]["passed"], false);
    }
}
