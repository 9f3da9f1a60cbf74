//! Test runner
//!
//! Executes every registered scenario against a fresh driver session and
//! aggregates the outcomes into a suite result. There is no module-name
//! test discovery in a compiled binary; the case registry is the explicit
//! equivalent and every registered case runs.

use crate::config::Config;
use crate::scenario::{self, ScenarioContext};
use crate::session::DriverManager;
use crate::Result;
use serde::Serialize;
use std::pin::Pin;
use std::time::Instant;
use tracing::{error, info, warn};

/// Boxed scenario future
pub type ScenarioFuture<'a> =
    Pin<Box<dyn std::future::Future<Output = Result<()>> + Send + 'a>>;

/// One runnable test case
pub struct TestCase {
    pub name: &'static str,
    pub run: for<'a> fn(&'a ScenarioContext) -> ScenarioFuture<'a>,
}

/// The built-in case registry
pub fn default_cases() -> Vec<TestCase> {
    vec![TestCase {
        name: "end_to_end_insider_flow",
        run: |ctx| Box::pin(scenario::end_to_end_flow(ctx)),
    }]
}

/// Result of running a single test
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Result of running all tests
#[derive(Debug, Clone, Serialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl SuiteResult {
    /// Aggregate individual results into suite counters
    pub fn summarize(results: Vec<TestResult>, duration_ms: u64) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;
        Self {
            total: results.len(),
            passed,
            failed,
            duration_ms,
            results,
        }
    }

    /// Whether every test passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runs test cases and aggregates their outcomes
pub struct TestRunner {
    config: Config,
}

impl TestRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run every case in the default registry
    pub async fn run_all(&self) -> SuiteResult {
        self.run_cases(default_cases()).await
    }

    /// Run the given cases sequentially
    pub async fn run_cases(&self, cases: Vec<TestCase>) -> SuiteResult {
        let start = Instant::now();
        let mut results = Vec::with_capacity(cases.len());

        info!("Running {} test(s)...", cases.len());

        for case in &cases {
            let result = self.run_case(case).await;
            if result.passed {
                info!("PASS {} ({} ms)", result.name, result.duration_ms);
            } else {
                error!(
                    "FAIL {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let suite = SuiteResult::summarize(results, start.elapsed().as_millis() as u64);
        info!(
            "Test results: {} passed, {} failed ({} ms)",
            suite.passed, suite.failed, suite.duration_ms
        );
        suite
    }

    /// Run one case with full session setup and teardown
    async fn run_case(&self, case: &TestCase) -> TestResult {
        info!("Starting test '{}'", case.name);
        let start = Instant::now();

        let mut manager = DriverManager::new(self.config.clone());

        let outcome = match manager.create_session().await {
            Ok(session) => {
                let ctx = ScenarioContext::new(session, self.config.clone());
                (case.run)(&ctx).await
            }
            Err(e) => Err(e),
        };

        // Teardown runs regardless of the outcome
        if let Err(e) = manager.close_session().await {
            warn!("Failed to close browser session: {}", e);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Test '{}' finished in {:.2} seconds",
            case.name,
            duration_ms as f64 / 1000.0
        );

        TestResult {
            name: case.name.to_string(),
            passed: outcome.is_ok(),
            duration_ms,
            error: outcome.err().map(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> TestResult {
        TestResult {
            name: name.to_string(),
            passed,
            duration_ms: 10,
            error: if passed {
                None
            } else {
                Some("boom".to_string())
            },
        }
    }

    #[test]
    fn summarize_counts_passed_and_failed() {
        let suite = SuiteResult::summarize(
            vec![result("a", true), result("b", false), result("c", true)],
            42,
        );

        assert_eq!(suite.total, 3);
        assert_eq!(suite.passed, 2);
        assert_eq!(suite.failed, 1);
        assert_eq!(suite.duration_ms, 42);
        assert!(!suite.all_passed());
    }

    #[test]
    fn empty_suite_counts_as_passed() {
        let suite = SuiteResult::summarize(vec![], 0);
        assert!(suite.all_passed());
    }

    #[test]
    fn default_registry_contains_the_end_to_end_flow() {
        let cases = default_cases();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].name, "end_to_end_insider_flow");
    }
}
