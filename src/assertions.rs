//! Soft-assertion collector
//!
//! Checks record pass/fail instead of raising, so one step can report every
//! content mismatch at once. `assert_all` evaluates the collected records,
//! raising a single `Error::StepFailed` that enumerates each failure, and
//! clears the collector for the next step group.

use crate::{Error, Result};
use std::fmt::Debug;
use tracing::{debug, error};

/// One recorded check
#[derive(Debug, Clone)]
pub struct CheckRecord {
    pub label: String,
    pub passed: bool,
    pub detail: Option<String>,
}

impl CheckRecord {
    fn describe(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.label, detail),
            None => self.label.clone(),
        }
    }
}

/// Ordered collector of soft-assertion results for one step
#[derive(Debug, Default)]
pub struct SoftAssertions {
    records: Vec<CheckRecord>,
}

impl SoftAssertions {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, passed: bool, label: &str, detail: Option<String>) {
        if passed {
            debug!("Check passed: {}", label);
        } else {
            error!(
                "Check failed: {}{}",
                label,
                detail
                    .as_deref()
                    .map(|d| format!(" ({})", d))
                    .unwrap_or_default()
            );
        }
        self.records.push(CheckRecord {
            label: label.to_string(),
            passed,
            detail,
        });
    }

    /// Record a boolean condition
    pub fn check_true(&mut self, condition: bool, label: &str) {
        self.record(condition, label, None);
    }

    /// Record an equality check
    pub fn check_eq<T: PartialEq + Debug>(&mut self, expected: T, actual: T, label: &str) {
        let passed = expected == actual;
        let detail = if passed {
            None
        } else {
            Some(format!("expected {:?}, actual {:?}", expected, actual))
        };
        self.record(passed, label, detail);
    }

    /// Record a substring check
    pub fn check_contains(&mut self, haystack: &str, needle: &str, label: &str) {
        let passed = haystack.contains(needle);
        let detail = if passed {
            None
        } else {
            Some(format!("'{}' does not contain '{}'", haystack, needle))
        };
        self.record(passed, label, detail);
    }

    /// Record a non-empty check
    pub fn check_not_empty(&mut self, value: &str, label: &str) {
        let passed = !value.is_empty();
        let detail = if passed {
            None
        } else {
            Some("value is empty".to_string())
        };
        self.record(passed, label, detail);
    }

    /// Number of checks recorded so far
    pub fn recorded(&self) -> usize {
        self.records.len()
    }

    /// Number of failed checks recorded so far
    pub fn failed(&self) -> usize {
        self.records.iter().filter(|r| !r.passed).count()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Evaluate and clear the collected checks
    ///
    /// Raises exactly once per failing step, after every check has been
    /// recorded; the error enumerates all failures.
    pub fn assert_all(&mut self, step: &str) -> Result<()> {
        let records = std::mem::take(&mut self.records);
        let failures: Vec<String> = records
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.describe())
            .collect();

        if failures.is_empty() {
            debug!("Step '{}': all {} check(s) passed", step, records.len());
            Ok(())
        } else {
            Err(Error::step_failed(step, failures))
        }
    }
}
