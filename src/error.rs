//! Unified error types for the test suite

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the test suite
#[derive(Error, Debug)]
pub enum Error {
    /// The configured browser family is not supported
    #[error("Unsupported browser: {0}. Supported browsers: chrome, firefox")]
    UnsupportedBrowser(String),

    /// A bounded wait for an element ran out of time
    #[error("Element wait timed out: {0}")]
    ElementTimeout(String),

    /// An element was found but could not be interacted with
    #[error("Element interaction failed: {0}")]
    ElementInteraction(String),

    /// Aggregate soft-assertion failure for one scenario step
    #[error("Step '{step}' failed {} check(s):\n{}", failures.len(), failures.join("\n"))]
    StepFailed { step: String, failures: Vec<String> },

    /// The WebDriver binary could not be started
    #[error("WebDriver startup failed: {0}")]
    DriverStartup(String),

    /// The WebDriver process never became ready
    #[error("WebDriver health check failed after {0} attempts")]
    DriverHealthCheck(usize),

    /// Screenshot capture failed
    #[error("Screenshot error: {0}")]
    Screenshot(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Report generation error
    #[error("Report error: {0}")]
    Report(String),

    /// Errors surfaced by the WebDriver client library
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP errors (WebDriver status endpoint)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new unsupported browser error
    pub fn unsupported_browser<S: Into<String>>(name: S) -> Self {
        Error::UnsupportedBrowser(name.into())
    }

    /// Create a new element timeout error
    pub fn element_timeout<S: Into<String>>(msg: S) -> Self {
        Error::ElementTimeout(msg.into())
    }

    /// Create a new element interaction error
    pub fn element_interaction<S: Into<String>>(msg: S) -> Self {
        Error::ElementInteraction(msg.into())
    }

    /// Create a new step failure from the recorded soft-assertion failures
    pub fn step_failed<S: Into<String>>(step: S, failures: Vec<String>) -> Self {
        Error::StepFailed {
            step: step.into(),
            failures,
        }
    }

    /// Create a new driver startup error
    pub fn driver_startup<S: Into<String>>(msg: S) -> Self {
        Error::DriverStartup(msg.into())
    }

    /// Create a new screenshot error
    pub fn screenshot<S: Into<String>>(msg: S) -> Self {
        Error::Screenshot(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new report error
    pub fn report<S: Into<String>>(msg: S) -> Self {
        Error::Report(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// True when the error represents a bounded-wait timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::ElementTimeout(_))
    }

    /// True when the error represents an intercepted or blocked interaction
    pub fn is_interaction(&self) -> bool {
        matches!(self, Error::ElementInteraction(_))
    }
}
