//! Configuration management for the test suite

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Test suite configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Browser family to drive ("chrome" or "firefox")
    pub browser: String,

    /// Run the browser without a visible UI surface
    pub headless: bool,

    /// Base URL of the site under test
    pub base_url: String,

    /// Direct URL of the QA jobs listing page
    pub qa_jobs_url: String,

    /// WebDriver server endpoint
    pub webdriver_url: String,

    /// Implicit element-search wait in seconds
    pub implicit_wait_secs: u64,

    /// Explicit condition wait in seconds
    pub explicit_wait_secs: u64,

    /// Capture failure screenshots
    pub screenshot_enabled: bool,

    /// Directory for failure screenshots
    pub screenshot_dir: PathBuf,

    /// Directory for HTML/JSON reports
    pub report_dir: PathBuf,

    /// Directory for log files
    pub log_dir: PathBuf,

    /// Log level for the console sink
    pub log_level: String,

    /// Spawn and manage the WebDriver binary ourselves
    pub webdriver_spawn: bool,

    /// Path to the WebDriver binary (chromedriver/geckodriver)
    pub webdriver_binary: Option<String>,

    /// Port for a spawned WebDriver process
    pub webdriver_port: Option<u16>,

    /// Startup timeout for a spawned WebDriver process in seconds
    pub webdriver_startup_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: "chrome".to_string(),
            headless: false,
            base_url: "https://useinsider.com/".to_string(),
            qa_jobs_url: "https://useinsider.com/careers/quality-assurance/".to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            implicit_wait_secs: 15,
            explicit_wait_secs: 30,
            screenshot_enabled: true,
            screenshot_dir: PathBuf::from("reports/screenshots"),
            report_dir: PathBuf::from("reports/html"),
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
            webdriver_spawn: false,
            webdriver_binary: None,
            webdriver_port: None,
            webdriver_startup_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Load configuration: defaults, then the optional file, then env overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Config::from_file(p)?,
            None => Config::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `INSIDER_*` environment overrides in place
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(browser) = env::var("INSIDER_BROWSER") {
            self.browser = browser;
        }

        if let Ok(headless) = env::var("INSIDER_HEADLESS") {
            self.headless = headless
                .parse()
                .map_err(|_| Error::configuration("Invalid INSIDER_HEADLESS"))?;
        }

        if let Ok(base_url) = env::var("INSIDER_BASE_URL") {
            self.base_url = base_url;
        }

        if let Ok(qa_jobs_url) = env::var("INSIDER_QA_JOBS_URL") {
            self.qa_jobs_url = qa_jobs_url;
        }

        if let Ok(url) = env::var("INSIDER_WEBDRIVER_URL") {
            self.webdriver_url = url;
        }

        if let Ok(implicit) = env::var("INSIDER_IMPLICIT_WAIT") {
            self.implicit_wait_secs = implicit
                .parse()
                .map_err(|_| Error::configuration("Invalid INSIDER_IMPLICIT_WAIT"))?;
        }

        if let Ok(explicit) = env::var("INSIDER_EXPLICIT_WAIT") {
            self.explicit_wait_secs = explicit
                .parse()
                .map_err(|_| Error::configuration("Invalid INSIDER_EXPLICIT_WAIT"))?;
        }

        if let Ok(enabled) = env::var("INSIDER_SCREENSHOTS") {
            self.screenshot_enabled = enabled
                .parse()
                .map_err(|_| Error::configuration("Invalid INSIDER_SCREENSHOTS"))?;
        }

        if let Ok(dir) = env::var("INSIDER_SCREENSHOT_DIR") {
            self.screenshot_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = env::var("INSIDER_REPORT_DIR") {
            self.report_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = env::var("INSIDER_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }

        if let Ok(level) = env::var("INSIDER_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Ok(spawn) = env::var("INSIDER_WEBDRIVER_SPAWN") {
            self.webdriver_spawn = spawn
                .parse()
                .map_err(|_| Error::configuration("Invalid INSIDER_WEBDRIVER_SPAWN"))?;
        }

        if let Ok(binary) = env::var("INSIDER_WEBDRIVER_BINARY") {
            self.webdriver_binary = Some(binary);
        }

        if let Ok(port) = env::var("INSIDER_WEBDRIVER_PORT") {
            self.webdriver_port = Some(
                port.parse()
                    .map_err(|_| Error::configuration("Invalid INSIDER_WEBDRIVER_PORT"))?,
            );
        }

        if let Ok(startup) = env::var("INSIDER_WEBDRIVER_STARTUP") {
            self.webdriver_startup_secs = startup
                .parse()
                .map_err(|_| Error::configuration("Invalid INSIDER_WEBDRIVER_STARTUP"))?;
        }

        Ok(())
    }

    /// Explicit wait as a `Duration`
    pub fn explicit_wait(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.explicit_wait_secs)
    }

    /// Implicit wait as a `Duration`
    pub fn implicit_wait(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.implicit_wait_secs)
    }
}
