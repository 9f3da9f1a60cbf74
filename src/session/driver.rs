//! Driver lifecycle management
//!
//! Creates, configures and destroys the single browser-automation session a
//! test run owns. The browser family is validated before anything is spawned
//! or connected.

use crate::config::Config;
use crate::session::service::WebDriverService;
use crate::session::traits::PageSession;
use crate::session::webdriver::WebDriverSession;
use crate::{Error, Result};
use std::str::FromStr;
use std::sync::Arc;
use thirtyfour::common::capabilities::firefox::FirefoxPreferences;
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use tracing::{info, warn};

/// Supported browser families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Firefox,
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Ok(BrowserKind::Chrome),
            "firefox" => Ok(BrowserKind::Firefox),
            other => Err(Error::unsupported_browser(other)),
        }
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserKind::Chrome => write!(f, "chrome"),
            BrowserKind::Firefox => write!(f, "firefox"),
        }
    }
}

/// Owns the single live driver session of a test run
pub struct DriverManager {
    config: Config,
    session: Option<Arc<WebDriverSession>>,
    service: Option<WebDriverService>,
}

impl DriverManager {
    /// Create a manager with no live session
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: None,
            service: None,
        }
    }

    /// Whether a session is currently live
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Launch a browser session matching the configured family
    ///
    /// Returns the existing session when one is already live. Fails with
    /// `Error::UnsupportedBrowser` before spawning anything when the
    /// configured family is unknown.
    pub async fn create_session(&mut self) -> Result<Arc<dyn PageSession>> {
        if let Some(session) = &self.session {
            return Ok(session.clone() as Arc<dyn PageSession>);
        }

        let kind = BrowserKind::from_str(&self.config.browser)?;

        let endpoint = if self.config.webdriver_spawn {
            let service = WebDriverService::spawn(&self.config).await?;
            let endpoint = service.base_url().to_string();
            self.service = Some(service);
            endpoint
        } else {
            self.config.webdriver_url.clone()
        };

        info!("Creating {} session at {}", kind, endpoint);

        let driver = match kind {
            BrowserKind::Chrome => self.chrome_session(&endpoint).await?,
            BrowserKind::Firefox => self.firefox_session(&endpoint).await?,
        };

        driver
            .set_implicit_wait_timeout(self.config.implicit_wait())
            .await?;
        if !self.config.headless {
            driver.maximize_window().await?;
        }

        let session = Arc::new(WebDriverSession::new(driver, self.config.explicit_wait()));
        self.session = Some(session.clone());

        info!("Browser session created");
        Ok(session as Arc<dyn PageSession>)
    }

    async fn chrome_session(&self, endpoint: &str) -> Result<WebDriver> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg("--disable-gpu")?;
        caps.add_arg("--disable-extensions")?;
        caps.add_arg("--disable-popup-blocking")?;
        caps.add_experimental_option(
            "prefs",
            serde_json::json!({
                "profile.default_content_setting_values.notifications": 2
            }),
        )?;

        if self.config.headless {
            caps.add_arg("--headless=new")?;
        }
        caps.add_arg("--window-size=1920,1080")?;

        Ok(WebDriver::new(endpoint, caps).await?)
    }

    async fn firefox_session(&self, endpoint: &str) -> Result<WebDriver> {
        let mut caps = DesiredCapabilities::firefox();
        caps.add_arg("--disable-gpu")?;
        caps.add_arg("--no-sandbox")?;
        let mut prefs = FirefoxPreferences::new();
        prefs.set("dom.webnotifications.enabled", false)?;
        prefs.set("dom.push.enabled", false)?;
        caps.set_preferences(prefs)?;

        if self.config.headless {
            caps.add_arg("-headless")?;
        }
        caps.add_arg("--width=1920")?;
        caps.add_arg("--height=1080")?;

        Ok(WebDriver::new(endpoint, caps).await?)
    }

    /// Terminate the browser session and any spawned WebDriver process
    ///
    /// Idempotent: closing twice, or without a session, is a no-op.
    pub async fn close_session(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            info!("Closing browser session");
            session.quit().await?;
        }

        if let Some(mut service) = self.service.take() {
            if let Err(e) = service.stop().await {
                warn!("Failed to stop WebDriver process: {}", e);
            }
        }

        Ok(())
    }
}
