//! `PageSession` implementation over the WebDriver client

use crate::locators::Locator;
use crate::session::traits::PageSession;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thirtyfour::error::WebDriverError;
use thirtyfour::extensions::query::ElementQueryable;
use thirtyfour::{WebDriver, WebElement};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Live session backed by a `thirtyfour::WebDriver` handle
#[derive(Debug)]
pub struct WebDriverSession {
    driver: WebDriver,
    wait_timeout: Duration,
    closed: AtomicBool,
}

impl WebDriverSession {
    /// Wrap an established driver handle with the explicit wait timeout
    pub fn new(driver: WebDriver, wait_timeout: Duration) -> Self {
        Self {
            driver,
            wait_timeout,
            closed: AtomicBool::new(false),
        }
    }

    fn timeout_error(&self, locator: &Locator, condition: &str, source: WebDriverError) -> Error {
        Error::element_timeout(format!(
            "{} not {} within {}s: {}",
            locator,
            condition,
            self.wait_timeout.as_secs(),
            source
        ))
    }

    async fn clickable_element(&self, locator: &Locator) -> Result<WebElement> {
        self.driver
            .query(locator.by())
            .wait(self.wait_timeout, POLL_INTERVAL)
            .and_clickable()
            .first()
            .await
            .map_err(|e| self.timeout_error(locator, "clickable", e))
    }

    async fn visible_element(&self, locator: &Locator) -> Result<WebElement> {
        self.driver
            .query(locator.by())
            .wait(self.wait_timeout, POLL_INTERVAL)
            .and_displayed()
            .first()
            .await
            .map_err(|e| self.timeout_error(locator, "visible", e))
    }

    async fn present_element(&self, locator: &Locator) -> Result<WebElement> {
        self.driver
            .query(locator.by())
            .wait(self.wait_timeout, POLL_INTERVAL)
            .first()
            .await
            .map_err(|e| self.timeout_error(locator, "present", e))
    }
}

#[async_trait]
impl PageSession for WebDriverSession {
    async fn goto(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn title(&self) -> Result<String> {
        Ok(self.driver.title().await?)
    }

    async fn wait_visible(&self, locator: &Locator) -> Result<()> {
        self.visible_element(locator).await.map(|_| ())
    }

    async fn wait_clickable(&self, locator: &Locator) -> Result<()> {
        self.clickable_element(locator).await.map(|_| ())
    }

    async fn is_displayed(&self, locator: &Locator) -> Result<bool> {
        match self.driver.find(locator.by()).await {
            Ok(element) => Ok(element.is_displayed().await?),
            Err(WebDriverError::NoSuchElement(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn text_of(&self, locator: &Locator) -> Result<String> {
        let element = self.clickable_element(locator).await?;
        Ok(element.text().await?)
    }

    async fn texts_of_all(&self, locator: &Locator) -> Result<Vec<String>> {
        self.visible_element(locator).await?;

        let elements = self.driver.find_all(locator.by()).await?;
        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let element = self.clickable_element(locator).await?;
        debug!("Clicking {}", locator);
        match element.click().await {
            Ok(()) => Ok(()),
            Err(
                e @ (WebDriverError::ElementClickIntercepted(_)
                | WebDriverError::ElementNotInteractable(_)),
            ) => Err(Error::element_interaction(format!("{}: {}", locator, e))),
            Err(e) => Err(e.into()),
        }
    }

    async fn hover(&self, locator: &Locator) -> Result<()> {
        let element = self.visible_element(locator).await?;
        debug!("Hovering over {}", locator);
        self.driver
            .action_chain()
            .move_to_element_center(&element)
            .perform()
            .await?;
        Ok(())
    }

    async fn scroll_into_view(&self, locator: &Locator) -> Result<()> {
        let element = self.present_element(locator).await?;
        element.scroll_into_view().await?;
        Ok(())
    }

    async fn scroll_by(&self, pixels: i64) -> Result<()> {
        self.driver
            .execute(
                "window.scrollBy(0, arguments[0]);",
                vec![serde_json::json!(pixels)],
            )
            .await?;
        Ok(())
    }

    async fn window_count(&self) -> Result<usize> {
        Ok(self.driver.windows().await?.len())
    }

    async fn switch_to_newest_window(&self) -> Result<()> {
        let handles = self.driver.windows().await?;
        let newest = handles
            .last()
            .ok_or_else(|| Error::internal("No windows open"))?
            .clone();
        self.driver.switch_to_window(newest).await?;
        Ok(())
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        Ok(self.driver.screenshot_as_png().await?)
    }

    async fn quit(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        // The driver handle is reference-counted; quitting one clone
        // terminates the session for all of them.
        self.driver.clone().quit().await?;
        Ok(())
    }

    fn is_active(&self) -> bool {
        !self.closed.load(Ordering::SeqCst)
    }
}
