//! Session trait for page objects
//!
//! `PageSession` is the session-and-wait seam every page object holds by
//! composition. All waits are bounded by the session's explicit timeout and
//! surface `Error::ElementTimeout` on expiry.

use crate::locators::Locator;
use crate::Result;
use async_trait::async_trait;

/// One live browser-automation session
#[async_trait]
pub trait PageSession: Send + Sync + std::fmt::Debug {
    /// Navigate the current window to the given URL
    async fn goto(&self, url: &str) -> Result<()>;

    /// URL of the current window
    async fn current_url(&self) -> Result<String>;

    /// Title of the current window
    async fn title(&self) -> Result<String>;

    /// Wait until the element is visible
    async fn wait_visible(&self, locator: &Locator) -> Result<()>;

    /// Wait until the element is clickable
    async fn wait_clickable(&self, locator: &Locator) -> Result<()>;

    /// Whether the element is currently displayed
    async fn is_displayed(&self, locator: &Locator) -> Result<bool>;

    /// Text of the element, waiting for clickability first
    async fn text_of(&self, locator: &Locator) -> Result<String>;

    /// Texts of every element matching the locator, waiting for the first
    async fn texts_of_all(&self, locator: &Locator) -> Result<Vec<String>>;

    /// Wait for clickability, then click
    async fn click(&self, locator: &Locator) -> Result<()>;

    /// Move the pointer over the element
    async fn hover(&self, locator: &Locator) -> Result<()>;

    /// Scroll the element into the center of the viewport
    async fn scroll_into_view(&self, locator: &Locator) -> Result<()>;

    /// Scroll the page vertically by the given number of pixels
    async fn scroll_by(&self, pixels: i64) -> Result<()>;

    /// Number of open windows/tabs
    async fn window_count(&self) -> Result<usize>;

    /// Switch to the most recently opened window
    async fn switch_to_newest_window(&self) -> Result<()>;

    /// Capture the current window as a PNG
    async fn screenshot_png(&self) -> Result<Vec<u8>>;

    /// Terminate the browser session; idempotent
    async fn quit(&self) -> Result<()>;

    /// Whether the session is still live
    fn is_active(&self) -> bool;
}
