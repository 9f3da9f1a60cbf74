//! Insider home page

use crate::locators::home;
use crate::pages::careers::CareersPage;
use crate::session::PageSession;
use crate::Result;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Home page object
pub struct HomePage {
    session: Arc<dyn PageSession>,
}

impl HomePage {
    pub const EXPECTED_TITLE: &'static str =
        "#1 Leader in Individualized, Cross-Channel CX — Insider";

    pub fn new(session: Arc<dyn PageSession>) -> Self {
        Self { session }
    }

    /// Navigate to the site root
    pub async fn open(&self, base_url: &str) -> Result<()> {
        self.session.goto(base_url).await
    }

    /// Load check: the logo is clickable and displayed
    pub async fn is_loaded(&self) -> Result<bool> {
        self.session.wait_clickable(&home::LOGO).await?;
        self.session.is_displayed(&home::LOGO).await
    }

    pub async fn current_url(&self) -> Result<String> {
        self.session.current_url().await
    }

    pub async fn title(&self) -> Result<String> {
        self.session.title().await
    }

    /// Accept the cookie-consent popup when present
    ///
    /// A missing popup (wait timeout) is only a warning, and an intercepted
    /// click is logged and swallowed rather than failing the test.
    pub async fn accept_cookies(&self) -> Result<()> {
        info!("Looking for cookie popup...");
        match self.session.click(&home::ACCEPT_COOKIES_BTN).await {
            Ok(()) => {
                info!("Cookies accepted successfully");
                Ok(())
            }
            Err(e) if e.is_timeout() => {
                warn!("Cookie popup not found: {}", e);
                Ok(())
            }
            Err(e) if e.is_interaction() => {
                error!("Cookie button could not be clicked: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Open the careers page through the Company menu
    pub async fn to_careers(&self) -> Result<CareersPage> {
        info!("Hovering over Company menu...");
        self.session.hover(&home::COMPANY_MENU).await?;

        info!("Clicking on Careers link...");
        self.session.click(&home::CAREERS_LINK).await?;
        info!("Successfully navigated to Careers page");

        Ok(CareersPage::new(self.session.clone()))
    }
}
