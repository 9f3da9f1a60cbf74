//! Lever job application page (external)

use crate::locators::lever;
use crate::session::PageSession;
use crate::Result;
use std::sync::Arc;

/// Lever application page object
pub struct LeverPage {
    session: Arc<dyn PageSession>,
}

impl LeverPage {
    pub const URL_FRAGMENT: &'static str = "jobs.lever.co";

    pub fn new(session: Arc<dyn PageSession>) -> Self {
        Self { session }
    }

    pub async fn current_url(&self) -> Result<String> {
        self.session.current_url().await
    }

    pub async fn title(&self) -> Result<String> {
        self.session.title().await
    }

    /// Whether the "Apply for this job" control is clickable and displayed
    pub async fn apply_button_present(&self) -> Result<bool> {
        match self.session.wait_clickable(&lever::APPLY_BUTTON).await {
            Ok(()) => self.session.is_displayed(&lever::APPLY_BUTTON).await,
            Err(e) if e.is_timeout() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
