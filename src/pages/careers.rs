//! Insider careers page

use crate::locators::{careers, Locator};
use crate::pages::qa_jobs::QaJobsPage;
use crate::session::PageSession;
use crate::Result;
use std::sync::Arc;
use tracing::{error, info};

/// Careers page object
pub struct CareersPage {
    session: Arc<dyn PageSession>,
}

impl CareersPage {
    pub const EXPECTED_TITLE: &'static str = "Ready to disrupt? | Insider Careers";
    pub const URL_KEYWORD: &'static str = "/careers/";
    pub const EXPECTED_LOCATIONS_TEXT: &'static str = "Our Locations";
    pub const EXPECTED_TEAMS_TEXT: &'static str = "See all teams";
    pub const EXPECTED_LIFE_TEXT: &'static str = "Life at Insider";

    pub fn new(session: Arc<dyn PageSession>) -> Self {
        Self { session }
    }

    /// Load check: the current URL carries the careers keyword
    pub async fn is_loaded(&self) -> Result<bool> {
        let url = self.session.current_url().await?;
        Ok(url.to_lowercase().contains(Self::URL_KEYWORD))
    }

    pub async fn current_url(&self) -> Result<String> {
        self.session.current_url().await
    }

    pub async fn title(&self) -> Result<String> {
        self.session.title().await
    }

    /// Scroll a block into view and report whether it becomes visible
    async fn verify_block(&self, locator: &Locator, name: &str) -> Result<bool> {
        info!("Checking {} block...", name);

        let visible = async {
            self.session.scroll_into_view(locator).await?;
            self.session.wait_visible(locator).await
        }
        .await;

        match visible {
            Ok(()) => {
                info!("{} block verified successfully", name);
                Ok(true)
            }
            Err(e) if e.is_timeout() => {
                error!("{} block not found", name);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn verify_locations_block(&self) -> Result<bool> {
        self.verify_block(&careers::LOCATIONS_BLOCK, "Locations").await
    }

    pub async fn verify_teams_block(&self) -> Result<bool> {
        self.verify_block(&careers::TEAMS_BLOCK, "Teams").await
    }

    pub async fn verify_life_at_insider_block(&self) -> Result<bool> {
        self.verify_block(&careers::LIFE_AT_INSIDER_BLOCK, "Life at Insider")
            .await
    }

    pub async fn locations_text(&self) -> Result<String> {
        self.session.text_of(&careers::LOCATIONS_BLOCK).await
    }

    pub async fn teams_text(&self) -> Result<String> {
        self.session.text_of(&careers::TEAMS_BLOCK).await
    }

    pub async fn life_at_insider_text(&self) -> Result<String> {
        self.session.text_of(&careers::LIFE_AT_INSIDER_BLOCK).await
    }

    /// Verify the three content blocks in one pass
    pub async fn verify_all_blocks(&self) -> Result<bool> {
        info!("Checking all career page blocks...");

        let locations_ok = self.verify_locations_block().await?;
        let teams_ok = self.verify_teams_block().await?;
        let life_ok = self.verify_life_at_insider_block().await?;
        let all_ok = locations_ok && teams_ok && life_ok;

        info!("Verification results:");
        info!("   Locations: {}", if locations_ok { "OK" } else { "FAIL" });
        info!("   Teams: {}", if teams_ok { "OK" } else { "FAIL" });
        info!("   Life at Insider: {}", if life_ok { "OK" } else { "FAIL" });

        if all_ok {
            info!("All blocks verified successfully");
        } else {
            error!("Some blocks failed verification");
        }

        Ok(all_ok)
    }

    /// Navigate straight to the QA jobs listing
    pub async fn to_qa_jobs(&self, qa_jobs_url: &str) -> Result<QaJobsPage> {
        self.session.goto(qa_jobs_url).await?;
        Ok(QaJobsPage::new(self.session.clone()))
    }
}
