//! Insider QA jobs listing page

use crate::locators::{qa_jobs, Locator};
use crate::pages::lever::LeverPage;
use crate::session::PageSession;
use crate::{Error, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One job row on the listing
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub position: String,
    pub department: String,
    pub location: String,
}

/// QA jobs page object
pub struct QaJobsPage {
    session: Arc<dyn PageSession>,
}

impl QaJobsPage {
    pub const EXPECTED_TITLE_KEYWORD: &'static str =
        "Insider quality assurance job opportunities";
    pub const URL_KEYWORD: &'static str = "/quality-assurance/";
    pub const EXPECTED_POSITION: &'static str = "Quality Assurance";
    pub const EXPECTED_DEPARTMENT: &'static str = "Quality Assurance";
    pub const EXPECTED_LOCATION: &'static str = "Istanbul, Turkiye";

    pub fn new(session: Arc<dyn PageSession>) -> Self {
        Self { session }
    }

    /// Load check: the current URL carries the QA keyword
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

    /// Scroll to and click the "See all QA jobs" button
    pub async fn see_all_jobs(&self) -> Result<()> {
        self.session
            .scroll_into_view(&qa_jobs::SEE_ALL_QA_JOBS_BTN)
            .await?;
        self.session.click(&qa_jobs::SEE_ALL_QA_JOBS_BTN).await?;
        info!("Clicked 'See all QA jobs' button");
        Ok(())
    }

    /// The department filter applies itself on this page; only wait for it
    async fn wait_for_department_filter(&self) -> Result<()> {
        self.session
            .wait_visible(&qa_jobs::DEPARTMENT_FILTER_VALUE)
            .await?;
        info!("Department filter loaded: Quality Assurance is visible");
        Ok(())
    }

    /// Filter the listing down to Istanbul jobs
    pub async fn filter_by_location(&self) -> Result<()> {
        info!("Applying location filter...");

        self.session
            .scroll_into_view(&qa_jobs::LOCATION_FILTER)
            .await?;
        self.wait_for_department_filter().await?;

        self.session.click(&qa_jobs::LOCATION_FILTER).await?;
        info!("Location dropdown opened");

        self.session.click(&qa_jobs::ISTANBUL_OPTION).await?;
        info!("Istanbul, Turkiye selected");

        self.session.scroll_by(400).await?;
        info!("Scrolled to job listings section");
        Ok(())
    }

    /// Gather every visible job row
    ///
    /// Fails when the position/department/location element counts disagree,
    /// since rows can no longer be paired up.
    pub async fn job_listings(&self) -> Result<Vec<JobListing>> {
        self.session.wait_visible(&qa_jobs::JOB_POSITION).await?;

        let positions = self.session.texts_of_all(&qa_jobs::JOB_POSITION).await?;
        let departments = self.session.texts_of_all(&qa_jobs::JOB_DEPARTMENT).await?;
        let locations = self.session.texts_of_all(&qa_jobs::JOB_LOCATION).await?;

        if positions.len() != departments.len() || departments.len() != locations.len() {
            return Err(Error::internal(format!(
                "Job listing element counts don't match: {} positions, {} departments, {} locations",
                positions.len(),
                departments.len(),
                locations.len()
            )));
        }

        Ok(positions
            .into_iter()
            .zip(departments)
            .zip(locations)
            .map(|((position, department), location)| JobListing {
                position: position.trim().to_string(),
                department: department.trim().to_string(),
                location: location.trim().to_string(),
            })
            .collect())
    }

    /// Verify every row matches the expected position/department/location
    pub async fn verify_job_details(&self) -> Result<bool> {
        info!("Verifying job details...");

        let listings = self.job_listings().await?;
        if listings.is_empty() {
            warn!("No job listings found!");
            return Ok(false);
        }

        let mut content_ok = true;
        for (i, job) in listings.iter().enumerate() {
            if !job
                .position
                .to_lowercase()
                .contains(&Self::EXPECTED_POSITION.to_lowercase())
            {
                error!(
                    "[Position {}] '{}' should contain '{}'",
                    i + 1,
                    job.position,
                    Self::EXPECTED_POSITION
                );
                content_ok = false;
            }
            if job.department != Self::EXPECTED_DEPARTMENT {
                error!(
                    "[Department {}] Expected: '{}', Actual: '{}'",
                    i + 1,
                    Self::EXPECTED_DEPARTMENT,
                    job.department
                );
                content_ok = false;
            }
            if job.location != Self::EXPECTED_LOCATION {
                error!(
                    "[Location {}] Expected: '{}', Actual: '{}'",
                    i + 1,
                    Self::EXPECTED_LOCATION,
                    job.location
                );
                content_ok = false;
            }
        }

        if content_ok {
            info!("{} job listings verified successfully", listings.len());
        } else {
            warn!("Some job listings could not be verified");
        }

        Ok(content_ok)
    }

    /// Open a job's application page via its "View Role" link
    ///
    /// The link opens a new tab; the session switches to it before the
    /// Lever page object is handed back.
    pub async fn open_role(&self, view_role: &Locator) -> Result<LeverPage> {
        self.session.click(view_role).await?;

        self.session.switch_to_newest_window().await?;
        info!("Switched to new Lever tab");

        Ok(LeverPage::new(self.session.clone()))
    }
}
