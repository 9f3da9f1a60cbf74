//! End-to-end test scenario
//!
//! Five sequential steps, each gated on its soft-assertion group: home page
//! verification, careers page verification, QA jobs filtering, job detail
//! verification, Lever redirect validation. A failing step captures a
//! screenshot tagged with the step name and aborts the scenario; later
//! steps never run.

use crate::assertions::SoftAssertions;
use crate::config::Config;
use crate::locators::qa_jobs;
use crate::pages::{CareersPage, HomePage, LeverPage, QaJobsPage};
use crate::screenshot::ScreenshotManager;
use crate::session::PageSession;
use crate::Result;
use std::sync::Arc;
use tracing::{error, info};

/// States of the end-to-end flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStep {
    HomeVerified,
    CareersVerified,
    QaJobsFiltered,
    JobDetailsVerified,
    LeverVerified,
}

impl ScenarioStep {
    /// Screenshot tag for failures in this step
    pub fn tag(&self) -> &'static str {
        match self {
            ScenarioStep::HomeVerified => "step1_homepage",
            ScenarioStep::CareersVerified => "step2_careers",
            ScenarioStep::QaJobsFiltered => "step3_qajobs",
            ScenarioStep::JobDetailsVerified => "step4_jobdetails",
            ScenarioStep::LeverVerified => "step5_lever",
        }
    }

    /// Human-readable step name used in logs and aggregate errors
    pub fn title(&self) -> &'static str {
        match self {
            ScenarioStep::HomeVerified => "Home Page Verification",
            ScenarioStep::CareersVerified => "Careers Page Verification",
            ScenarioStep::QaJobsFiltered => "QA Jobs Filtering",
            ScenarioStep::JobDetailsVerified => "Job Details Verification",
            ScenarioStep::LeverVerified => "Lever Page Verification",
        }
    }
}

/// Everything one scenario run needs: the session, settings and evidence
pub struct ScenarioContext {
    pub session: Arc<dyn PageSession>,
    pub config: Config,
    pub screenshots: ScreenshotManager,
}

impl ScenarioContext {
    pub fn new(session: Arc<dyn PageSession>, config: Config) -> Self {
        let screenshots = ScreenshotManager::new(session.clone(), &config);
        Self {
            session,
            config,
            screenshots,
        }
    }
}

/// Record a step failure (log + tagged screenshot) and abort the scenario
async fn fail_step<T>(
    ctx: &ScenarioContext,
    step: ScenarioStep,
    err: crate::Error,
) -> Result<T> {
    error!("{} failed: {}", step.title(), err);
    ctx.screenshots.capture(step.tag()).await;
    Err(err)
}

/// Complete Insider job application flow from the home page to Lever
pub async fn end_to_end_flow(ctx: &ScenarioContext) -> Result<()> {
    // Step 1: Home page verification
    info!("Step 1: Home page verification");
    let home = match verify_home(ctx).await {
        Ok(page) => page,
        Err(e) => return fail_step(ctx, ScenarioStep::HomeVerified, e).await,
    };
    info!("Home page verification successful");

    // Step 2: Careers page verification
    info!("Step 2: Careers page verification");
    let careers = match verify_careers(&home).await {
        Ok(page) => page,
        Err(e) => return fail_step(ctx, ScenarioStep::CareersVerified, e).await,
    };
    info!("Careers page verification successful");

    // Step 3: QA jobs filtering
    info!("Step 3: QA jobs filtering");
    let qa = match filter_qa_jobs(ctx, &careers).await {
        Ok(page) => page,
        Err(e) => return fail_step(ctx, ScenarioStep::QaJobsFiltered, e).await,
    };
    info!("QA jobs filtering successful");

    // Step 4: Job details verification
    info!("Step 4: Job details verification");
    if let Err(e) = verify_job_details(&qa).await {
        return fail_step(ctx, ScenarioStep::JobDetailsVerified, e).await;
    }
    info!("Job details verification successful");

    // Step 5: Lever redirect and validation
    info!("Step 5: Lever redirect and validation");
    if let Err(e) = verify_lever(&qa).await {
        return fail_step(ctx, ScenarioStep::LeverVerified, e).await;
    }
    info!("Lever page verification successful");

    info!("END-TO-END TEST COMPLETED SUCCESSFULLY");
    Ok(())
}

async fn verify_home(ctx: &ScenarioContext) -> Result<HomePage> {
    let step = ScenarioStep::HomeVerified;
    let mut soft = SoftAssertions::new();

    let home = HomePage::new(ctx.session.clone());
    home.open(&ctx.config.base_url).await?;

    soft.check_eq(
        ctx.config.base_url.clone(),
        home.current_url().await?,
        "home url equals base url",
    );

    home.accept_cookies().await?;

    soft.check_true(home.is_loaded().await?, "home page is loaded");
    soft.check_eq(
        HomePage::EXPECTED_TITLE.to_string(),
        home.title().await?,
        "home page title",
    );

    soft.assert_all(step.title())?;
    Ok(home)
}

async fn verify_careers(home: &HomePage) -> Result<CareersPage> {
    let step = ScenarioStep::CareersVerified;
    let mut soft = SoftAssertions::new();

    let careers = home.to_careers().await?;

    soft.check_true(careers.is_loaded().await?, "careers page is loaded");
    soft.check_contains(
        &careers.current_url().await?.to_lowercase(),
        CareersPage::URL_KEYWORD,
        "careers url keyword",
    );

    let title = careers.title().await?;
    soft.check_not_empty(&title, "careers page title present");
    soft.check_eq(
        CareersPage::EXPECTED_TITLE.to_string(),
        title,
        "careers page title",
    );

    soft.check_true(
        careers.verify_locations_block().await?,
        "locations block visible",
    );
    soft.check_true(careers.verify_teams_block().await?, "teams block visible");
    soft.check_true(
        careers.verify_life_at_insider_block().await?,
        "life at insider block visible",
    );

    soft.check_eq(
        CareersPage::EXPECTED_LOCATIONS_TEXT.to_string(),
        careers.locations_text().await?,
        "locations block text",
    );
    soft.check_eq(
        CareersPage::EXPECTED_TEAMS_TEXT.to_string(),
        careers.teams_text().await?,
        "teams block text",
    );
    soft.check_eq(
        CareersPage::EXPECTED_LIFE_TEXT.to_string(),
        careers.life_at_insider_text().await?,
        "life at insider block text",
    );

    soft.assert_all(step.title())?;
    Ok(careers)
}

async fn filter_qa_jobs(ctx: &ScenarioContext, careers: &CareersPage) -> Result<QaJobsPage> {
    let step = ScenarioStep::QaJobsFiltered;
    let mut soft = SoftAssertions::new();

    let qa = careers.to_qa_jobs(&ctx.config.qa_jobs_url).await?;

    soft.check_true(qa.is_loaded().await?, "qa jobs page is loaded");
    soft.check_contains(
        &qa.current_url().await?.to_lowercase(),
        QaJobsPage::URL_KEYWORD,
        "qa jobs url keyword",
    );

    let title = qa.title().await?;
    soft.check_not_empty(&title, "qa jobs page title present");
    soft.check_contains(
        &title,
        QaJobsPage::EXPECTED_TITLE_KEYWORD,
        "qa jobs page title keyword",
    );

    qa.see_all_jobs().await?;
    qa.filter_by_location().await?;

    soft.assert_all(step.title())?;
    Ok(qa)
}

async fn verify_job_details(qa: &QaJobsPage) -> Result<()> {
    let step = ScenarioStep::JobDetailsVerified;
    let mut soft = SoftAssertions::new();

    let listings = qa.job_listings().await?;
    soft.check_true(!listings.is_empty(), "at least one job listing");

    for (i, job) in listings.iter().enumerate() {
        soft.check_contains(
            &job.position.to_lowercase(),
            &QaJobsPage::EXPECTED_POSITION.to_lowercase(),
            &format!("position {} contains '{}'", i + 1, QaJobsPage::EXPECTED_POSITION),
        );
        soft.check_eq(
            QaJobsPage::EXPECTED_DEPARTMENT.to_string(),
            job.department.clone(),
            &format!("department {}", i + 1),
        );
        soft.check_eq(
            QaJobsPage::EXPECTED_LOCATION.to_string(),
            job.location.clone(),
            &format!("location {}", i + 1),
        );
    }

    soft.assert_all(step.title())
}

async fn verify_lever(qa: &QaJobsPage) -> Result<()> {
    let step = ScenarioStep::LeverVerified;
    let mut soft = SoftAssertions::new();

    let lever = qa
        .open_role(&qa_jobs::SENIOR_QA_ENGINEER_VIEW_ROLE)
        .await?;

    soft.check_contains(
        &lever.current_url().await?,
        LeverPage::URL_FRAGMENT,
        "lever url fragment",
    );

    let title = lever.title().await?;
    soft.check_not_empty(&title, "lever page title present");

    soft.check_true(
        lever.apply_button_present().await?,
        "apply button is present",
    );

    soft.assert_all(step.title())
}
