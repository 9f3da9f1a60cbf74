//! Shared fixtures for integration tests

use std::path::Path;
use std::sync::Arc;

use insider_automation::config::Config;
use insider_automation::locators::{careers, home, lever, qa_jobs};
use insider_automation::pages::{CareersPage, HomePage, QaJobsPage};
use insider_automation::session::MockSession;

pub const BASE_URL: &str = "https://useinsider.com/";
pub const CAREERS_URL: &str = "https://useinsider.com/careers/";
pub const QA_JOBS_URL: &str = "https://useinsider.com/careers/quality-assurance/";
pub const LEVER_URL: &str = "https://jobs.lever.co/useinsider/78ddbec0-16bf-4eab-b5a6-04facb993ddc";

/// A scripted model of the whole site, green across all five steps
pub fn mock_site() -> Arc<MockSession> {
    let session = Arc::new(MockSession::new());

    // Home page
    session.set_title(BASE_URL, HomePage::EXPECTED_TITLE);
    session.add_element(&home::LOGO, "Insider");
    session.add_element(&home::ACCEPT_COOKIES_BTN, "Accept All");
    session.add_element(&home::COMPANY_MENU, "Company");
    session.add_element(&home::CAREERS_LINK, "Careers");
    session.on_click_navigate(&home::CAREERS_LINK, CAREERS_URL);

    // Careers page
    session.set_title(CAREERS_URL, CareersPage::EXPECTED_TITLE);
    session.add_element(&careers::LOCATIONS_BLOCK, CareersPage::EXPECTED_LOCATIONS_TEXT);
    session.add_element(&careers::TEAMS_BLOCK, CareersPage::EXPECTED_TEAMS_TEXT);
    session.add_element(
        &careers::LIFE_AT_INSIDER_BLOCK,
        CareersPage::EXPECTED_LIFE_TEXT,
    );

    // QA jobs page
    session.set_title(QA_JOBS_URL, QaJobsPage::EXPECTED_TITLE_KEYWORD);
    session.add_element(&qa_jobs::SEE_ALL_QA_JOBS_BTN, "See all QA jobs");
    session.add_element(&qa_jobs::LOCATION_FILTER, "Filter by Location");
    session.add_element(&qa_jobs::DEPARTMENT_FILTER_VALUE, "Quality Assurance");
    session.add_element(&qa_jobs::ISTANBUL_OPTION, "Istanbul, Turkiye");
    session.add_element(&qa_jobs::JOB_POSITION, "Senior Quality Assurance Engineer");
    session.add_list(
        &qa_jobs::JOB_POSITION,
        &[
            "Senior Quality Assurance Engineer",
            "Quality Assurance Engineer",
        ],
    );
    session.add_list(
        &qa_jobs::JOB_DEPARTMENT,
        &["Quality Assurance", "Quality Assurance"],
    );
    session.add_list(
        &qa_jobs::JOB_LOCATION,
        &["Istanbul, Turkiye", "Istanbul, Turkiye"],
    );
    session.add_element(&qa_jobs::SENIOR_QA_ENGINEER_VIEW_ROLE, "View Role");
    session.on_click_open_window(&qa_jobs::SENIOR_QA_ENGINEER_VIEW_ROLE, LEVER_URL);

    // Lever page
    session.set_title(LEVER_URL, "Senior QA Engineer - Insider");
    session.add_element(&lever::APPLY_BUTTON, "Apply for this job");

    session
}

/// Config pointing all filesystem output at a scratch directory
pub fn test_config(dir: &Path) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        qa_jobs_url: QA_JOBS_URL.to_string(),
        screenshot_enabled: true,
        screenshot_dir: dir.join("screenshots"),
        report_dir: dir.join("html"),
        log_dir: dir.join("logs"),
        ..Config::default()
    }
}

/// File names in a directory, or empty when it does not exist
pub fn file_names(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}
