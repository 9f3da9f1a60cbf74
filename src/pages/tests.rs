//! Page object tests against the scripted mock session

use std::sync::Arc;

use crate::locators::{careers, home, lever, qa_jobs};
use crate::pages::{CareersPage, HomePage, LeverPage, QaJobsPage};
use crate::session::{MockSession, PageSession};
use crate::Error;

const BASE_URL: &str = "https://useinsider.com/";
const CAREERS_URL: &str = "https://useinsider.com/careers/";
const QA_JOBS_URL: &str = "https://useinsider.com/careers/quality-assurance/";
const LEVER_URL: &str = "https://jobs.lever.co/useinsider/78ddbec0";

fn home_session() -> Arc<MockSession> {
    let session = Arc::new(MockSession::new());
    session.set_title(BASE_URL, HomePage::EXPECTED_TITLE);
    session.add_element(&home::LOGO, "Insider");
    session.add_element(&home::ACCEPT_COOKIES_BTN, "Accept All");
    session.add_element(&home::COMPANY_MENU, "Company");
    session.add_element(&home::CAREERS_LINK, "Careers");
    session.on_click_navigate(&home::CAREERS_LINK, CAREERS_URL);
    session
}

#[tokio::test]
async fn home_page_loads_with_expected_title() {
    let session = home_session();
    let page = HomePage::new(session.clone());

    page.open(BASE_URL).await.expect("Failed to open");
    assert!(page.is_loaded().await.expect("Failed load check"));
    assert_eq!(
        page.title().await.expect("Failed title"),
        HomePage::EXPECTED_TITLE
    );
    assert_eq!(page.current_url().await.expect("Failed url"), BASE_URL);
}

#[tokio::test]
async fn missing_cookie_popup_is_tolerated() {
    let session = home_session();
    session.remove_element(&home::ACCEPT_COOKIES_BTN);
    let page = HomePage::new(session.clone());

    page.accept_cookies().await.expect("Must not raise");
    assert!(session.clicks().is_empty());
}

#[tokio::test]
async fn intercepted_cookie_click_is_tolerated() {
    let session = home_session();
    session.set_click_intercepted(&home::ACCEPT_COOKIES_BTN);
    let page = HomePage::new(session.clone());

    page.accept_cookies().await.expect("Must not raise");
}

#[tokio::test]
async fn company_menu_leads_to_careers() {
    let session = home_session();
    let page = HomePage::new(session.clone());
    page.open(BASE_URL).await.expect("Failed to open");

    let careers_page = page.to_careers().await.expect("Failed to navigate");

    assert_eq!(session.hovers(), vec![home::COMPANY_MENU.expression]);
    assert_eq!(session.clicks(), vec![home::CAREERS_LINK.expression]);
    assert!(careers_page.is_loaded().await.expect("Failed load check"));
}

fn careers_session() -> Arc<MockSession> {
    let session = Arc::new(MockSession::new());
    session.set_title(CAREERS_URL, CareersPage::EXPECTED_TITLE);
    session.add_element(&careers::LOCATIONS_BLOCK, "Our Locations");
    session.add_element(&careers::TEAMS_BLOCK, "See all teams");
    session.add_element(&careers::LIFE_AT_INSIDER_BLOCK, "Life at Insider");
    session
}

#[tokio::test]
async fn careers_blocks_verify_and_expose_text() {
    let session = careers_session();
    session.goto(CAREERS_URL).await.expect("Failed to navigate");
    let page = CareersPage::new(session.clone());

    assert!(page.is_loaded().await.expect("Failed load check"));
    assert!(page.verify_all_blocks().await.expect("Failed verify"));
    assert_eq!(
        page.locations_text().await.expect("Failed text"),
        CareersPage::EXPECTED_LOCATIONS_TEXT
    );
    assert_eq!(
        page.teams_text().await.expect("Failed text"),
        CareersPage::EXPECTED_TEAMS_TEXT
    );
    assert_eq!(
        page.life_at_insider_text().await.expect("Failed text"),
        CareersPage::EXPECTED_LIFE_TEXT
    );
    // Each block was scrolled into view before its visibility wait
    assert_eq!(session.scrolled_to().len(), 3);
}

#[tokio::test]
async fn missing_block_fails_verification_without_raising() {
    let session = careers_session();
    session.remove_element(&careers::TEAMS_BLOCK);
    let page = CareersPage::new(session.clone());

    assert!(page.verify_locations_block().await.expect("Failed verify"));
    assert!(!page.verify_teams_block().await.expect("Failed verify"));
    assert!(!page.verify_all_blocks().await.expect("Failed verify"));
}

fn qa_jobs_session() -> Arc<MockSession> {
    let session = Arc::new(MockSession::new());
    session.set_title(QA_JOBS_URL, "Insider quality assurance job opportunities");
    session.add_element(&qa_jobs::SEE_ALL_QA_JOBS_BTN, "See all QA jobs");
    session.add_element(&qa_jobs::LOCATION_FILTER, "Filter by Location");
    session.add_element(&qa_jobs::DEPARTMENT_FILTER_VALUE, "Quality Assurance");
    session.add_element(&qa_jobs::ISTANBUL_OPTION, "Istanbul, Turkiye");
    session.add_element(&qa_jobs::JOB_POSITION, "Senior Quality Assurance Engineer");
    session.add_list(
        &qa_jobs::JOB_POSITION,
        &["Senior Quality Assurance Engineer", "Quality Assurance Engineer"],
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
    session
}

#[tokio::test]
async fn location_filter_clicks_dropdown_then_option() {
    let session = qa_jobs_session();
    session.goto(QA_JOBS_URL).await.expect("Failed to navigate");
    let page = QaJobsPage::new(session.clone());

    assert!(page.is_loaded().await.expect("Failed load check"));
    page.filter_by_location().await.expect("Failed to filter");

    assert_eq!(
        session.clicks(),
        vec![
            qa_jobs::LOCATION_FILTER.expression,
            qa_jobs::ISTANBUL_OPTION.expression
        ]
    );
}

#[tokio::test]
async fn job_listings_pair_up_row_fields() {
    let session = qa_jobs_session();
    let page = QaJobsPage::new(session.clone());

    let listings = page.job_listings().await.expect("Failed to gather");
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].position, "Senior Quality Assurance Engineer");
    assert_eq!(listings[0].department, "Quality Assurance");
    assert_eq!(listings[1].location, "Istanbul, Turkiye");

    assert!(page.verify_job_details().await.expect("Failed verify"));
}

#[tokio::test]
async fn mismatched_row_counts_are_an_error() {
    let session = qa_jobs_session();
    session.add_list(&qa_jobs::JOB_DEPARTMENT, &["Quality Assurance"]);
    let page = QaJobsPage::new(session.clone());

    let err = page.job_listings().await.unwrap_err();
    assert!(matches!(err, Error::Internal(_)));
}

#[tokio::test]
async fn wrong_row_content_fails_verification() {
    let session = qa_jobs_session();
    session.add_list(
        &qa_jobs::JOB_LOCATION,
        &["Istanbul, Turkiye", "Ankara, Turkiye"],
    );
    let page = QaJobsPage::new(session.clone());

    assert!(!page.verify_job_details().await.expect("Failed verify"));
}

#[tokio::test]
async fn view_role_opens_lever_in_a_new_tab() {
    let session = qa_jobs_session();
    session.goto(QA_JOBS_URL).await.expect("Failed to navigate");
    session.add_element(&lever::APPLY_BUTTON, "Apply for this job");
    let page = QaJobsPage::new(session.clone());

    let lever_page = page
        .open_role(&qa_jobs::SENIOR_QA_ENGINEER_VIEW_ROLE)
        .await
        .expect("Failed to open role");

    assert_eq!(session.window_count().await.expect("Failed count"), 2);
    let url = lever_page.current_url().await.expect("Failed url");
    assert!(url.contains(LeverPage::URL_FRAGMENT));
    assert!(lever_page
        .apply_button_present()
        .await
        .expect("Failed apply check"));
}

#[tokio::test]
async fn missing_apply_button_reports_absent() {
    let session = Arc::new(MockSession::new());
    let page = LeverPage::new(session);

    assert!(!page
        .apply_button_present()
        .await
        .expect("Failed apply check"));
}
