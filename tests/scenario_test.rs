//! End-to-end scenario tests against the scripted mock session

mod common;

use common::{file_names, mock_site, test_config};
use insider_automation::locators::{careers, home, qa_jobs};
use insider_automation::scenario::{end_to_end_flow, ScenarioContext};
use insider_automation::session::PageSession;
use insider_automation::Error;

#[tokio::test]
async fn full_flow_passes_against_a_green_site() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let session = mock_site();
    let ctx = ScenarioContext::new(session.clone(), test_config(dir.path()));

    end_to_end_flow(&ctx).await.expect("Flow must pass");

    // The journey touched every interactive element in order
    let clicks = session.clicks();
    assert_eq!(
        clicks,
        vec![
            home::ACCEPT_COOKIES_BTN.expression,
            home::CAREERS_LINK.expression,
            qa_jobs::SEE_ALL_QA_JOBS_BTN.expression,
            qa_jobs::LOCATION_FILTER.expression,
            qa_jobs::ISTANBUL_OPTION.expression,
            qa_jobs::SENIOR_QA_ENGINEER_VIEW_ROLE.expression,
        ]
    );
    assert_eq!(session.hovers(), vec![home::COMPANY_MENU.expression]);

    // The Lever tab was opened and switched to
    assert_eq!(
        session.window_count().await.expect("Failed count"),
        2
    );
    assert!(session
        .current_url()
        .await
        .expect("Failed url")
        .contains("jobs.lever.co"));

    // A green run leaves no failure screenshots behind
    assert!(file_names(&ctx.config.screenshot_dir).is_empty());
}

#[tokio::test]
async fn content_mismatch_fails_its_step_with_every_check_listed() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let session = mock_site();
    // Two careers blocks carry wrong copy
    session.add_element(&careers::LOCATIONS_BLOCK, "Our Offices");
    session.add_element(&careers::TEAMS_BLOCK, "Browse teams");
    let ctx = ScenarioContext::new(session.clone(), test_config(dir.path()));

    let err = end_to_end_flow(&ctx).await.unwrap_err();
    match err {
        Error::StepFailed { step, failures } => {
            assert_eq!(step, "Careers Page Verification");
            assert_eq!(failures.len(), 2);
            assert!(failures.iter().any(|f| f.contains("locations block text")));
            assert!(failures.iter().any(|f| f.contains("teams block text")));
        }
        other => panic!("Unexpected error: {other:?}"),
    }

    // The failing step left a tagged screenshot
    let shots = file_names(&ctx.config.screenshot_dir);
    assert_eq!(shots.len(), 1);
    assert!(shots[0].starts_with("step2_careers_"));
    assert!(shots[0].ends_with(".png"));

    // The scenario aborted: the QA jobs page was never touched
    assert!(!session
        .clicks()
        .iter()
        .any(|c| c == qa_jobs::LOCATION_FILTER.expression));
}

#[tokio::test]
async fn structural_failure_aborts_the_first_step() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let session = mock_site();
    // The logo never appears, so the home load check times out
    session.remove_element(&home::LOGO);
    let ctx = ScenarioContext::new(session.clone(), test_config(dir.path()));

    let err = end_to_end_flow(&ctx).await.unwrap_err();
    assert!(err.is_timeout());

    let shots = file_names(&ctx.config.screenshot_dir);
    assert_eq!(shots.len(), 1);
    assert!(shots[0].starts_with("step1_homepage_"));

    // Nothing past the home page ran
    assert_eq!(session.hovers().len(), 0);
}

#[tokio::test]
async fn wrong_job_rows_fail_the_details_step() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let session = mock_site();
    session.add_list(
        &qa_jobs::JOB_DEPARTMENT,
        &["Quality Assurance", "Engineering"],
    );
    let ctx = ScenarioContext::new(session.clone(), test_config(dir.path()));

    let err = end_to_end_flow(&ctx).await.unwrap_err();
    match err {
        Error::StepFailed { step, failures } => {
            assert_eq!(step, "Job Details Verification");
            assert_eq!(failures.len(), 1);
            assert!(failures[0].contains("department 2"));
        }
        other => panic!("Unexpected error: {other:?}"),
    }

    let shots = file_names(&ctx.config.screenshot_dir);
    assert_eq!(shots.len(), 1);
    assert!(shots[0].starts_with("step4_jobdetails_"));

    // The Lever tab was never opened
    assert_eq!(session.window_count().await.expect("Failed count"), 1);
}

#[tokio::test]
async fn screenshots_can_be_disabled_for_failing_runs() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let session = mock_site();
    session.remove_element(&home::LOGO);
    let mut config = test_config(dir.path());
    config.screenshot_enabled = false;
    let ctx = ScenarioContext::new(session, config);

    assert!(end_to_end_flow(&ctx).await.is_err());
    assert!(file_names(&ctx.config.screenshot_dir).is_empty());
}
