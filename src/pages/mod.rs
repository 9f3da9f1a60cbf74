//! Page objects
//!
//! Each page object binds one page's locator table and expected content to
//! a programmatic interface over a shared `PageSession` (composition, not a
//! base-class hierarchy). Navigation methods return the next page's object,
//! modeling the directed sequence Home → Careers → QAJobs → Lever.

pub mod careers;
pub mod home;
pub mod lever;
pub mod qa_jobs;

#[cfg(test)]
mod tests;

pub use careers::CareersPage;
pub use home::HomePage;
pub use lever::LeverPage;
pub use qa_jobs::{JobListing, QaJobsPage};
