//! Session layer
//!
//! Owns the single live browser-automation session of a test run and the
//! seam page objects talk through.
//!
//! - `traits`: the `PageSession` trait (navigation, bounded waits, actions)
//! - `driver`: `DriverManager`, session create/close per browser family
//! - `service`: spawning and health-checking the WebDriver binary
//! - `webdriver`: `PageSession` over the WebDriver client
//! - `mock`: scripted implementation for tests

pub mod driver;
pub mod mock;
pub mod service;
pub mod traits;
pub mod webdriver;


pub use driver::{BrowserKind, DriverManager};
pub use mock::MockSession;
pub use service::WebDriverService;
pub use traits::PageSession;
pub use webdriver::WebDriverSession;
