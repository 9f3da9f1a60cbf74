//! Suite entry point
//!
//! No flags: configuration comes from `insider.toml` (when present) and
//! `INSIDER_*` environment variables. Runs every registered test, writes
//! the HTML and JSON reports, and exits non-zero when any test failed.

use std::process::ExitCode;

use insider_automation::config::Config;
use insider_automation::runner::TestRunner;
use insider_automation::{logging, report};
use tracing::{error, info};

const CONFIG_FILE: &str = "insider.toml";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config_path = std::path::Path::new(CONFIG_FILE)
        .exists()
        .then_some(CONFIG_FILE);
    let config = Config::load(config_path)?;

    let _log_guard = logging::init(&config)?;

    info!(
        "Insider automation suite v{}",
        insider_automation::VERSION
    );
    info!(
        "Configuration loaded: browser={}, headless={}, base_url={}",
        config.browser, config.headless, config.base_url
    );

    let runner = TestRunner::new(config.clone());
    let suite = runner.run_all().await;

    report::write_html(&suite, &config.report_dir)?;
    report::write_json(&suite, &config.report_dir)?;

    if suite.all_passed() {
        info!("All {} test(s) passed", suite.total);
        Ok(ExitCode::SUCCESS)
    } else {
        error!("{} of {} test(s) failed", suite.failed, suite.total);
        Ok(ExitCode::FAILURE)
    }
}
