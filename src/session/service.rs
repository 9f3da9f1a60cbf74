//! WebDriver process provisioning
//!
//! Spawns the chromedriver/geckodriver binary, waits for its `/status`
//! endpoint to report ready, and kills the process when the run is done.

use crate::config::Config;
use crate::{Error, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Child;
use tokio::time::sleep;
use tracing::{info, warn};

/// Handle to a spawned WebDriver process
#[derive(Debug)]
pub struct WebDriverService {
    child: Child,
    base_url: String,
    port: u16,
}

impl WebDriverService {
    /// Spawn the configured WebDriver binary and wait until it is ready
    pub async fn spawn(config: &Config) -> Result<Self> {
        let binary = config.webdriver_binary.clone().ok_or_else(|| {
            Error::driver_startup("webdriver_spawn is set but webdriver_binary is not")
        })?;
        let port = config.webdriver_port.unwrap_or_else(find_free_port);
        let base_url = format!("http://127.0.0.1:{}", port);

        info!("Spawning WebDriver process '{}' on port {}", binary, port);

        let mut cmd = tokio::process::Command::new(&binary);
        cmd.arg(format!("--port={}", port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| Error::driver_startup(format!("Failed to spawn {}: {}", binary, e)))?;

        let service = Self {
            child,
            base_url,
            port,
        };

        service
            .wait_for_ready(Duration::from_secs(config.webdriver_startup_secs))
            .await?;

        info!("WebDriver ready at {}", service.base_url);
        Ok(service)
    }

    /// Poll the `/status` endpoint until the server reports ready
    async fn wait_for_ready(&self, timeout: Duration) -> Result<()> {
        let status_url = format!("{}/status", self.base_url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout {
            attempts += 1;

            match client.get(&status_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body: serde_json::Value = resp.json().await.unwrap_or_default();
                    let ready = body
                        .pointer("/value/ready")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(true);
                    if ready {
                        return Ok(());
                    }
                }
                Ok(resp) => {
                    warn!("WebDriver status returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for WebDriver to start...");
                    }
                    // Connection refused is expected while the process starts
                    if !e.is_connect() {
                        warn!("WebDriver status error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(Error::DriverHealthCheck(attempts))
    }

    /// Base URL of the running WebDriver server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Port the WebDriver server listens on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Kill the WebDriver process
    pub async fn stop(&mut self) -> Result<()> {
        info!("Stopping WebDriver process");
        self.child.start_kill().ok();
        self.child.wait().await?;
        Ok(())
    }
}

/// Find a free port to bind the WebDriver server to
fn find_free_port() -> u16 {
    use std::net::TcpListener;

    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to find free port")
        .local_addr()
        .expect("Failed to get local addr")
        .port()
}
