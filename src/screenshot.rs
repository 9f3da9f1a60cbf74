//! Failure-evidence screenshots
//!
//! Captures the current window to `<name>_<YYYYMMDD_HHMMSS>.png` under the
//! configured directory. Capture never raises to the caller: failures are
//! logged and reported as `None`, and the whole feature can be switched off
//! in configuration.

use crate::config::Config;
use crate::session::PageSession;
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Timestamp used in screenshot file names
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Captures and persists failure evidence images
pub struct ScreenshotManager {
    session: Arc<dyn PageSession>,
    enabled: bool,
    dir: PathBuf,
}

impl ScreenshotManager {
    /// Create a manager bound to one session
    pub fn new(session: Arc<dyn PageSession>, config: &Config) -> Self {
        Self {
            session,
            enabled: config.screenshot_enabled,
            dir: config.screenshot_dir.clone(),
        }
    }

    /// Capture a screenshot named `<name>_<timestamp>.png`
    ///
    /// Returns the written path, or `None` when the feature is disabled or
    /// the capture failed (logged, never raised).
    pub async fn capture(&self, name: &str) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }

        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            error!("Error creating screenshot directory: {}", e);
            return None;
        }

        let filename = format!("{}_{}.png", name, timestamp());
        let path = self.dir.join(filename);

        let bytes = match self.session.screenshot_png().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Error taking screenshot: {}", e);
                return None;
            }
        };

        match std::fs::write(&path, bytes) {
            Ok(()) => {
                info!("Screenshot saved: {}", path.display());
                Some(path)
            }
            Err(e) => {
                error!("Error saving screenshot: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MockSession;

    fn manager_with(dir: &std::path::Path, enabled: bool) -> ScreenshotManager {
        let config = Config {
            screenshot_enabled: enabled,
            screenshot_dir: dir.to_path_buf(),
            ..Config::default()
        };
        ScreenshotManager::new(Arc::new(MockSession::new()), &config)
    }

    #[tokio::test]
    async fn disabled_capture_is_a_no_op() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("shots");
        let manager = manager_with(&target, false);

        assert!(manager.capture("step1_homepage").await.is_none());
        // The destination directory is never even created
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn enabled_capture_writes_one_timestamped_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let manager = manager_with(dir.path(), true);

        let path = manager
            .capture("step2_careers")
            .await
            .expect("Capture must yield a path");
        assert!(path.exists());

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("Failed to read dir")
            .collect();
        assert_eq!(entries.len(), 1);

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("Missing file name");
        assert!(name.starts_with("step2_careers_"));
        assert!(name.ends_with(".png"));

        let stamp = name
            .trim_start_matches("step2_careers_")
            .trim_end_matches(".png");
        chrono::NaiveDateTime::parse_from_str(stamp, "%Y%m%d_%H%M%S")
            .expect("Timestamp must match YYYYMMDD_HHMMSS");
    }

    #[tokio::test]
    async fn capture_failure_returns_none_without_raising() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let session = Arc::new(MockSession::new());
        session.fail_screenshots();
        let config = Config {
            screenshot_enabled: true,
            screenshot_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let manager = ScreenshotManager::new(session, &config);

        assert!(manager.capture("broken").await.is_none());
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("Failed to read dir")
            .collect();
        assert!(entries.is_empty());
    }
}
