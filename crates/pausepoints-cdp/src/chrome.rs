//! Chrome process lifecycle.
//!
//! Launches a Chrome/Chromium instance with remote debugging enabled and
//! an ephemeral profile, waits for the debugging endpoint to come up, and
//! kills the process again on close. If something is already listening on
//! the debug port, that instance is used instead.

use std::path::PathBuf;
use std::process::Stdio;

use tempfile::TempDir;
use tokio::process::{Child, Command};
use tracing::{info, warn};

use super::client::CdpClient;
use super::error::CdpError;
use super::session::PageSession;

/// Browser configuration.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Chrome debugging port.
    pub debug_port: u16,
    /// Whether to run Chrome in headless mode.
    pub headless: bool,
    /// Profile directory; a throwaway temp dir when not set.
    pub profile_dir: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debug_port: 9222,
            headless: true,
            profile_dir: None,
        }
    }
}

impl BrowserConfig {
    /// Get the CDP endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("http://localhost:{}", self.debug_port)
    }
}

/// A running browser with a connected CDP client.
pub struct Browser {
    client: CdpClient,
    /// Chrome process handle (if we launched it).
    process: Option<Child>,
    /// Ephemeral profile, removed when the browser is dropped.
    _profile: Option<TempDir>,
}

impl Browser {
    /// Find a Chrome executable path.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            let paths = [
                "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                "/Applications/Chromium.app/Contents/MacOS/Chromium",
                "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "linux")]
        {
            let paths = [
                "/usr/bin/google-chrome",
                "/usr/bin/google-chrome-stable",
                "/usr/bin/chromium",
                "/usr/bin/chromium-browser",
                "/snap/bin/chromium",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "windows")]
        {
            let paths = [
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        None
    }

    /// Check if Chrome is already answering on the debug port.
    async fn is_running(endpoint: &str) -> bool {
        reqwest::get(&format!("{}/json/version", endpoint))
            .await
            .is_ok()
    }

    /// Launch Chrome (unless one is already listening) and connect to it.
    pub async fn launch(config: BrowserConfig) -> Result<Self, CdpError> {
        let endpoint = config.endpoint();
        let mut process = None;
        let mut profile = None;

        if Self::is_running(&endpoint).await {
            info!("Chrome already running on port {}", config.debug_port);
        } else {
            let chrome_path = Self::find_chrome().ok_or(CdpError::ChromeNotFound)?;

            let profile_path = match &config.profile_dir {
                Some(dir) => {
                    if let Err(e) = std::fs::create_dir_all(dir) {
                        warn!("Failed to create profile directory: {}", e);
                    }
                    dir.clone()
                }
                None => {
                    let tmp =
                        tempfile::tempdir().map_err(|e| CdpError::LaunchFailed(e.to_string()))?;
                    let path = tmp.path().to_path_buf();
                    profile = Some(tmp);
                    path
                }
            };

            info!(
                "Launching Chrome with profile at: {}",
                profile_path.display()
            );

            let mut cmd = Command::new(&chrome_path);
            cmd.arg(format!("--remote-debugging-port={}", config.debug_port))
                .arg(format!("--user-data-dir={}", profile_path.display()))
                .arg("--no-first-run")
                .arg("--no-default-browser-check")
                .arg("--disable-background-networking")
                .arg("--disable-sync")
                .stdout(Stdio::null())
                .stderr(Stdio::null());

            if config.headless {
                cmd.arg("--headless=new");
            }

            let child = cmd
                .spawn()
                .map_err(|e| CdpError::LaunchFailed(e.to_string()))?;

            info!("Chrome launched with PID: {:?}", child.id());

            let mut attempts = 0;
            let max_attempts = 30;
            while attempts < max_attempts {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                if Self::is_running(&endpoint).await {
                    break;
                }
                attempts += 1;
            }

            if attempts >= max_attempts {
                return Err(CdpError::LaunchFailed(
                    "Chrome failed to start within timeout".to_string(),
                ));
            }

            process = Some(child);
        }

        let client = CdpClient::connect(&endpoint).await?;
        info!("Connected to Chrome at {}", endpoint);

        Ok(Self {
            client,
            process,
            _profile: profile,
        })
    }

    /// Open a new page and attach a debug session to it.
    pub async fn new_page(&self) -> Result<PageSession, CdpError> {
        self.client.new_page().await
    }

    /// Shut the browser down, killing Chrome if we launched it.
    pub async fn close(mut self) {
        if let Some(mut child) = self.process.take() {
            info!("Shutting down Chrome...");
            let _ = child.kill().await;
        }
    }
}

#[cfg(test)]
#[path = "chrome_tests.rs"]
mod tests;
