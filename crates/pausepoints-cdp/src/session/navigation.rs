//! Navigation and script evaluation for a CDP page session.

use serde_json::{Value, json};
use tracing::debug;

use crate::error::CdpError;

use super::core::PageSession;

impl PageSession {
    /// Navigate to URL and wait for the page to load.
    pub async fn navigate(&self, url: &str) -> Result<(), CdpError> {
        let result = self
            .call("Page.navigate", Some(json!({"url": url})))
            .await?;

        if let Some(error) = result.get("errorText") {
            return Err(CdpError::NavigationFailed(
                error.as_str().unwrap_or("Unknown error").to_string(),
            ));
        }

        self.wait_for_load().await?;

        debug!("Navigated to {}", url);
        Ok(())
    }

    /// Wait for page load.
    pub async fn wait_for_load(&self) -> Result<(), CdpError> {
        let start = std::time::Instant::now();
        let timeout = std::time::Duration::from_secs(30);

        loop {
            let result = self.evaluate("document.readyState").await?;

            if let Some(state) = result.as_str() {
                if state == "complete" || state == "interactive" {
                    return Ok(());
                }
            }

            if start.elapsed() > timeout {
                return Err(CdpError::Timeout("Page load timeout".to_string()));
            }

            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    }

    /// Evaluate JavaScript expression.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        if let Some(exception) = result.get("exceptionDetails") {
            let text = exception["text"].as_str().unwrap_or("Unknown error");
            return Err(CdpError::JavaScript(text.to_string()));
        }

        Ok(result["result"]["value"].clone())
    }
}
