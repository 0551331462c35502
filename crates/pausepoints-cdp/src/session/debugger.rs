//! Debugger-domain operations: script tracking and breakpoint queries.

use std::time::Duration;

use parking_lot::Mutex;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{trace, warn};

use crate::error::CdpError;
use crate::protocol::{BreakLocation, CdpResponse, PausePoint, ScriptLocation, ScriptRecord};

use super::core::PageSession;

/// How often the collected script list is re-scanned while waiting.
const SCRIPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// `getPossibleBreakpoints` is always asked for the full conceivable
/// range so the whole script is covered regardless of its length.
const MAX_SCRIPT_LINES: u32 = 10_000_000;

/// Collects `Debugger.scriptParsed` notifications for one session.
///
/// The record list is ordered by arrival and append-only; it lives as
/// long as the session does.
pub(super) struct ScriptTracker {
    event_rx: Mutex<mpsc::UnboundedReceiver<CdpResponse>>,
    scripts: Mutex<Vec<ScriptRecord>>,
}

impl ScriptTracker {
    pub(super) fn new(event_rx: mpsc::UnboundedReceiver<CdpResponse>) -> Self {
        Self {
            event_rx: Mutex::new(event_rx),
            scripts: Mutex::new(Vec::new()),
        }
    }

    /// Fold every queued `scriptParsed` event into the record list.
    ///
    /// Other events on the session channel are dropped here.
    fn drain(&self) {
        let mut rx = self.event_rx.lock();
        let mut scripts = self.scripts.lock();
        while let Ok(event) = rx.try_recv() {
            if event.method.as_deref() != Some("Debugger.scriptParsed") {
                continue;
            }
            let Some(params) = event.params else {
                continue;
            };
            match serde_json::from_value::<ScriptRecord>(params) {
                Ok(record) => {
                    trace!("Script parsed: {} ({})", record.script_id, record.url);
                    scripts.push(record);
                }
                Err(e) => warn!("Failed to parse scriptParsed params: {}", e),
            }
        }
    }

    /// First collected record whose URL contains `pattern`.
    fn find(&self, pattern: &str) -> Option<ScriptRecord> {
        self.drain();
        self.scripts
            .lock()
            .iter()
            .find(|record| record.url.contains(pattern))
            .cloned()
    }

    /// Wait until a collected record's URL contains `pattern`.
    ///
    /// Scans on a fixed interval; the deadline elapsing is a typed error
    /// rather than an unbounded hang.
    pub(super) async fn wait_for(
        &self,
        pattern: &str,
        deadline: Duration,
    ) -> Result<ScriptRecord, CdpError> {
        let matched = tokio::time::timeout(deadline, async {
            loop {
                if let Some(record) = self.find(pattern) {
                    return record;
                }
                tokio::time::sleep(SCRIPT_POLL_INTERVAL).await;
            }
        })
        .await;

        matched.map_err(|_| CdpError::ScriptNotFound {
            pattern: pattern.to_string(),
            waited: deadline,
        })
    }

    /// Snapshot of every record collected so far, in arrival order.
    pub(super) fn records(&self) -> Vec<ScriptRecord> {
        self.drain();
        self.scripts.lock().clone()
    }
}

impl PageSession {
    /// Enable the Debugger domain.
    ///
    /// From this point on the browser reports every parsed script, and
    /// the session keeps collecting the notifications.
    pub async fn enable_debugger(&self) -> Result<(), CdpError> {
        self.call("Debugger.enable", None).await?;
        Ok(())
    }

    /// Every script parsed so far, in arrival order.
    pub fn parsed_scripts(&self) -> Vec<ScriptRecord> {
        self.scripts.records()
    }

    /// Wait for a parsed script whose URL contains `pattern`.
    pub async fn wait_for_script(
        &self,
        pattern: &str,
        deadline: Duration,
    ) -> Result<ScriptRecord, CdpError> {
        self.scripts.wait_for(pattern, deadline).await
    }

    /// Fetch the full source text of a script.
    pub async fn script_source(&self, script_id: &str) -> Result<String, CdpError> {
        let result = self
            .call(
                "Debugger.getScriptSource",
                Some(json!({"scriptId": script_id})),
            )
            .await?;

        result["scriptSource"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| CdpError::InvalidResponse("Missing scriptSource".to_string()))
    }

    /// All breakpoint-eligible locations of a script, in browser order.
    pub async fn possible_breakpoints(&self, script_id: &str) -> Result<Vec<PausePoint>, CdpError> {
        let start = ScriptLocation {
            script_id: script_id.to_string(),
            line_number: 1,
            column_number: 0,
        };
        let end = ScriptLocation {
            script_id: script_id.to_string(),
            line_number: MAX_SCRIPT_LINES,
            column_number: 0,
        };

        let result = self
            .call(
                "Debugger.getPossibleBreakpoints",
                Some(json!({
                    "start": start,
                    "end": end,
                })),
            )
            .await?;

        let locations: Vec<BreakLocation> = serde_json::from_value(result["locations"].clone())?;
        Ok(locations.into_iter().map(PausePoint::from).collect())
    }
}
