//! CDP protocol types and message definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// CDP request message.
#[derive(Debug, Serialize)]
pub struct CdpRequest {
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// CDP response message.
#[derive(Debug, Deserialize)]
pub struct CdpResponse {
    pub id: Option<u64>,
    pub result: Option<Value>,
    pub error: Option<CdpErrorResponse>,
    pub method: Option<String>,
    pub params: Option<Value>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// CDP error in response.
#[derive(Debug, Deserialize)]
pub struct CdpErrorResponse {
    pub code: i64,
    pub message: String,
    pub data: Option<String>,
}

/// Page info from /json endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub title: String,
    pub url: String,
    pub web_socket_debugger_url: Option<String>,
    pub dev_tools_frontend_url: Option<String>,
}

/// Browser version info.
///
/// Note: Chrome returns PascalCase field names for this endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserVersion {
    #[serde(rename = "Browser")]
    pub browser: String,
    #[serde(rename = "Protocol-Version")]
    pub protocol_version: String,
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
    #[serde(rename = "V8-Version")]
    pub v8_version: Option<String>,
    #[serde(rename = "webSocketDebuggerUrl")]
    pub web_socket_debugger_url: String,
}

// ============================================================================
// Debugger Types
// ============================================================================

/// One `Debugger.scriptParsed` notification.
///
/// Appended to the session's ordered script list as events arrive; records
/// are never removed or mutated for the lifetime of the session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRecord {
    pub script_id: String,
    #[serde(default)]
    pub url: String,
}

/// A (line, column) position inside a script, for request bounds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptLocation {
    pub script_id: String,
    pub line_number: u32,
    pub column_number: u32,
}

/// One entry of a `Debugger.getPossibleBreakpoints` result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakLocation {
    pub line_number: u32,
    #[serde(default)]
    pub column_number: u32,
    #[serde(rename = "type")]
    pub break_type: Option<String>,
}

/// A breakpoint-eligible location, as printed.
///
/// `kind` is the protocol's location type (`call`, `debuggerStatement`,
/// `return`, or whatever else the browser reports); locations without a
/// type keep the field out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PausePoint {
    pub line: u32,
    pub column: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl From<BreakLocation> for PausePoint {
    fn from(loc: BreakLocation) -> Self {
        Self {
            line: loc.line_number,
            column: loc.column_number,
            kind: loc.break_type,
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
