//! Chrome DevTools Protocol (CDP) bridge for pausepoints.
//!
//! Launches (or attaches to) a Chrome instance with remote debugging
//! enabled, talks CDP JSON-RPC over WebSocket, and exposes the handful of
//! Debugger-domain operations pausepoints needs: enable, collect
//! `scriptParsed` notifications, fetch a script's source, and list its
//! possible breakpoint locations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let browser = Browser::launch(BrowserConfig::default()).await?;
//! let page = browser.new_page().await?;
//! page.navigate("https://example.com").await?;
//! page.enable_debugger().await?;
//! let script = page.wait_for_script("/client.js", deadline).await?;
//! let points = page.possible_breakpoints(&script.script_id).await?;
//! browser.close().await;
//! ```

mod chrome;
mod client;
mod error;
mod protocol;
mod session;

pub use chrome::{Browser, BrowserConfig};
pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
