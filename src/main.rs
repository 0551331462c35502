//! pausepoints - dump breakpoint-eligible locations of a page script.
//!
//! Drives a headless Chrome via the DevTools protocol: navigates to the
//! target page, watches `Debugger.scriptParsed` notifications for a script
//! whose URL contains `--file`, then queries every possible breakpoint in
//! that script. Prints the locations as JSON by default, or the source
//! annotated with inline `/*X*/` markers when `--format` is set.

mod annotate;
mod cli;
mod highlight;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pausepoints_cdp::{Browser, BrowserConfig};

use crate::cli::Cli;

/// Neutral page to park on while the debug session comes up.
const PLACEHOLDER_URL: &str = "https://example.com";

/// Initialize tracing with console output on stderr.
///
/// stdout is reserved for the JSON/source payload.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = BrowserConfig {
        debug_port: cli.debug_port,
        headless: !cli.headful,
        ..BrowserConfig::default()
    };
    let browser = Browser::launch(config).await.context("launching Chrome")?;

    // Keep the browser shutdown on the error path too.
    let output = run(&browser, &cli).await;
    browser.close().await;

    println!("{}", output?);
    Ok(())
}

/// The whole pipeline: navigate, match a script, fetch its pause points.
async fn run(browser: &Browser, cli: &Cli) -> anyhow::Result<String> {
    let page = browser.new_page().await.context("opening page")?;

    page.navigate(PLACEHOLDER_URL).await?;
    page.enable_debugger().await?;
    page.navigate(&cli.url).await?;

    let script = page
        .wait_for_script(&cli.file, Duration::from_secs(cli.timeout_secs))
        .await?;
    info!("Matched script {} ({})", script.script_id, script.url);

    let text = page.script_source(&script.script_id).await?;
    let points = page.possible_breakpoints(&script.script_id).await?;
    info!("Collected {} pause points", points.len());

    if cli.format {
        highlight::highlight_js(&annotate::annotate(&text, &points))
    } else {
        Ok(serde_json::to_string_pretty(&points)?)
    }
}
