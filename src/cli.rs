//! CLI definitions for pausepoints.

use clap::Parser;

/// pausepoints CLI.
#[derive(Parser)]
#[command(name = "pausepoints")]
#[command(about = "Dump breakpoint-eligible locations of a page script")]
#[command(version)]
pub(crate) struct Cli {
    /// Page to navigate to
    #[arg(long, default_value = "https://silly-stepping.glitch.me/")]
    pub url: String,

    /// Substring matched against parsed script URLs
    #[arg(long, default_value = "/client.js")]
    pub file: String,

    /// Print the annotated, highlighted source instead of JSON
    #[arg(long)]
    pub format: bool,

    /// Chrome remote debugging port
    #[arg(long, default_value_t = 9222)]
    pub debug_port: u16,

    /// Seconds to wait for a matching script before giving up
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Run Chrome with a visible window
    #[arg(long)]
    pub headful: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["pausepoints"]);
        assert_eq!(cli.url, "https://silly-stepping.glitch.me/");
        assert_eq!(cli.file, "/client.js");
        assert!(!cli.format);
        assert_eq!(cli.debug_port, 9222);
        assert_eq!(cli.timeout_secs, 30);
        assert!(!cli.headful);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "pausepoints",
            "--url",
            "http://localhost:8000/",
            "--file",
            "app.js",
            "--format",
            "--debug-port",
            "9333",
        ]);
        assert_eq!(cli.url, "http://localhost:8000/");
        assert_eq!(cli.file, "app.js");
        assert!(cli.format);
        assert_eq!(cli.debug_port, 9333);
    }
}
