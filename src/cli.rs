//! Command-line interface definitions for Veille News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option is optional: a bare invocation runs the compiled-in
//! watchlist against the default output directory.

use clap::Parser;

/// Command-line arguments for the Veille News collector.
///
/// # Examples
///
/// ```sh
/// # Run the compiled-in watchlist
/// veille_news
///
/// # Run a custom watchlist
/// veille_news -c watchlist.yaml
///
/// # Write somewhere else than ./output
/// veille_news -o /var/lib/veille
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML configuration file (feeds, keywords, output_dir)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the output root directory
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["veille_news"]);
        assert!(cli.config.is_none());
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "veille_news",
            "--config",
            "./watchlist.yaml",
            "--output-dir",
            "/tmp/out",
        ]);

        assert_eq!(cli.config.as_deref(), Some("./watchlist.yaml"));
        assert_eq!(cli.output_dir.as_deref(), Some("/tmp/out"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["veille_news", "-c", "w.yaml", "-o", "/tmp/out"]);
        assert_eq!(cli.config.as_deref(), Some("w.yaml"));
        assert_eq!(cli.output_dir.as_deref(), Some("/tmp/out"));
    }
}
