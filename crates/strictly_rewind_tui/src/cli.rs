//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Play tic-tac-toe in the terminal and rewind to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File receiving log output (the terminal belongs to the UI)
    #[arg(long, default_value = "strictly_rewind.log")]
    pub log_file: PathBuf,

    /// Filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Render without colors
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["strictly_rewind"]);
        assert_eq!(cli.log_file, PathBuf::from("strictly_rewind.log"));
        assert_eq!(cli.log_level, "info");
        assert!(!cli.no_color);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "strictly_rewind",
            "--log-file",
            "/tmp/game.log",
            "--log-level",
            "debug",
            "--no-color",
        ]);
        assert_eq!(cli.log_file, PathBuf::from("/tmp/game.log"));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.no_color);
    }
}
