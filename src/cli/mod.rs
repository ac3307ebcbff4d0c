//! The interactive terminal interface of the `sarf` binary.
//!
//! [`Cli`] parses the startup flags, [`Console`] renders ANSI-styled
//! output, and [`App`] runs the bilingual menu loop over the lexicons.

mod menu;
mod output;

pub use menu::App;
pub use output::Console;

use std::path::PathBuf;

use clap::Parser;

/// Startup flags of the `sarf` binary.
#[derive(Parser, Debug)]
#[command(name = "sarf")]
#[command(version, about = "Arabic morphological dictionary", long_about = None)]
pub struct Cli {
    /// Roots file loaded at startup, one root per line
    #[arg(long, value_name = "FILE")]
    pub roots: Option<PathBuf>,

    /// Patterns file loaded at startup, id|structure|description|category per line
    #[arg(long, value_name = "FILE")]
    pub patterns: Option<PathBuf>,

    /// Disable ANSI colors in the output
    #[arg(long)]
    pub no_color: bool,

    /// Do not seed the eight classical patterns when no patterns file is given
    #[arg(long)]
    pub no_seed_defaults: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flags_parse_with_defaults() {
        let cli = Cli::parse_from(["sarf"]);
        assert!(cli.roots.is_none());
        assert!(cli.patterns.is_none());
        assert!(!cli.no_color);
        assert!(!cli.no_seed_defaults);
    }

    #[rstest]
    fn flags_parse_paths_and_switches() {
        let cli = Cli::parse_from([
            "sarf",
            "--roots",
            "roots.txt",
            "--patterns",
            "patterns.txt",
            "--no-color",
            "--no-seed-defaults",
        ]);
        assert_eq!(cli.roots.unwrap(), PathBuf::from("roots.txt"));
        assert_eq!(cli.patterns.unwrap(), PathBuf::from("patterns.txt"));
        assert!(cli.no_color);
        assert!(cli.no_seed_defaults);
    }
}
