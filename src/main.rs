//! Entry point of the interactive dictionary shell.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use sarf::cli::{App, Cli, Console};
use sarf::lexicon::{self, PatternStore, RootStore};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let console = Console::new(!cli.no_color && std::io::stdout().is_terminal());

    let mut roots = RootStore::new();
    if let Some(path) = &cli.roots {
        match lexicon::load_roots(path, &mut roots) {
            Ok(report) => {
                console.success(&format!("تم تحميل ملف الجذور ({report})"));
            }
            Err(error) => {
                console.error(&error.to_string());
                return ExitCode::FAILURE;
            }
        }
    }

    let mut patterns = PatternStore::new();
    match &cli.patterns {
        Some(path) => match lexicon::load_patterns(path, &mut patterns) {
            Ok(report) => {
                console.success(&format!("تم تحميل ملف الأوزان ({report})"));
            }
            Err(error) => {
                console.error(&error.to_string());
                return ExitCode::FAILURE;
            }
        },
        None if !cli.no_seed_defaults => {
            let seeded = patterns.seed_defaults();
            console.success(&format!("تم تحميل الأوزان الافتراضية ({seeded})"));
        }
        None => {}
    }

    App::new(roots, patterns, console).run();
    ExitCode::SUCCESS
}
