//! ANSI terminal output for the interactive session.

use std::io::{self, Write};

// =============================================================================
// Console Definition
// =============================================================================

/// Writes styled lines to stdout, or plain ones when color is off.
///
/// Marks follow the dictionary's conventions: `✓` green for success, `✗`
/// red for errors, `⚠` yellow for warnings, cyan boxed section headers.
pub struct Console {
    color: bool,
}

impl Console {
    const RESET: &'static str = "\x1b[0m";
    const BOLD: &'static str = "\x1b[1m";
    const RED: &'static str = "\x1b[31m";
    const GREEN: &'static str = "\x1b[32m";
    const YELLOW: &'static str = "\x1b[33m";
    const CYAN: &'static str = "\x1b[36m";

    /// Creates a console; `color` false renders everything unstyled.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Wraps the text in an ANSI code when color is on.
    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{}", Self::RESET)
        } else {
            text.to_string()
        }
    }

    /// Prints a green success line: `✓ <message>`.
    pub fn success(&self, message: &str) {
        println!("{}", self.paint(Self::GREEN, &format!("✓ {message}")));
    }

    /// Prints a red error line: `✗ <message>`.
    pub fn error(&self, message: &str) {
        println!("{}", self.paint(Self::RED, &format!("✗ {message}")));
    }

    /// Prints a yellow warning line: `⚠ <message>`.
    pub fn warning(&self, message: &str) {
        println!("{}", self.paint(Self::YELLOW, &format!("⚠ {message}")));
    }

    /// Prints a boxed cyan section header.
    pub fn header(&self, title: &str) {
        let code = format!("{}{}", Self::CYAN, Self::BOLD);
        println!();
        println!("{}", self.paint(&code, &format!("╔══ {title} ══╗")));
    }

    /// Prints a thin horizontal rule.
    pub fn rule(&self) {
        println!("{}", "─".repeat(42));
    }

    /// Prints a heavy horizontal rule, used around the banner.
    pub fn banner_rule(&self) {
        let code = format!("{}{}", Self::CYAN, Self::BOLD);
        println!("{}", self.paint(&code, &"═".repeat(42)));
    }

    /// Prints an unstyled line.
    pub fn plain(&self, text: &str) {
        println!("{text}");
    }

    /// Prints an indented list line.
    pub fn item(&self, text: &str) {
        println!("  {text}");
    }

    /// Prints an inline prompt and flushes so it shows before the read.
    pub fn prompt(&self, label: &str) {
        print!("{label}");
        let _ = io::stdout().flush();
    }
}

// =============================================================================
// Tests
// =============================================================================
