//! Terminal output for the tokensync CLI.
//!
//! Status lines go to stderr with a right-aligned verb column, the way Cargo
//! prints them. Stdout is reserved for machine-readable output (`projects`,
//! `images`, `comments`).

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::DesignTokenGroup;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// Status printer.
///
/// Colour is on when stderr is a terminal. A quiet printer drops everything
/// except errors.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// A printer that only reports errors.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// e.g. "    Fetching file abcDEF"
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    pub fn success(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    pub fn warning(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(YELLOW, verb, message);
        }
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a string as cyan (paths, keys).
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// Bold red label for validation issues.
    pub fn severity(&self, label: &str) -> String {
        if self.color {
            format!("{BOLD}{RED}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    /// One `info` line per group with its token count, then a total.
    pub fn groups(&self, groups: &[DesignTokenGroup]) {
        for group in groups {
            self.info(&group.name, &plural(group.len(), "token", "tokens"));
        }
        self.success("Extracted", &group_summary(groups));
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "token", "tokens")` -> "1 token".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// "5 tokens in 2 groups"
pub fn group_summary(groups: &[DesignTokenGroup]) -> String {
    let total: usize = groups.iter().map(|g| g.len()).sum();
    format!(
        "{} in {}",
        plural(total, "token", "tokens"),
        plural(groups.len(), "group", "groups")
    )
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
