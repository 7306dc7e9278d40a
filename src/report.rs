use colored::Colorize;
use std::fmt::Display;

/// Line-oriented diagnostics on stderr.
///
/// - red `error:` for anything that ends the invocation
/// - yellow `note:` for benign conditions
/// - dimmed detail lines, only with `--verbose`
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    pub verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Reporter { verbose }
    }

    pub fn error(&self, msg: impl Display) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    }

    pub fn note(&self, msg: impl Display) {
        eprintln!("{} {}", "note:".yellow().bold(), msg);
    }

    pub fn detail(&self, msg: impl Display) {
        if self.verbose {
            eprintln!("{}", msg.to_string().as_str().dimmed());
        }
    }
}
