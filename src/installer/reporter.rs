//! Progress output for install steps

use console::Style;

use super::Step;

/// Receives each step just before it runs
pub trait Reporter {
    fn step(&self, step: &Step, dry_run: bool);
}

/// Prints one progress line per step to stdout
pub struct ConsoleReporter {
    /// Destination directory as shown to the user (e.g. `~/.local/bin`)
    dest_display: String,
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(dest_display: impl Into<String>, verbose: bool) -> Self {
        Self {
            dest_display: dest_display.into(),
            verbose,
        }
    }

    fn line(&self, step: &Step, dry_run: bool) -> String {
        let text = step.describe(&self.dest_display);
        if dry_run {
            format!(
                "{} {}",
                Style::new().yellow().bold().apply_to("[DRY RUN]"),
                text
            )
        } else {
            Style::new().bold().apply_to(text).to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn step(&self, step: &Step, dry_run: bool) {
        println!("{}", self.line(step, dry_run));
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(step.detail()));
        }
    }
}
