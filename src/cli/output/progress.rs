//! Spinner utilities using indicatif for terminal output
//!
//! The spinner is drawn on stderr while an agent answer is pending and is
//! hidden entirely when stderr is not a terminal or JSON output is requested.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg} [{elapsed}]";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// Create a spinner with the given message
///
/// # Example
/// ```
/// use steward::cli::output::progress::create_spinner;
///
/// let spinner = create_spinner("Compliance Agent is thinking...", false);
/// // await the answer
/// spinner.finish_and_clear();
/// ```
pub fn create_spinner(message: impl Into<String>, visible: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if !visible || !console::Term::stderr().is_term() {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
    }
    let style = ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(SPINNER_CHARS);
    spinner.set_style(style);
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Extension trait for ProgressBar to add common utility methods
pub trait ProgressBarExt {
    /// Finish with a success message (green checkmark)
    fn finish_success(&self, message: impl Into<String>);

    /// Finish with a warning message (yellow !)
    fn finish_warning(&self, message: impl Into<String>);
}

impl ProgressBarExt for ProgressBar {
    fn finish_success(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", console::style("✓").green(), message.into()));
    }

    fn finish_warning(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", console::style("!").yellow(), message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_keeps_message() {
        let spinner = create_spinner("Audit Agent is thinking...", false);
        assert!(spinner.is_hidden());
        assert_eq!(spinner.message(), "Audit Agent is thinking...");
        spinner.finish_success("done");
        assert!(spinner.is_finished());
    }
}
