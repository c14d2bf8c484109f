//! Output formatting utilities for the CLI.
//!
//! Commands return a value implementing [`CommandOutput`]; [`output`] prints
//! it as human-readable text or JSON depending on the global `--json` flag.

pub mod progress;
pub mod table;

use console::{style, StyledObject};
use serde::Serialize;

use crate::domain::models::Provenance;

pub use table::TableFormatter;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to at most `max_len` characters, appending "..." if
/// truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Source badge shown under an agent answer
pub fn provenance_badge(provenance: Provenance) -> StyledObject<String> {
    let text = format!("[{}]", provenance.label());
    match provenance {
        Provenance::Remote => style(text).green(),
        Provenance::Fallback => style(text).yellow(),
    }
}

/// Connectivity mode line, colored by state
pub fn mode_badge(remote_available: Option<bool>, label: &str) -> StyledObject<String> {
    let text = label.to_string();
    match remote_available {
        Some(true) => style(text).green().bold(),
        Some(false) => style(text).yellow().bold(),
        None => style(text).dim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence here", 10), "a longe...");
        assert_eq!(truncate("ünïcödé text", 8), "ünïcö...");
    }

    #[test]
    fn test_provenance_badge_text() {
        let badge = provenance_badge(Provenance::Fallback).force_styling(false);
        assert_eq!(badge.to_string(), "[Intelligent Fallback]");
    }
}
