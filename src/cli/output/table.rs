//! Table output formatting for CLI commands
//!
//! Provides formatted tables for personas and transcripts using comfy-table.
//! Color is dropped when `NO_COLOR` is set or the terminal is dumb.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::domain::models::{ConversationTurn, PersonaDescriptor, Provenance, Role};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format the persona registry as a table
    pub fn format_personas<'a>(&self, personas: impl IntoIterator<Item = &'a PersonaDescriptor>) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Capabilities").add_attribute(Attribute::Bold),
        ]);

        for persona in personas {
            let id_cell = if self.use_colors {
                Cell::new(persona.id).fg(Color::Cyan)
            } else {
                Cell::new(persona.id)
            };

            table.add_row(vec![
                id_cell,
                Cell::new(persona.display_name),
                Cell::new(persona.description),
                Cell::new(persona.capabilities.join("\n")),
            ]);
        }

        table.to_string()
    }

    /// Format a conversation transcript, oldest turn first
    pub fn format_transcript(&self, turns: &[ConversationTurn]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Time").add_attribute(Attribute::Bold),
            Cell::new("From").add_attribute(Attribute::Bold),
            Cell::new("Message").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

        for turn in turns {
            let from = match turn.role {
                Role::User => "You",
                Role::Agent => "Agent",
            };
            let source_cell = match turn.provenance {
                Some(provenance) if self.use_colors => {
                    Cell::new(provenance.label()).fg(provenance_color(provenance))
                }
                Some(provenance) => Cell::new(provenance.label()),
                None => Cell::new("-"),
            };

            table.add_row(vec![
                Cell::new(turn.created_at.format("%H:%M:%S")),
                Cell::new(from),
                Cell::new(&turn.text),
                source_cell,
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

const fn provenance_color(provenance: Provenance) -> Color {
    match provenance {
        Provenance::Remote => Color::Green,
        Provenance::Fallback => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::persona_registry;

    #[test]
    fn test_format_personas_lists_every_agent() {
        let formatter = TableFormatter::with_config(false, Some(200));
        let output = formatter.format_personas(persona_registry::all());

        for persona in persona_registry::all() {
            assert!(output.contains(persona.id.as_str()));
            assert!(output.contains(persona.display_name));
        }
        assert!(output.contains("Capabilities"));
    }

    #[test]
    fn test_format_transcript() {
        let formatter = TableFormatter::with_config(false, Some(160));
        let turns = vec![
            ConversationTurn::user("Any violations?"),
            ConversationTurn::agent("Two minor deviations.", Provenance::Fallback),
        ];
        let output = formatter.format_transcript(&turns);

        assert!(output.contains("You"));
        assert!(output.contains("Two minor deviations."));
        assert!(output.contains("Intelligent Fallback"));
    }
}
