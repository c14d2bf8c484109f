//! `steward agents`: list the governance personas.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::PersonaDescriptor;
use crate::services::persona_registry;

#[derive(Debug, Serialize)]
pub struct PersonaOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
}

impl From<&PersonaDescriptor> for PersonaOutput {
    fn from(persona: &PersonaDescriptor) -> Self {
        Self {
            id: persona.id.to_string(),
            name: persona.display_name.to_string(),
            description: persona.description.to_string(),
            capabilities: persona.capabilities.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AgentListOutput {
    pub agents: Vec<PersonaOutput>,
    pub total: usize,
}

impl CommandOutput for AgentListOutput {
    fn to_human(&self) -> String {
        format!(
            "{} governance agents:\n{}",
            self.total,
            TableFormatter::new().format_personas(persona_registry::all())
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn list() -> AgentListOutput {
    let agents: Vec<PersonaOutput> = persona_registry::all().map(PersonaOutput::from).collect();
    AgentListOutput {
        total: agents.len(),
        agents,
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    output(&list(), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_json_shape() {
        let listing = list();
        assert_eq!(listing.total, 5);

        let json = listing.to_json();
        assert_eq!(json["agents"][0]["id"], "policy");
        assert_eq!(json["agents"][4]["name"], "Data Privacy Agent");
        assert_eq!(json["agents"][1]["capabilities"].as_array().unwrap().len(), 4);
    }
}
