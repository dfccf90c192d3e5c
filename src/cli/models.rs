use anyhow::Result;
use clap::Args;

use crate::models::{self, ModelDescriptor};

/// List the available models
#[derive(Args, Debug)]
pub struct ModelsCommand {
    /// Print the descriptors as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl ModelsCommand {
    pub fn execute(&self) -> Result<()> {
        let output = if self.json {
            serde_json::to_string_pretty(models::all())?
        } else {
            format_table(models::all())
        };
        println!("{}", output);
        Ok(())
    }
}

fn format_table(models: &[ModelDescriptor]) -> String {
    let id_width = models.iter().map(|m| m.id.len()).max().unwrap_or(2).max(2);
    let name_width = models.iter().map(|m| m.name.len()).max().unwrap_or(4).max(4);

    let mut lines = vec![format!(
        "{:<id_width$}  {:<name_width$}  CAPABILITIES",
        "ID", "NAME"
    )];
    lines.extend(models.iter().map(|model| {
        format!(
            "{:<id_width$}  {:<name_width$}  {}",
            model.id,
            model.name,
            model.capabilities.join(", ")
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_model() {
        let table = format_table(models::all());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("llama4-maverick  Llama 4 Maverick"));
        assert!(lines[3].ends_with("Enterprise Solutions, Multi-step Tasks, Advanced Analytics"));
    }

    #[test]
    fn test_json_listing() {
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string_pretty(models::all()).unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[1]["name"], "Shisa V2");
    }
}
