//! `citegen schema <type>`

use anyhow::Result;
use citegen_core::{SourceSchema, get_schema};

pub fn execute(source_type: &str, json: bool) -> Result<()> {
    let schema = get_schema(source_type)?;
    if json {
        println!("{}", serde_json::to_string_pretty(schema)?);
    } else {
        print!("{}", render(schema));
    }
    Ok(())
}

/// One line per field: id, label, whether it is required and an example.
fn render(schema: &SourceSchema) -> String {
    let width = schema.fields.iter().map(|f| f.id.len()).max().unwrap_or(0);
    let mut out = format!("{} ({})\n", schema.display_name, schema.source_type);
    for field in schema.fields {
        let required = if field.required { "required" } else { "optional" };
        out.push_str(&format!(
            "  {:<width$}  {}  {}  e.g. {}\n",
            field.id, required, field.label, field.placeholder
        ));
    }
    out
}
