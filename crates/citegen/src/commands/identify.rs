//! `citegen identify <identifier>`

use anyhow::Result;
use citegen_core::lookup::{ResolveError, classify_identifier};
use serde_json::json;

pub fn execute(input: &str, json: bool) -> Result<()> {
    let identifier = classify_identifier(input).ok_or_else(|| ResolveError::Unrecognized {
        input: input.trim().to_string(),
    })?;
    let source_type = identifier.kind.source_type();

    if json {
        let output = json!({
            "kind": identifier.kind,
            "value": identifier.value,
            "source_type": source_type,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}: {}", identifier.kind, identifier.value);
        println!(
            "Suggested source type: {} ({})",
            source_type,
            source_type.schema().display_name
        );
    }
    Ok(())
}
