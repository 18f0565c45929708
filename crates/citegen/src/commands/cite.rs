//! `citegen cite`
//!
//! Field values come from an optional JSON file first, then from `-f`
//! arguments in order. Repeating an id adds another entry to that field, so
//! `-f author="Smith, J." -f author="Doe, J."` yields two authors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use citegen_core::export::ExportDocument;
use citegen_core::{CitationStyle, FieldValues, SourceType, generate_citation};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::CliError;

/// Arguments for the cite command
#[derive(Debug)]
pub struct CiteArgs {
    pub source_type: String,
    pub style: Option<String>,
    pub fields: Vec<String>,
    pub input: Option<PathBuf>,
    pub json: bool,
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct CiteOutput<'a> {
    style: CitationStyle,
    source_type: SourceType,
    full: &'a str,
    in_text: &'a str,
}

/// Execute the cite command
pub fn execute(args: CiteArgs, config: &Config) -> Result<()> {
    let source_type: SourceType = args.source_type.parse()?;
    let style = match &args.style {
        Some(tag) => tag.parse::<CitationStyle>()?,
        None => config.default_style()?,
    };

    let mut values = match &args.input {
        Some(path) => read_input(path)?,
        None => FieldValues::new(),
    };
    for arg in &args.fields {
        let (id, value) = parse_field_arg(arg)?;
        values.push(id, value);
    }

    let citation = generate_citation(style, source_type, &values)?;

    if args.json || config.wants_json() {
        let output = CiteOutput {
            style,
            source_type,
            full: &citation.full,
            in_text: &citation.in_text,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Full citation:\n{}\n", citation.full);
        println!("In-text citation:\n{}", citation.in_text);
    }

    if let Some(target) = &args.export {
        let document = ExportDocument::new(
            style,
            source_type,
            Local::now().naive_local(),
            vec![citation.full.clone()],
        );
        let path = export_path(target, &document);
        fs::write(&path, document.render())
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        info!(path = %path.display(), "wrote export");
    }

    Ok(())
}

/// Split `id=value`. The value may itself contain `=`.
pub fn parse_field_arg(arg: &str) -> Result<(&str, &str), CliError> {
    match arg.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => Ok((id.trim(), value)),
        _ => Err(CliError::MalformedFieldArg {
            arg: arg.to_string(),
        }),
    }
}

fn read_input(path: &Path) -> Result<FieldValues> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid field values in {}", path.display()))
}

/// A directory target gets the default dated file name.
fn export_path(target: &Path, document: &ExportDocument) -> PathBuf {
    if target.is_dir() {
        target.join(document.file_name())
    } else {
        target.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_arg() {
        assert_eq!(parse_field_arg("title=Deep Work").unwrap(), ("title", "Deep Work"));
        assert_eq!(
            parse_field_arg("url=https://example.com/?a=b").unwrap(),
            ("url", "https://example.com/?a=b")
        );
        assert_eq!(parse_field_arg(" year =2020").unwrap(), ("year", "2020"));
        assert_eq!(parse_field_arg("pages=").unwrap(), ("pages", ""));
    }

    #[test]
    fn test_parse_field_arg_rejects_malformed() {
        assert!(matches!(
            parse_field_arg("title"),
            Err(CliError::MalformedFieldArg { .. })
        ));
        assert!(matches!(
            parse_field_arg("=value"),
            Err(CliError::MalformedFieldArg { .. })
        ));
    }
}
