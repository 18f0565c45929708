//! Command implementations for the citegen CLI
//!
//! Each command module handles the CLI interface and delegates to
//! citegen-core for the actual work.

pub mod cite;
pub mod identify;
pub mod schema;
pub mod styles;
pub mod types;

use citegen_core::lookup::ResolveError;
use citegen_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder, MessageContent};

use crate::error::CliError;

/// The diagnostic for a command failure.
///
/// Errors with a catalog code keep their own diagnostic; anything else is
/// wrapped with its context chain as the problem statement.
pub fn diagnostic(err: &anyhow::Error) -> DiagnosticMessage {
    if let Some(e) = err.downcast_ref::<citegen_core::Error>() {
        e.to_diagnostic()
    } else if let Some(e) = err.downcast_ref::<ResolveError>() {
        e.to_diagnostic()
    } else if let Some(e) = err.downcast_ref::<CliError>() {
        e.to_diagnostic()
    } else {
        DiagnosticMessageBuilder::error("Command Failed")
            .problem(MessageContent::Plain(format!("{err:#}")))
            .build()
    }
}

/// Render a command failure for stderr, as text or as a JSON object.
pub fn report(err: &anyhow::Error, json: bool) -> String {
    let diagnostic = diagnostic(err);
    if !json {
        return diagnostic.to_text();
    }
    let mut value = diagnostic.to_json();
    if let (Some(url), Some(object)) = (diagnostic.docs_url(), value.as_object_mut()) {
        object.insert("docs_url".to_string(), url.into());
    }
    format!("{value:#}")
}
