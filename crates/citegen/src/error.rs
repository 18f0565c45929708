//! Errors raised by the command-line layer itself.

use std::path::PathBuf;

use citegen_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// A `-f` argument without an `=`, or with an empty id.
    #[error("Malformed field argument '{arg}'")]
    MalformedFieldArg { arg: String },

    #[error("Failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },
}

impl CliError {
    /// Convert this error to a DiagnosticMessage (C-3-* codes).
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            CliError::MalformedFieldArg { arg } => {
                DiagnosticMessageBuilder::error("Malformed Field Argument")
                    .with_code("C-3-1")
                    .problem("Field arguments must look like `id=value`")
                    .add_detail(format!("Got `{}`", arg))
                    .add_hint("Try `-f title=\"Deep Work\"`?")
                    .build()
            }
            CliError::ConfigRead { path, source } => {
                DiagnosticMessageBuilder::error("Invalid Configuration")
                    .with_code("C-3-2")
                    .problem(format!("Could not read `{}`", path.display()))
                    .add_detail(source.to_string())
                    .build()
            }
            CliError::ConfigParse { path, message } => {
                DiagnosticMessageBuilder::error("Invalid Configuration")
                    .with_code("C-3-2")
                    .problem(format!("`{}` is not a valid citegen.toml", path.display()))
                    .add_detail(message.clone())
                    .build()
            }
        }
    }
}
