//! Error types for citation generation.

use citegen_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use thiserror::Error;

/// Result type alias for citegen-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while looking up schemas or generating citations.
///
/// None of these are fatal: the caller is expected to correct the input and
/// try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tag names no registered source type.
    #[error("Unknown source type '{tag}'")]
    UnknownSourceType { tag: String },

    /// The tag names no supported citation style.
    #[error("Unknown citation style '{tag}'")]
    UnknownStyle { tag: String },

    /// A required field is empty. Always the first such field in schema order.
    #[error("Missing required field '{field_id}' ({label})")]
    MissingRequiredField {
        field_id: &'static str,
        label: &'static str,
    },

    /// A date string could not be parsed as a calendar date.
    #[error("Malformed date '{value}'")]
    MalformedDate { value: String },
}

impl Error {
    /// Convert this error to a DiagnosticMessage.
    ///
    /// Registry and validation errors use C-1-* codes, dates use C-2-*.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            Error::UnknownSourceType { tag } => {
                DiagnosticMessageBuilder::error("Unknown Source Type")
                    .with_code("C-1-1")
                    .problem(format!("`{}` is not a registered source type", tag))
                    .add_hint("Run `citegen types` to list the available source types?")
                    .build()
            }

            Error::MissingRequiredField { field_id, label } => {
                DiagnosticMessageBuilder::error("Missing Required Field")
                    .with_code("C-1-2")
                    .problem(format!("The \"{}\" field must be filled in", label))
                    .add_detail(format!("Field `{}` is empty", field_id))
                    .add_hint(format!(
                        "Fill in \"{}\" and generate the citation again?",
                        label
                    ))
                    .build()
            }

            Error::UnknownStyle { tag } => DiagnosticMessageBuilder::error("Unknown Citation Style")
                .with_code("C-1-3")
                .problem(format!("`{}` is not a supported citation style", tag))
                .add_info("Supported styles are apa, mla, chicago, harvard and ieee")
                .build(),

            Error::MalformedDate { value } => DiagnosticMessageBuilder::warning("Malformed Date")
                .with_code("C-2-1")
                .problem(format!("`{}` is not a recognized calendar date", value))
                .add_info("The value is used as written")
                .add_hint("Dates should look like 2023-05-15?")
                .build(),
        }
    }
}
