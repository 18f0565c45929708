//! Identifier classification and the resolver seam.
//!
//! A DOI, ISBN, ISSN or URL typed into a search box is classified here,
//! which also suggests the source type to collect. Fetching metadata for it
//! is left to an [`IdentifierResolver`]; no network resolver ships with this
//! crate. Resolved candidates are plain [`FieldValues`] that go through the
//! normal validation and formatting path.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use citegen_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::fields::FieldValues;
use crate::source_type::SourceType;
use crate::styles::normalize_doi;

static ISBN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{9}[\dXx]$|^\d{13}$").unwrap());
static ISSN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{3}[\dXx]$").unwrap());

/// What kind of identifier a search string is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Doi,
    Isbn,
    Issn,
    Url,
}

impl IdentifierKind {
    /// The source type an identifier of this kind usually names.
    pub fn source_type(self) -> SourceType {
        match self {
            IdentifierKind::Doi | IdentifierKind::Issn => SourceType::Journal,
            IdentifierKind::Isbn => SourceType::Book,
            IdentifierKind::Url => SourceType::Website,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdentifierKind::Doi => "DOI",
            IdentifierKind::Isbn => "ISBN",
            IdentifierKind::Issn => "ISSN",
            IdentifierKind::Url => "URL",
        })
    }
}

/// A classified, normalized identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub kind: IdentifierKind,
    pub value: String,
}

/// Classify a search string.
///
/// Checks run in order: DOI (`doi.org` link or a `10.` prefix), ISBN (10 or
/// 13 digits, hyphens and spaces ignored, or the word `isbn`), ISSN
/// (`NNNN-NNNN` or the word `issn`), then URL (anything containing `http`).
/// Returns `None` for anything else, and for a bare keyword such as `isbn`
/// that leaves no value behind.
///
/// ```
/// use citegen_core::lookup::{classify_identifier, IdentifierKind};
///
/// let id = classify_identifier("https://doi.org/10.1000/xyz").unwrap();
/// assert_eq!(id.kind, IdentifierKind::Doi);
/// assert_eq!(id.value, "10.1000/xyz");
///
/// assert_eq!(classify_identifier("ISBN 0-306-40615-2").unwrap().value, "0306406152");
/// assert!(classify_identifier("hello").is_none());
/// ```
pub fn classify_identifier(input: &str) -> Option<Identifier> {
    classify(input.trim()).filter(|identifier| !identifier.value.is_empty())
}

fn classify(input: &str) -> Option<Identifier> {
    let lower = input.to_ascii_lowercase();

    if lower.contains("doi.org") || lower.starts_with("10.") || lower.starts_with("doi:") {
        return Some(Identifier {
            kind: IdentifierKind::Doi,
            value: normalize_doi(input),
        });
    }

    let isbn = compact(&strip_word(input, "isbn"));
    if ISBN_DIGITS.is_match(&isbn) || lower.contains("isbn") {
        return Some(Identifier {
            kind: IdentifierKind::Isbn,
            value: isbn,
        });
    }

    let issn = strip_word(input, "issn");
    if ISSN.is_match(&issn) || lower.contains("issn") {
        return Some(Identifier {
            kind: IdentifierKind::Issn,
            value: issn,
        });
    }

    if lower.contains("http") {
        return Some(Identifier {
            kind: IdentifierKind::Url,
            value: input.to_string(),
        });
    }

    None
}

/// Remove a keyword (any case) and a following `:`.
fn strip_word(input: &str, word: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let stripped = match lower.find(word) {
        Some(at) => format!("{}{}", &input[..at], &input[at + word.len()..]),
        None => input.to_string(),
    };
    stripped.trim().trim_start_matches(':').trim().to_string()
}

fn compact(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '-' | ' ')).collect()
}

/// One record a resolver found for an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupCandidate {
    pub source_type: SourceType,
    pub identifier: String,
    pub values: FieldValues,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The input is not a DOI, ISBN, ISSN or URL.
    #[error("Unrecognized identifier '{input}'")]
    Unrecognized { input: String },

    #[error("No record found for {kind} '{value}'")]
    NotFound { kind: IdentifierKind, value: String },

    /// The backing service failed.
    #[error("Lookup failed: {message}")]
    Unavailable { message: String },
}

impl ResolveError {
    /// Convert this error to a DiagnosticMessage (C-4-* codes).
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            ResolveError::Unrecognized { input } => {
                DiagnosticMessageBuilder::error("Unrecognized Identifier")
                    .with_code("C-4-1")
                    .problem(format!("`{}` is not a DOI, ISBN, ISSN or URL", input))
                    .add_hint("DOIs start with `10.`; ISBNs have 10 or 13 digits?")
                    .build()
            }
            ResolveError::NotFound { kind, value } => {
                DiagnosticMessageBuilder::warning("Identifier Not Found")
                    .with_code("C-4-2")
                    .problem(format!("No record was found for {} `{}`", kind, value))
                    .add_hint("Enter the details by hand instead?")
                    .build()
            }
            ResolveError::Unavailable { message } => {
                DiagnosticMessageBuilder::error("Lookup Failed")
                    .with_code("C-4-3")
                    .problem("The lookup service could not be reached")
                    .add_detail(message.clone())
                    .build()
            }
        }
    }
}

/// Fetches bibliographic records for an identifier.
///
/// Implementations must be `Send + Sync` so one resolver can serve
/// concurrent requests. An empty result is reported as
/// [`ResolveError::NotFound`], never as `Ok(vec![])`.
#[async_trait]
pub trait IdentifierResolver: Send + Sync {
    async fn resolve(&self, identifier: &Identifier) -> Result<Vec<LookupCandidate>, ResolveError>;
}

/// A resolver backed by an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    records: HashMap<Identifier, Vec<LookupCandidate>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate for `identifier`.
    ///
    /// The candidate's source type defaults to the one the identifier kind
    /// suggests.
    pub fn with_record(mut self, identifier: Identifier, values: FieldValues) -> Self {
        let candidate = LookupCandidate {
            source_type: identifier.kind.source_type(),
            identifier: identifier.value.clone(),
            values,
        };
        self.records.entry(identifier).or_default().push(candidate);
        self
    }
}

#[async_trait]
impl IdentifierResolver for StaticResolver {
    async fn resolve(&self, identifier: &Identifier) -> Result<Vec<LookupCandidate>, ResolveError> {
        match self.records.get(identifier) {
            Some(candidates) if !candidates.is_empty() => Ok(candidates.clone()),
            _ => {
                tracing::debug!(kind = %identifier.kind, value = %identifier.value, "no record");
                Err(ResolveError::NotFound {
                    kind: identifier.kind,
                    value: identifier.value.clone(),
                })
            }
        }
    }
}
