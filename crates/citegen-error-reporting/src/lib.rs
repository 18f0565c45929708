//! Error reporting and diagnostic messages for citegen.
//!
//! Errors raised by the citation engine are user-correctable (a form field
//! was left blank, a style name was mistyped), so they are rendered as
//! structured, tidyverse-style messages rather than bare strings:
//!
//! ```text
//! Error [C-1-2]: Missing Required Field
//! The "Book Title" field must be filled in
//! ✖ Field `title` is empty
//! ? Fill in "Book Title" and generate the citation again?
//! ```
//!
//! - [`DiagnosticMessage`]: the message structure
//! - [`DiagnosticMessageBuilder`]: builder with `.problem()`, `.add_detail()`, `.add_hint()`
//! - [`catalog`]: stable error codes (`C-<subsystem>-<n>`) with titles and docs links
//!
//! # Example
//!
//! ```
//! use citegen_error_reporting::DiagnosticMessageBuilder;
//!
//! let msg = DiagnosticMessageBuilder::error("Unknown Source Type")
//!     .with_code("C-1-1")
//!     .problem("`podcast` is not a registered source type")
//!     .add_hint("Run `citegen types` to list the available source types?")
//!     .build();
//!
//! assert!(msg.to_text().contains("[C-1-1]"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_docs_url, get_error_info, get_subsystem};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
