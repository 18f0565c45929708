//! Citation generation engine.
//!
//! Given a source type (journal article, book, website, ...) and the field
//! values collected for it, this crate produces a full reference-list entry
//! and a short in-text reference in one of five styles: APA, MLA, Chicago,
//! Harvard and IEEE.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────────────┐
//! │ source_type  │──▶│   validate   │──▶│            engine            │
//! │ (schemas)    │   │ (required)   │   │ (style, type) → formatter    │
//! └──────────────┘   └──────────────┘   └──────────────┬───────────────┘
//!                                                      │
//!                          ┌───────────────────────────┼─────────────┐
//!                          ▼                           ▼             ▼
//!                    styles::{apa, mla, ...}     names, date      output
//! ```
//!
//! Everything here is a pure function of its arguments; there is no
//! session state and no I/O. Identifier lookup ([`lookup`]) is an async
//! seam for callers that want to pre-fill values from a DOI or ISBN.
//!
//! # Example
//!
//! ```
//! use citegen_core::{generate_citation, CitationStyle, FieldValues, SourceType};
//!
//! let values = FieldValues::new()
//!     .with("author", "Newport, C.")
//!     .with("year", "2016")
//!     .with("title", "Deep Work")
//!     .with("publisher", "Grand Central");
//!
//! let citation = generate_citation(CitationStyle::Apa, SourceType::Book, &values)?;
//! assert_eq!(citation.full, "Newport, C. (2016). Deep Work. Grand Central.");
//! assert_eq!(citation.in_text, "(Newport, 2016)");
//! # Ok::<(), citegen_core::Error>(())
//! ```

pub mod date;
pub mod engine;
pub mod error;
pub mod export;
pub mod fields;
pub mod lookup;
pub mod names;
pub mod output;
pub mod source_type;
pub mod style;
pub mod validate;

mod styles;

// Re-export main types
pub use engine::{Citation, generate_citation, generate_full_citation, generate_in_text_citation};
pub use error::{Error, Result};
pub use fields::FieldValues;
pub use source_type::{
    FieldSpec, SourceSchema, SourceType, ValueKind, get_schema, list_source_types,
};
pub use style::CitationStyle;
pub use styles::{ANONYMOUS, NO_DATE, normalize_doi};
pub use validate::validate;
