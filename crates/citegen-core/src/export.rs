//! Plain-text export of generated citations.
//!
//! Writing the blob somewhere (a file, the clipboard) is the caller's job.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::source_type::SourceType;
use crate::style::CitationStyle;

const HEADER: &str = "Academic Citation Generator Export";

/// A batch of full citations with the context they were generated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub style: CitationStyle,
    pub source_type: SourceType,
    pub generated_at: NaiveDateTime,
    pub citations: Vec<String>,
}

impl ExportDocument {
    pub fn new(
        style: CitationStyle,
        source_type: SourceType,
        generated_at: NaiveDateTime,
        citations: Vec<String>,
    ) -> Self {
        Self {
            style,
            source_type,
            generated_at,
            citations,
        }
    }

    /// Render the export file contents.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use citegen_core::export::ExportDocument;
    /// use citegen_core::{CitationStyle, SourceType};
    ///
    /// let at = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
    /// let doc = ExportDocument::new(
    ///     CitationStyle::Mla,
    ///     SourceType::Book,
    ///     at,
    ///     vec!["First.".to_string(), "Second.".to_string()],
    /// );
    /// assert_eq!(
    ///     doc.render(),
    ///     "Academic Citation Generator Export\n\
    ///      Generated on: 2024-03-01 09:30:00\n\
    ///      Citation Style: MLA (9th Edition)\n\
    ///      Source Type: Book\n\
    ///      \n\
    ///      First.\n\
    ///      \n\
    ///      Second."
    /// );
    /// ```
    pub fn render(&self) -> String {
        format!(
            "{HEADER}\nGenerated on: {}\nCitation Style: {}\nSource Type: {}\n\n{}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            self.style.display_name(),
            self.source_type.schema().display_name,
            join_citations(&self.citations),
        )
    }

    /// The default file name, dated by generation time.
    pub fn file_name(&self) -> String {
        export_file_name(self.generated_at.date())
    }
}

/// `citations_YYYY-MM-DD.txt`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("citations_{}.txt", date.format("%Y-%m-%d"))
}

/// Citations separated by a blank line.
pub fn join_citations<S: AsRef<str>>(citations: &[S]) -> String {
    citations
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            export_file_name(NaiveDate::from_ymd_opt(2023, 1, 5).unwrap()),
            "citations_2023-01-05.txt"
        );
        let doc = ExportDocument::new(CitationStyle::Apa, SourceType::Journal, at(), vec![]);
        assert_eq!(doc.file_name(), "citations_2023-11-07.txt");
    }

    #[test]
    fn test_join_citations() {
        assert_eq!(join_citations(&["a", "b", "c"]), "a\n\nb\n\nc");
        assert_eq!(join_citations::<&str>(&[]), "");
    }

    #[test]
    fn test_render_header() {
        let doc = ExportDocument::new(
            CitationStyle::Ieee,
            SourceType::AudioVisual,
            at(),
            vec!["Only.".to_string()],
        );
        insta::assert_snapshot!(doc.render(), @r"
        Academic Citation Generator Export
        Generated on: 2023-11-07 14:05:09
        Citation Style: IEEE
        Source Type: Audio/Visual Material

        Only.
        ");
    }
}
