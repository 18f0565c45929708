//! Citation generation.
//!
//! Full citations are looked up in a table keyed by `(style, source type)`.
//! A pair with no template renders a placeholder naming both, so a newly
//! registered source type degrades instead of failing. In-text citations
//! are per style only.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::Result;
use crate::fields::FieldValues;
use crate::source_type::SourceType;
use crate::style::CitationStyle;
use crate::styles::{self, FullFormatter, Source};
use crate::validate::validate;

static DISPATCH: Lazy<HashMap<(CitationStyle, SourceType), FullFormatter>> = Lazy::new(|| {
    let tables = [
        (CitationStyle::Apa, styles::apa::FULL),
        (CitationStyle::Mla, styles::mla::FULL),
        (CitationStyle::Chicago, styles::chicago::FULL),
        (CitationStyle::Harvard, styles::harvard::FULL),
        (CitationStyle::Ieee, styles::ieee::FULL),
    ];
    tables
        .into_iter()
        .flat_map(|(style, table)| {
            table
                .iter()
                .map(move |&(source_type, formatter)| ((style, source_type), formatter))
        })
        .collect()
});

/// The two renderings of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    /// Reference-list entry.
    pub full: String,
    /// Parenthetical or bracketed reference used in running text.
    pub in_text: String,
}

/// Validate `values` and render both citation forms.
///
/// ```
/// use citegen_core::{generate_citation, CitationStyle, FieldValues, SourceType};
///
/// let values = FieldValues::new()
///     .with("author", "Smith, J. & Doe, J.")
///     .with("year", "2023")
///     .with("title", "Example")
///     .with("journal", "Journal of Examples");
/// let citation = generate_citation(CitationStyle::Apa, SourceType::Journal, &values).unwrap();
/// assert_eq!(citation.in_text, "(Smith & Doe, 2023)");
/// ```
pub fn generate_citation(
    style: CitationStyle,
    source_type: SourceType,
    values: &FieldValues,
) -> Result<Citation> {
    validate(source_type, values)?;
    Ok(Citation {
        full: generate_full_citation(style, source_type, values),
        in_text: generate_in_text_citation(style, source_type, values),
    })
}

/// Render the reference-list entry without validating.
pub fn generate_full_citation(
    style: CitationStyle,
    source_type: SourceType,
    values: &FieldValues,
) -> String {
    match DISPATCH.get(&(style, source_type)) {
        Some(formatter) => formatter(&Source::new(style, source_type, values)),
        None => {
            tracing::debug!(%style, %source_type, "no template, using placeholder");
            format!(
                "{} citation for {} would appear here with the provided data.",
                style.name(),
                source_type.tag()
            )
        }
    }
}

/// Render the in-text reference without validating.
pub fn generate_in_text_citation(
    style: CitationStyle,
    source_type: SourceType,
    values: &FieldValues,
) -> String {
    let source = Source::new(style, source_type, values);
    match style {
        CitationStyle::Apa => styles::apa::in_text(&source),
        CitationStyle::Mla => styles::mla::in_text(&source),
        CitationStyle::Chicago => styles::chicago::in_text(&source),
        CitationStyle::Harvard => styles::harvard::in_text(&source),
        CitationStyle::Ieee => styles::ieee::in_text(&source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn journal() -> FieldValues {
        FieldValues::new()
            .with("author", "Smith, J. & Doe, J.")
            .with("year", "2023")
            .with("title", "Deep learning for citation parsing")
            .with("journal", "Journal of Documentation")
            .with("volume", "79")
            .with("issue", "4")
            .with("pages", "812-830")
            .with("doi", "10.1108/JD-01-2023-0001")
    }

    fn book() -> FieldValues {
        FieldValues::new()
            .with("author", "Newport, C.")
            .with("year", "2016")
            .with("title", "Deep Work")
            .with("publisher", "Grand Central")
    }

    #[test]
    fn test_every_concrete_pair_has_a_template() {
        for style in CitationStyle::ALL {
            for source_type in SourceType::ALL {
                let expected = source_type != SourceType::Other;
                assert_eq!(
                    DISPATCH.contains_key(&(style, source_type)),
                    expected,
                    "{style}/{source_type}"
                );
            }
        }
    }

    #[test]
    fn test_other_uses_placeholder() {
        let values = FieldValues::new().with("title", "Leaflet");
        assert_eq!(
            generate_full_citation(CitationStyle::Mla, SourceType::Other, &values),
            "MLA citation for other would appear here with the provided data."
        );
    }

    #[test]
    fn test_apa_journal() {
        assert_eq!(
            generate_full_citation(CitationStyle::Apa, SourceType::Journal, &journal()),
            "Smith, J., & Doe, J. (2023). Deep learning for citation parsing. \
             Journal of Documentation, 79(4), 812-830. https://doi.org/10.1108/JD-01-2023-0001"
        );
    }

    #[test]
    fn test_mla_journal() {
        assert_eq!(
            generate_full_citation(CitationStyle::Mla, SourceType::Journal, &journal()),
            "Smith, J. & Doe, J. \"Deep learning for citation parsing.\" \
             Journal of Documentation, vol. 79, no. 4, 2023, pp. 812-830. \
             doi:10.1108/JD-01-2023-0001."
        );
    }

    #[test]
    fn test_chicago_journal() {
        assert_eq!(
            generate_full_citation(CitationStyle::Chicago, SourceType::Journal, &journal()),
            "Smith, J. & Doe, J., \"Deep learning for citation parsing,\" \
             Journal of Documentation 79, no. 4 (2023): 812-830. \
             https://doi.org/10.1108/JD-01-2023-0001."
        );
    }

    #[test]
    fn test_harvard_journal() {
        assert_eq!(
            generate_full_citation(CitationStyle::Harvard, SourceType::Journal, &journal()),
            "Smith, J. & Doe, J. (2023) 'Deep learning for citation parsing', \
             Journal of Documentation, 79(4), pp. 812-830. \
             Available at: https://doi.org/10.1108/JD-01-2023-0001."
        );
    }

    #[test]
    fn test_ieee_journal() {
        assert_eq!(
            generate_full_citation(CitationStyle::Ieee, SourceType::Journal, &journal()),
            "Smith, J. & Doe, J., \"Deep learning for citation parsing,\" \
             Journal of Documentation, vol. 79, no. 4, pp. 812-830, 2023. \
             doi:10.1108/JD-01-2023-0001."
        );
    }

    #[test]
    fn test_in_text_per_style() {
        let values = journal();
        let in_text = |style| generate_in_text_citation(style, SourceType::Journal, &values);
        assert_eq!(in_text(CitationStyle::Apa), "(Smith & Doe, 2023)");
        assert_eq!(in_text(CitationStyle::Mla), "(Smith 812)");
        assert_eq!(in_text(CitationStyle::Chicago), "(Smith 2023, 812)");
        assert_eq!(in_text(CitationStyle::Harvard), "(Smith 2023)");
        assert_eq!(in_text(CitationStyle::Ieee), "[S23]");
    }

    #[test]
    fn test_in_text_without_pages() {
        let values = book();
        assert_eq!(
            generate_in_text_citation(CitationStyle::Mla, SourceType::Book, &values),
            "(Newport)"
        );
        assert_eq!(
            generate_in_text_citation(CitationStyle::Chicago, SourceType::Book, &values),
            "(Newport 2016)"
        );
    }

    #[test]
    fn test_in_text_without_creator_degrades_in_every_style() {
        let values = FieldValues::new()
            .with("title", "Home")
            .with("site", "Example")
            .with("url", "https://example.com");
        let in_text =
            |style| generate_in_text_citation(style, SourceType::Website, &values);
        assert_eq!(in_text(CitationStyle::Apa), "(\"Title\", n.d.)");
        assert_eq!(in_text(CitationStyle::Mla), "(\"Title\")");
        assert_eq!(in_text(CitationStyle::Chicago), "(\"Title\" n.d.)");
        assert_eq!(in_text(CitationStyle::Harvard), "(\"Title\" n.d.)");
        assert_eq!(in_text(CitationStyle::Ieee), "[T]");
    }

    #[test]
    fn test_generate_citation_validates_first() {
        let values = FieldValues::new()
            .with("title", "")
            .with("publisher", "X")
            .with("year", "2020")
            .with("author", "Y");
        assert_eq!(
            generate_citation(CitationStyle::Apa, SourceType::Book, &values),
            Err(Error::MissingRequiredField {
                field_id: "title",
                label: "Book Title",
            })
        );
    }

    #[test]
    fn test_generate_citation_book() {
        let citation = generate_citation(CitationStyle::Apa, SourceType::Book, &book()).unwrap();
        assert_eq!(citation.full, "Newport, C. (2016). Deep Work. Grand Central.");
        assert_eq!(citation.in_text, "(Newport, 2016)");
    }
}
