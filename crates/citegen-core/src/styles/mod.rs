//! Per-style citation templates.
//!
//! Each style module exports a table of full-citation formatters keyed by
//! source type and one in-text formatter. The engine assembles the tables
//! into its dispatch map; source types a style has no entry for get the
//! engine's placeholder.

pub(crate) mod apa;
pub(crate) mod chicago;
pub(crate) mod harvard;
pub(crate) mod ieee;
pub(crate) mod mla;

use crate::date::{self, DateFormat};
use crate::fields::FieldValues;
use crate::names;
use crate::output::Output;
use crate::source_type::SourceType;
use crate::style::CitationStyle;

/// A full-citation template.
pub(crate) type FullFormatter = fn(&Source<'_>) -> String;

/// Year text used when a source carries no year.
pub const NO_DATE: &str = "n.d.";

/// Stand-in for the creator when a source has none.
pub const ANONYMOUS: &str = "\"Title\"";

/// The values of one request, seen through one style.
pub(crate) struct Source<'a> {
    pub style: CitationStyle,
    pub source_type: SourceType,
    pub values: &'a FieldValues,
}

impl<'a> Source<'a> {
    pub fn new(style: CitationStyle, source_type: SourceType, values: &'a FieldValues) -> Self {
        Self {
            style,
            source_type,
            values,
        }
    }

    pub fn get(&self, id: &str) -> &'a str {
        self.values.get(id)
    }

    /// `prefix + value + suffix` when the field is filled in.
    pub fn opt(&self, prefix: &str, id: &str, suffix: &str) -> Output {
        Output::affixed(prefix, self.get(id), suffix)
    }

    /// The raw creator string (`author`, `inventor`, ...).
    pub fn creators(&self) -> &'a str {
        self.get(self.source_type.creator_field())
    }

    /// Creators joined APA-style.
    pub fn creators_apa(&self) -> String {
        names::format_authors_apa(self.creators())
    }

    pub fn year(&self) -> &'a str {
        self.values.non_empty("year").unwrap_or(NO_DATE)
    }

    /// The DOI in this style's notation.
    pub fn doi(&self) -> Option<String> {
        self.values
            .non_empty("doi")
            .map(|doi| self.style.doi(&normalize_doi(doi)))
    }

    /// `prefix + DOI + suffix` when a DOI is present.
    pub fn opt_doi(&self, prefix: &str, suffix: &str) -> Output {
        match self.doi() {
            Some(doi) => Output::literal(format!("{prefix}{doi}{suffix}")),
            None => Output::Null,
        }
    }

    /// The DOI when present, else the URL, with affixes.
    pub fn doi_or_url(&self, prefix: &str, suffix: &str) -> Output {
        match self.doi() {
            Some(doi) => Output::literal(format!("{prefix}{doi}{suffix}")),
            None => self.opt(prefix, "url", suffix),
        }
    }

    pub fn date(&self, id: &str, format: DateFormat) -> String {
        date::format_date(self.get(id), format)
    }

    /// The long form of a date field, or the year when the date is absent.
    pub fn date_or_year(&self, id: &str) -> String {
        match self.values.non_empty(id) {
            Some(_) => self.date(id, DateFormat::Long),
            None => self.year().to_string(),
        }
    }

    /// `Month Day` of a date field (`May 15`), when it parses.
    pub fn month_day(&self, id: &str) -> Option<String> {
        let value = self.values.non_empty(id)?;
        date::parse_date(value).ok()?;
        let long = date::format_date(value, DateFormat::Long);
        let (month_day, _) = long.rsplit_once(", ")?;
        Some(month_day.to_string())
    }

    /// `Place: Publisher`, either part optional.
    pub fn place_publisher(&self, place_id: &str, publisher_id: &str) -> Output {
        Output::join(
            vec![Output::from(self.get(place_id)), Output::from(self.get(publisher_id))],
            ": ",
        )
    }
}

/// Strip resolver prefixes so only the bare DOI remains.
pub fn normalize_doi(doi: &str) -> String {
    const PREFIXES: [&str; 5] = [
        "https://doi.org/",
        "http://doi.org/",
        "https://dx.doi.org/",
        "http://dx.doi.org/",
        "doi:",
    ];
    let doi = doi.trim();
    PREFIXES
        .iter()
        .find_map(|prefix| {
            doi.get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| doi[prefix.len()..].trim())
        })
        .unwrap_or(doi)
        .to_string()
}

/// Terminate a segment with a period unless it already ends in
/// sentence punctuation. Empty text stays empty.
pub(crate) fn sentence(text: &str) -> String {
    let text = text.trim_end();
    if text.is_empty() || text.ends_with(['.', '?', '!']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// `sentence` over a rendered output.
pub(crate) fn sentence_of(output: Output) -> Output {
    Output::literal(sentence(&output.render()))
}

/// A title in double quotes with trailing punctuation inside the quotes.
///
/// Titles that already end in `?` or `!` keep their own mark. A blank title
/// yields an empty string, so an optional title drops out with its affixes.
pub(crate) fn quoted(title: &str, punct: &str) -> String {
    let title = title.trim_end();
    if title.is_empty() {
        String::new()
    } else if title.ends_with(['?', '!']) || (punct == "." && title.ends_with('.')) {
        format!("\"{title}\"")
    } else {
        format!("\"{title}{punct}\"")
    }
}

/// The first author's surname, or the anonymous stand-in.
pub(crate) fn lead_surname<'a>(source: &Source<'a>) -> &'a str {
    names::first_surname(source.creators()).unwrap_or(ANONYMOUS)
}

/// The page a parenthetical points at: the start of a page range.
pub(crate) fn first_page<'a>(source: &Source<'a>) -> Option<&'a str> {
    source
        .values
        .non_empty("pages")
        .and_then(|pages| pages.split('-').next())
        .map(str::trim)
        .filter(|page| !page.is_empty())
}
