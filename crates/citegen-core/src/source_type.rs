//! Source type registry.
//!
//! Every citable kind of work has a [`SourceSchema`]: the ordered list of
//! fields a collector must ask for and which of them are mandatory. The
//! tables here are static data; validation and the formatters read them,
//! they never keep their own copy.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A category of citable work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceType {
    Journal,
    Conference,
    Thesis,
    Website,
    Newspaper,
    Magazine,
    Report,
    Patent,
    Dataset,
    Interview,
    Manuscript,
    AudioVisual,
    Book,
    /// Catch-all for works that fit no other schema.
    Other,
}

impl SourceType {
    /// All source types in registry order.
    pub const ALL: [SourceType; 14] = [
        SourceType::Journal,
        SourceType::Conference,
        SourceType::Thesis,
        SourceType::Website,
        SourceType::Newspaper,
        SourceType::Magazine,
        SourceType::Report,
        SourceType::Patent,
        SourceType::Dataset,
        SourceType::Interview,
        SourceType::Manuscript,
        SourceType::AudioVisual,
        SourceType::Book,
        SourceType::Other,
    ];

    /// The stable tag used on the command line and in serialized input.
    pub fn tag(self) -> &'static str {
        match self {
            SourceType::Journal => "journal",
            SourceType::Conference => "conference",
            SourceType::Thesis => "thesis",
            SourceType::Website => "website",
            SourceType::Newspaper => "newspaper",
            SourceType::Magazine => "magazine",
            SourceType::Report => "report",
            SourceType::Patent => "patent",
            SourceType::Dataset => "dataset",
            SourceType::Interview => "interview",
            SourceType::Manuscript => "manuscript",
            SourceType::AudioVisual => "av",
            SourceType::Book => "book",
            SourceType::Other => "other",
        }
    }

    /// The field holding the work's creators.
    ///
    /// Most schemas call it `author`; patents, interviews and audio/visual
    /// works name their creators differently.
    pub fn creator_field(self) -> &'static str {
        match self {
            SourceType::Patent => "inventor",
            SourceType::Interview => "interviewee",
            SourceType::AudioVisual => "creator",
            _ => "author",
        }
    }

    /// The schema registered for this source type.
    pub fn schema(self) -> &'static SourceSchema {
        // SCHEMAS is laid out in `ALL` order.
        &SCHEMAS[self as usize]
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        SourceType::ALL
            .into_iter()
            .find(|source_type| source_type.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::UnknownSourceType {
                tag: tag.to_string(),
            })
    }
}

impl Serialize for SourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// The kind of value a field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Number,
    Date,
}

/// One input of a source schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Identifier, unique within its schema.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Example text shown in an empty input.
    pub placeholder: &'static str,
    pub value_kind: ValueKind,
    pub required: bool,
}

/// The ordered field schema of one source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSchema {
    pub source_type: SourceType,
    pub display_name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl SourceSchema {
    /// Look up a field by id.
    pub fn field(&self, id: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.id == id)
    }

    /// Required fields, in schema order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.required)
    }
}

/// Look up the schema for a source-type tag.
///
/// # Example
///
/// ```
/// use citegen_core::get_schema;
///
/// let schema = get_schema("book").unwrap();
/// assert_eq!(schema.display_name, "Book");
/// assert!(get_schema("podcast").is_err());
/// ```
pub fn get_schema(tag: &str) -> Result<&'static SourceSchema> {
    let source_type: SourceType = tag.parse()?;
    Ok(source_type.schema())
}

/// `(tag, display name)` for every registered source type, in registry order.
pub fn list_source_types() -> Vec<(&'static str, &'static str)> {
    SCHEMAS
        .iter()
        .map(|schema| (schema.source_type.tag(), schema.display_name))
        .collect()
}

const fn text(id: &'static str, label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec {
        id,
        label,
        placeholder,
        value_kind: ValueKind::Text,
        required: false,
    }
}

const fn year(label: &'static str) -> FieldSpec {
    FieldSpec {
        id: "year",
        label,
        placeholder: "2023",
        value_kind: ValueKind::Number,
        required: false,
    }
}

const fn date(id: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        id,
        label,
        placeholder: "YYYY-MM-DD",
        value_kind: ValueKind::Date,
        required: false,
    }
}

const fn required(spec: FieldSpec) -> FieldSpec {
    FieldSpec {
        required: true,
        ..spec
    }
}

const URL: FieldSpec = text("url", "URL", "https://...");
const DOI: FieldSpec = text("doi", "DOI", "10.xxxx/xxxxxx");
const PAGES: FieldSpec = text("pages", "Page Range", "45-60");
const LOCATION: FieldSpec = text("location", "Location", "City, Country");
const AUTHORS: FieldSpec = text("author", "Author(s)", "Lastname, F., & Lastname, F.");
const AUTHOR_OR_ORG: FieldSpec =
    text("author", "Author/Organization", "Lastname, F. or Organization");

static SCHEMAS: [SourceSchema; 14] = [
    SourceSchema {
        source_type: SourceType::Journal,
        display_name: "Journal Article",
        fields: &[
            required(AUTHORS),
            required(year("Year")),
            required(text("title", "Article Title", "Title of the article")),
            required(text("journal", "Journal Name", "Journal of Academic Studies")),
            text("volume", "Volume", "15"),
            text("issue", "Issue", "3"),
            PAGES,
            DOI,
        ],
    },
    SourceSchema {
        source_type: SourceType::Conference,
        display_name: "Conference Paper",
        fields: &[
            required(AUTHORS),
            required(year("Year")),
            required(text("title", "Paper Title", "Title of the conference paper")),
            required(text(
                "conference",
                "Conference Name",
                "International Conference on...",
            )),
            LOCATION,
            PAGES,
            DOI,
        ],
    },
    SourceSchema {
        source_type: SourceType::Thesis,
        display_name: "Thesis/Dissertation",
        fields: &[
            required(text("author", "Author", "Lastname, F.")),
            required(year("Year")),
            required(text("title", "Title", "Title of the thesis")),
            required(text("degree", "Degree Type", "PhD dissertation")),
            required(text("institution", "Institution", "University Name")),
            LOCATION,
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::Website,
        display_name: "Website",
        fields: &[
            AUTHOR_OR_ORG,
            year("Publication Year"),
            required(text("title", "Page Title", "Title of the webpage")),
            required(text("site", "Website Name", "Website Name")),
            required(URL),
            date("access", "Access Date"),
        ],
    },
    SourceSchema {
        source_type: SourceType::Newspaper,
        display_name: "Newspaper Article",
        fields: &[
            required(text("author", "Author(s)", "Lastname, F.")),
            required(year("Year")),
            required(text("title", "Article Title", "Title of the article")),
            required(text("newspaper", "Newspaper Name", "The Daily Times")),
            date("date", "Publication Date"),
            text("pages", "Page(s)", "A4"),
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::Magazine,
        display_name: "Magazine Article",
        fields: &[
            required(text("author", "Author(s)", "Lastname, F.")),
            required(year("Year")),
            required(text("title", "Article Title", "Title of the article")),
            required(text("magazine", "Magazine Name", "Scientific American")),
            text("issue", "Issue", "Spring 2023"),
            PAGES,
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::Report,
        display_name: "Report",
        fields: &[
            required(AUTHOR_OR_ORG),
            required(year("Year")),
            required(text("title", "Report Title", "Title of the report")),
            text("institution", "Institution", "Institution Name"),
            text("number", "Report Number", "Technical Report No. 123"),
            PAGES,
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::Patent,
        display_name: "Patent",
        fields: &[
            required(text("inventor", "Inventor(s)", "Lastname, F.")),
            required(year("Year")),
            required(text("title", "Patent Title", "Title of the patent")),
            required(text("country", "Country", "US")),
            required(text("number", "Patent Number", "US1234567A")),
            date("date", "Issue Date"),
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::Dataset,
        display_name: "Dataset",
        fields: &[
            required(AUTHOR_OR_ORG),
            required(year("Publication Year")),
            required(text("title", "Dataset Title", "Title of the dataset")),
            text("version", "Version", "1.0"),
            text("publisher", "Publisher", "Publisher Name"),
            text("doi", "DOI/Identifier", "10.xxxx/xxxxxx"),
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::Interview,
        display_name: "Interview",
        fields: &[
            required(text("interviewee", "Interviewee", "Lastname, F.")),
            text("interviewer", "Interviewer", "Lastname, F."),
            required(year("Year")),
            text("title", "Interview Title", "Title or description"),
            required(text(
                "medium",
                "Medium",
                "Personal interview, Telephone interview, etc.",
            )),
            date("date", "Date"),
            LOCATION,
        ],
    },
    SourceSchema {
        source_type: SourceType::Manuscript,
        display_name: "Manuscript",
        fields: &[
            required(text("author", "Author(s)", "Lastname, F.")),
            required(year("Year")),
            required(text("title", "Title", "Title of the manuscript")),
            required(text(
                "type",
                "Manuscript Type",
                "Unpublished manuscript, Working paper, etc.",
            )),
            text("institution", "Institution", "University Name"),
            LOCATION,
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::AudioVisual,
        display_name: "Audio/Visual Material",
        fields: &[
            required(text("creator", "Creator(s)", "Lastname, F. or Organization")),
            required(year("Year")),
            required(text("title", "Title", "Title of the work")),
            required(text("type", "Format", "Film, Podcast, Video, etc.")),
            text("publisher", "Publisher/Distributor", "Publisher Name"),
            LOCATION,
            URL,
        ],
    },
    SourceSchema {
        source_type: SourceType::Book,
        display_name: "Book",
        fields: &[
            required(AUTHORS),
            required(year("Year")),
            required(text("title", "Book Title", "Title of the book")),
            text("edition", "Edition", "2nd ed."),
            required(text("publisher", "Publisher", "Publisher Name")),
            LOCATION,
            text("isbn", "ISBN", "978-3-16-148410-0"),
        ],
    },
    SourceSchema {
        source_type: SourceType::Other,
        display_name: "Other Source",
        fields: &[
            AUTHOR_OR_ORG,
            year("Year"),
            required(text("title", "Title", "Title of the work")),
            text("publisher", "Publisher", "Publisher Name"),
            URL,
        ],
    },
];
