//! APA, 7th edition.
//!
//! Reference entries open with the authors joined by [`format_authors_apa`]
//! and the year in parentheses. DOIs are written as resolver links.
//!
//! [`format_authors_apa`]: crate::names::format_authors_apa

use super::{ANONYMOUS, FullFormatter, Source, sentence, sentence_of};
use crate::names;
use crate::output::Output;
use crate::source_type::SourceType;
use crate::template;

pub(crate) const FULL: &[(SourceType, FullFormatter)] = &[
    (SourceType::Journal, journal),
    (SourceType::Conference, conference),
    (SourceType::Thesis, thesis),
    (SourceType::Website, website),
    (SourceType::Newspaper, newspaper),
    (SourceType::Magazine, magazine),
    (SourceType::Report, report),
    (SourceType::Patent, patent),
    (SourceType::Dataset, dataset),
    (SourceType::Interview, interview),
    (SourceType::Manuscript, manuscript),
    (SourceType::AudioVisual, audio_visual),
    (SourceType::Book, book),
];

/// `Authors (Year). `
fn lead(s: &Source<'_>) -> String {
    template![Output::affixed("", &s.creators_apa(), " "), "(", s.year(), "). "]
}

/// `, 15(3)`, `, 15`, `, (3)` or nothing.
fn volume_issue(s: &Source<'_>) -> Output {
    Output::sequence(vec![Output::from(s.get("volume")), s.opt("(", "issue", ")")]).wrap(", ", "")
}

fn journal(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence(s.get("title")),
        " ",
        sentence_of(Output::sequence(vec![
            s.get("journal").into(),
            volume_issue(s),
            s.opt(", ", "pages", ""),
        ])),
        s.opt_doi(" ", ""),
    ]
}

fn conference(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence(s.get("title")),
        " ",
        sentence_of(Output::join(
            vec![
                s.get("conference").into(),
                s.get("location").into(),
                s.opt("pp. ", "pages", ""),
            ],
            ", ",
        )),
        s.opt_doi(" ", ""),
    ]
}

fn thesis(s: &Source<'_>) -> String {
    template![
        lead(s),
        s.get("title"),
        " [",
        s.get("degree"),
        ", ",
        s.get("institution"),
        "].",
        s.opt(" ", "url", ""),
    ]
}

fn website(s: &Source<'_>) -> String {
    let retrieved = match s.values.non_empty("access") {
        Some(_) => format!(
            " Retrieved {}, from {}",
            s.date("access", crate::date::DateFormat::Long),
            s.get("url")
        ),
        None => s.opt(" ", "url", "").render(),
    };
    template![
        lead(s),
        sentence(s.get("title")),
        " ",
        sentence(s.get("site")),
        retrieved,
    ]
}

fn newspaper(s: &Source<'_>) -> String {
    template![
        Output::affixed("", &s.creators_apa(), " "),
        "(",
        s.year(),
        Output::affixed(", ", &s.month_day("date").unwrap_or_default(), ""),
        "). ",
        sentence(s.get("title")),
        " ",
        sentence_of(Output::join(
            vec![s.get("newspaper").into(), s.get("pages").into()],
            ", ",
        )),
        s.opt(" ", "url", ""),
    ]
}

fn magazine(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence(s.get("title")),
        " ",
        sentence_of(Output::join(
            vec![
                s.get("magazine").into(),
                s.get("issue").into(),
                s.get("pages").into(),
            ],
            ", ",
        )),
        s.opt(" ", "url", ""),
    ]
}

fn report(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence_of(Output::sequence(vec![
            s.get("title").into(),
            s.opt(" (", "number", ")"),
        ])),
        Output::affixed(" ", &sentence(s.get("institution")), ""),
        s.opt(" ", "url", ""),
    ]
}

fn patent(s: &Source<'_>) -> String {
    template![
        lead(s),
        s.get("title"),
        " (",
        s.get("country"),
        " Patent No. ",
        s.get("number"),
        ").",
        s.opt(" ", "url", ""),
    ]
}

fn dataset(s: &Source<'_>) -> String {
    template![
        lead(s),
        s.get("title"),
        s.opt(" (Version ", "version", ")"),
        " [Data set].",
        Output::affixed(" ", &sentence(s.get("publisher")), ""),
        s.doi_or_url(" ", ""),
    ]
}

fn interview(s: &Source<'_>) -> String {
    template![
        Output::affixed("", &s.creators_apa(), " "),
        "(",
        s.year(),
        Output::affixed(", ", &s.month_day("date").unwrap_or_default(), ""),
        "). ",
        s.opt("", "title", " "),
        "[",
        s.get("medium"),
        s.opt(" with ", "interviewer", ""),
        "]",
        s.opt(", ", "location", ""),
        ".",
    ]
}

fn manuscript(s: &Source<'_>) -> String {
    template![
        lead(s),
        s.get("title"),
        " [",
        s.get("type"),
        "].",
        Output::join(
            vec![s.get("institution").into(), s.get("location").into()],
            ", ",
        )
        .wrap(" ", "."),
        s.opt(" ", "url", ""),
    ]
}

fn audio_visual(s: &Source<'_>) -> String {
    template![
        lead(s),
        s.get("title"),
        " [",
        s.get("type"),
        "].",
        Output::join(
            vec![s.get("publisher").into(), s.get("location").into()],
            ", ",
        )
        .wrap(" ", "."),
        s.opt(" ", "url", ""),
    ]
}

fn book(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence_of(Output::sequence(vec![
            s.get("title").into(),
            s.opt(" (", "edition", ")"),
        ])),
        " ",
        sentence(s.get("publisher")),
    ]
}

/// `(Smith, 2020)`, `(Smith & Doe, 2020)`, `(Smith et al., 2020)`.
pub(crate) fn in_text(s: &Source<'_>) -> String {
    let year = s.year();
    match names::surnames(s.creators()).as_slice() {
        [] => format!("({ANONYMOUS}, {year})"),
        [only] => format!("({only}, {year})"),
        [first, second] => format!("({first} & {second}, {year})"),
        [first, ..] => format!("({first} et al., {year})"),
    }
}
