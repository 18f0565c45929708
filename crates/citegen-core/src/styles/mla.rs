//! MLA, 9th edition.

use super::{FullFormatter, Source, first_page, lead_surname, quoted, sentence, sentence_of};
use crate::date::DateFormat;
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

/// `Authors. ` or nothing.
fn authors(s: &Source<'_>) -> Output {
    Output::affixed("", &sentence(s.creators()), " ")
}

/// `"Title." `
fn title(s: &Source<'_>) -> String {
    format!("{} ", quoted(s.get("title"), "."))
}

/// A trailing ` https://....` link.
fn link(s: &Source<'_>) -> Output {
    Output::affixed(" ", &sentence(s.get("url")), "")
}

fn journal(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("journal").into(),
                s.opt("vol. ", "volume", ""),
                s.opt("no. ", "issue", ""),
                s.year().into(),
                s.opt("pp. ", "pages", ""),
            ],
            ", ",
        )),
        s.opt_doi(" ", "."),
    ]
}

fn conference(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("conference").into(),
                s.get("location").into(),
                s.year().into(),
                s.opt("pp. ", "pages", ""),
            ],
            ", ",
        )),
        s.opt_doi(" ", "."),
    ]
}

fn thesis(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("degree").into(),
                s.get("institution").into(),
                s.year().into(),
            ],
            ", ",
        )),
        link(s),
    ]
}

fn website(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![s.get("site").into(), s.year().into()],
            ", ",
        )),
        link(s),
        Output::affixed(" Accessed ", &s.date("access", DateFormat::Long), "."),
    ]
}

fn newspaper(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("newspaper").into(),
                s.date_or_year("date").into(),
                s.opt("p. ", "pages", ""),
            ],
            ", ",
        )),
        link(s),
    ]
}

fn magazine(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("magazine").into(),
                s.get("issue").into(),
                s.year().into(),
                s.opt("pp. ", "pages", ""),
            ],
            ", ",
        )),
        link(s),
    ]
}

fn report(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence(s.get("title")),
        Output::affixed(" ", &sentence(s.get("number")), ""),
        " ",
        sentence_of(Output::join(
            vec![s.get("institution").into(), s.year().into()],
            ", ",
        )),
        link(s),
    ]
}

fn patent(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence(s.get("title")),
        " ",
        s.get("country"),
        " Patent ",
        s.get("number"),
        ", ",
        sentence(&s.date_or_year("date")),
        link(s),
    ]
}

fn dataset(s: &Source<'_>) -> String {
    let locator = match s.doi() {
        Some(doi) => Output::literal(format!(" {}", sentence(&doi))),
        None => link(s),
    };
    template![
        authors(s),
        sentence(s.get("title")),
        " ",
        sentence_of(Output::join(
            vec![
                s.opt("Version ", "version", ""),
                s.get("publisher").into(),
                s.year().into(),
            ],
            ", ",
        )),
        locator,
    ]
}

fn interview(s: &Source<'_>) -> String {
    template![
        authors(s),
        Output::affixed("", &sentence(s.get("title")), " "),
        sentence_of(Output::join(
            vec![
                Output::sequence(vec![
                    s.get("medium").into(),
                    s.opt(" by ", "interviewer", ""),
                ]),
                s.get("location").into(),
                s.date_or_year("date").into(),
            ],
            ", ",
        )),
    ]
}

fn manuscript(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence(s.get("title")),
        " ",
        sentence_of(Output::join(
            vec![
                s.get("type").into(),
                s.get("institution").into(),
                s.get("location").into(),
                s.year().into(),
            ],
            ", ",
        )),
        link(s),
    ]
}

fn audio_visual(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence(s.get("title")),
        " ",
        sentence_of(Output::join(
            vec![
                s.get("type").into(),
                s.get("publisher").into(),
                s.year().into(),
            ],
            ", ",
        )),
        link(s),
    ]
}

fn book(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence(s.get("title")),
        Output::affixed(" ", &sentence(s.get("edition")), ""),
        " ",
        sentence_of(Output::join(
            vec![s.get("publisher").into(), s.year().into()],
            ", ",
        )),
        s.opt(" ISBN ", "isbn", "."),
    ]
}

/// `(Smith 45)`, or `(Smith)` when no pages are given.
pub(crate) fn in_text(s: &Source<'_>) -> String {
    let surname = lead_surname(s);
    match first_page(s) {
        Some(page) => format!("({surname} {page})"),
        None => format!("({surname})"),
    }
}
