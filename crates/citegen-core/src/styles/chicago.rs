//! Chicago, 17th edition (author-date for in-text, notes-bibliography
//! punctuation for entries).

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

fn authors(s: &Source<'_>) -> Output {
    Output::affixed("", &sentence(s.creators()), " ")
}

fn link(s: &Source<'_>) -> Output {
    Output::affixed(" ", &sentence(s.get("url")), "")
}

fn journal(s: &Source<'_>) -> String {
    template![
        Output::affixed("", s.creators(), ", "),
        quoted(s.get("title"), ","),
        " ",
        s.get("journal"),
        s.opt(" ", "volume", ""),
        s.opt(", no. ", "issue", ""),
        " (",
        s.year(),
        ")",
        s.opt(": ", "pages", ""),
        ".",
        s.opt_doi(" ", "."),
    ]
}

fn conference(s: &Source<'_>) -> String {
    template![
        authors(s),
        quoted(s.get("title"), ""),
        " (Paper presented at ",
        Output::join(
            vec![
                s.get("conference").into(),
                s.get("location").into(),
                s.year().into(),
            ],
            ", ",
        ),
        ").",
        s.opt_doi(" ", "."),
    ]
}

fn thesis(s: &Source<'_>) -> String {
    template![
        authors(s),
        quoted(s.get("title"), ""),
        " (",
        Output::join(
            vec![
                s.get("degree").into(),
                s.get("institution").into(),
                s.year().into(),
            ],
            ", ",
        ),
        ").",
        link(s),
    ]
}

fn website(s: &Source<'_>) -> String {
    template![
        authors(s),
        quoted(s.get("title"), "."),
        " ",
        sentence(s.get("site")),
        Output::affixed(" ", &sentence(s.year()), ""),
        link(s),
        Output::affixed(" Accessed ", &s.date("access", DateFormat::Long), "."),
    ]
}

fn newspaper(s: &Source<'_>) -> String {
    template![
        authors(s),
        quoted(s.get("title"), "."),
        " ",
        sentence_of(Output::join(
            vec![
                s.get("newspaper").into(),
                s.date_or_year("date").into(),
                s.get("pages").into(),
            ],
            ", ",
        )),
        link(s),
    ]
}

fn magazine(s: &Source<'_>) -> String {
    template![
        authors(s),
        quoted(s.get("title"), "."),
        " ",
        sentence_of(Output::join(
            vec![
                s.get("magazine").into(),
                s.get("issue").into(),
                s.year().into(),
            ],
            ", ",
        )),
        link(s),
    ]
}

fn report(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence_of(Output::sequence(vec![
            s.get("title").into(),
            s.opt(". ", "number", ""),
        ])),
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
        ", filed ",
        sentence(&s.date_or_year("date")),
        link(s),
    ]
}

fn dataset(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence_of(Output::sequence(vec![
            s.get("title").into(),
            s.opt(". Version ", "version", ""),
        ])),
        " ",
        sentence_of(Output::join(
            vec![s.get("publisher").into(), s.year().into()],
            ", ",
        )),
        match s.doi() {
            Some(doi) => Output::literal(format!(" {}", sentence(&doi))),
            None => link(s),
        },
    ]
}

fn interview(s: &Source<'_>) -> String {
    template![
        authors(s),
        Output::affixed("", &quoted(s.get("title"), "."), " "),
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
        quoted(s.get("title"), "."),
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
        sentence(s.get("type")),
        " ",
        sentence_of(Output::join(
            vec![s.place_publisher("location", "publisher"), s.year().into()],
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
            vec![s.place_publisher("location", "publisher"), s.year().into()],
            ", ",
        )),
        s.opt(" ISBN: ", "isbn", "."),
    ]
}

/// `(Smith 2020, 45)`, or `(Smith 2020)` when no pages are given.
pub(crate) fn in_text(s: &Source<'_>) -> String {
    let surname = lead_surname(s);
    let year = s.year();
    match first_page(s) {
        Some(page) => format!("({surname} {year}, {page})"),
        None => format!("({surname} {year})"),
    }
}
