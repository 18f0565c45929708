//! Harvard (author-date, `Available at:` links).

use super::{FullFormatter, Source, lead_surname, sentence, sentence_of};
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

/// `Authors (Year) `
fn lead(s: &Source<'_>) -> String {
    template![Output::affixed("", s.creators(), " "), "(", s.year(), ") "]
}

/// `'Title', `
fn title(s: &Source<'_>) -> String {
    format!("'{}', ", s.get("title"))
}

/// ` Available at: <link>.`, preferring the DOI.
fn available(s: &Source<'_>) -> Output {
    s.doi_or_url(" Available at: ", ".")
}

fn url(s: &Source<'_>) -> Output {
    s.opt(" Available at: ", "url", ".")
}

fn journal(s: &Source<'_>) -> String {
    template![
        lead(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("journal").into(),
                Output::sequence(vec![
                    s.get("volume").into(),
                    s.opt("(", "issue", ")"),
                ]),
                s.opt("pp. ", "pages", ""),
            ],
            ", ",
        )),
        available(s),
    ]
}

fn conference(s: &Source<'_>) -> String {
    template![
        lead(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("conference").into(),
                s.get("location").into(),
                s.opt("pp. ", "pages", ""),
            ],
            ", ",
        )),
        available(s),
    ]
}

fn thesis(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence(&format!("'{}'", s.get("title"))),
        " ",
        sentence_of(Output::join(
            vec![
                s.get("degree").into(),
                s.get("institution").into(),
                s.get("location").into(),
            ],
            ", ",
        )),
        url(s),
    ]
}

fn website(s: &Source<'_>) -> String {
    template![
        lead(s),
        title(s),
        sentence(s.get("site")),
        url(s),
        Output::affixed(" [Accessed ", &s.date("access", DateFormat::Long), "]."),
    ]
}

fn newspaper(s: &Source<'_>) -> String {
    template![
        lead(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("newspaper").into(),
                Output::affixed("", &s.date("date", DateFormat::Long), ""),
                s.opt("p. ", "pages", ""),
            ],
            ", ",
        )),
        url(s),
    ]
}

fn magazine(s: &Source<'_>) -> String {
    template![
        lead(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("magazine").into(),
                s.get("issue").into(),
                s.opt("pp. ", "pages", ""),
            ],
            ", ",
        )),
        url(s),
    ]
}

fn report(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence_of(Output::join(
            vec![s.get("title").into(), s.get("number").into()],
            ", ",
        )),
        Output::affixed(" ", &sentence(s.get("institution")), ""),
        url(s),
    ]
}

fn patent(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence(s.get("title")),
        " ",
        s.get("country"),
        " Patent ",
        sentence(s.get("number")),
        url(s),
    ]
}

fn dataset(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence_of(Output::sequence(vec![
            s.get("title").into(),
            s.opt(" (Version ", "version", ")"),
        ])),
        " [Dataset].",
        Output::affixed(" ", &sentence(s.get("publisher")), ""),
        available(s),
    ]
}

fn interview(s: &Source<'_>) -> String {
    template![
        lead(s),
        Output::affixed("", &sentence(s.get("title")), " "),
        sentence_of(Output::join(
            vec![
                Output::sequence(vec![
                    s.get("medium").into(),
                    s.opt(" by ", "interviewer", ""),
                ]),
                s.get("location").into(),
                Output::affixed("", &s.date("date", DateFormat::Long), ""),
            ],
            ", ",
        )),
    ]
}

fn manuscript(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence_of(Output::sequence(vec![
            s.get("title").into(),
            s.opt(" [", "type", "]"),
        ])),
        Output::join(
            vec![s.get("institution").into(), s.get("location").into()],
            ", ",
        )
        .wrap(" ", "."),
        url(s),
    ]
}

fn audio_visual(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence_of(Output::sequence(vec![
            s.get("title").into(),
            s.opt(" [", "type", "]"),
        ])),
        Output::affixed(
            " ",
            &sentence(&s.place_publisher("location", "publisher").render()),
            "",
        ),
        url(s),
    ]
}

fn book(s: &Source<'_>) -> String {
    template![
        lead(s),
        sentence_of(Output::join(
            vec![s.get("title").into(), s.get("edition").into()],
            ", ",
        )),
        " ",
        sentence(&s.place_publisher("location", "publisher").render()),
        s.opt(" ISBN: ", "isbn", "."),
    ]
}

/// `(Smith 2020)`.
pub(crate) fn in_text(s: &Source<'_>) -> String {
    format!("({} {})", lead_surname(s), s.year())
}
