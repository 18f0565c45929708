//! IEEE (numeric-style entries, `[Online]. Available:` links).

use super::{FullFormatter, Source, lead_surname, quoted, sentence, sentence_of};
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
    Output::affixed("", s.creators(), ", ")
}

/// `"Title," `
fn title(s: &Source<'_>) -> String {
    format!("{} ", quoted(s.get("title"), ","))
}

fn online(s: &Source<'_>) -> Output {
    s.opt(" [Online]. Available: ", "url", "")
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
                s.opt("pp. ", "pages", ""),
                s.year().into(),
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
        "in ",
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
                s.get("location").into(),
                s.year().into(),
            ],
            ", ",
        )),
        online(s),
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
        online(s),
        Output::affixed(" [Accessed: ", &s.date("access", DateFormat::Short), "]."),
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
        online(s),
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
                s.opt("pp. ", "pages", ""),
                s.year().into(),
            ],
            ", ",
        )),
        online(s),
    ]
}

fn report(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("institution").into(),
                s.opt("Rep. ", "number", ""),
                s.year().into(),
            ],
            ", ",
        )),
        online(s),
    ]
}

fn patent(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        s.get("country"),
        " Patent ",
        s.get("number"),
        ", ",
        sentence(&s.date_or_year("date")),
        online(s),
    ]
}

fn dataset(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.opt("version ", "version", ""),
                s.get("publisher").into(),
                s.year().into(),
            ],
            ", ",
        )),
        match s.doi() {
            Some(doi) => Output::literal(format!(" {}", sentence(&doi))),
            None => online(s),
        },
    ]
}

fn interview(s: &Source<'_>) -> String {
    template![
        authors(s),
        Output::affixed("", &quoted(s.get("title"), ","), " "),
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
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("type").into(),
                s.get("institution").into(),
                s.get("location").into(),
                s.year().into(),
            ],
            ", ",
        )),
        online(s),
    ]
}

fn audio_visual(s: &Source<'_>) -> String {
    template![
        authors(s),
        title(s),
        sentence_of(Output::join(
            vec![
                s.get("type").into(),
                s.place_publisher("location", "publisher"),
                s.year().into(),
            ],
            ", ",
        )),
        online(s),
    ]
}

fn book(s: &Source<'_>) -> String {
    template![
        authors(s),
        sentence_of(Output::join(
            vec![s.get("title").into(), s.get("edition").into()],
            ", ",
        )),
        " ",
        sentence_of(Output::join(
            vec![s.place_publisher("location", "publisher"), s.year().into()],
            ", ",
        )),
        s.opt(" ISBN: ", "isbn", "."),
    ]
}

/// `[S20]`: the surname's first letter and the year's last two digits.
///
/// With no year the digits are left out; with no creator the letter comes
/// from the anonymous title stand-in.
pub(crate) fn in_text(s: &Source<'_>) -> String {
    let initial = lead_surname(s)
        .trim_start_matches('"')
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default();
    let digits = match s.values.non_empty("year") {
        Some(year) => {
            let chars: Vec<char> = year.chars().collect();
            chars[chars.len().saturating_sub(2)..].iter().collect()
        }
        None => String::new(),
    };
    format!("[{initial}{digits}]")
}
