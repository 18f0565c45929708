//! Date formatting for citations.
//!
//! Month names are US English; the locale is not configurable.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Output shape for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `2023-01-05`
    Short,
    /// `January 5, 2023`
    Long,
    /// `Jan`
    Month,
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full-date layouts accepted by [`parse_date`], tried in order.
const DATE_LAYOUTS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Parse a calendar date.
///
/// Besides the layouts in `DATE_LAYOUTS`, this accepts RFC 3339 timestamps,
/// `YYYY-MM` (first of the month) and a bare `YYYY` (January 1).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    let parsed = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").ok())
        .or_else(|| year_only(trimmed));

    parsed.ok_or_else(|| Error::MalformedDate {
        value: input.to_string(),
    })
}

fn year_only(input: &str) -> Option<NaiveDate> {
    if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(input.parse().ok()?, 1, 1)
}

/// Format a date string for display.
///
/// Empty input gives an empty string. Input that is not a recognizable date
/// is returned unchanged, so a free-form value like `Spring 2021` still
/// reaches the citation.
///
/// ```
/// use citegen_core::date::{format_date, DateFormat};
///
/// assert_eq!(format_date("2023-05-15", DateFormat::Long), "May 15, 2023");
/// assert_eq!(format_date("2023-05-15", DateFormat::Month), "May");
/// assert_eq!(format_date("not-a-date", DateFormat::Long), "not-a-date");
/// assert_eq!(format_date("", DateFormat::Short), "");
/// ```
pub fn format_date(input: &str, format: DateFormat) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    match parse_date(input) {
        Ok(date) => render(date, format),
        Err(_) => {
            tracing::debug!(value = input, "date not recognized, using it as written");
            input.to_string()
        }
    }
}

fn render(date: NaiveDate, format: DateFormat) -> String {
    let month_name = MONTHS[date.month0() as usize];
    match format {
        DateFormat::Short => format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
        DateFormat::Long => format!("{} {}, {}", month_name, date.day(), date.year()),
        DateFormat::Month => month_name[..3].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_is_zero_padded() {
        assert_eq!(format_date("2023-1-5", DateFormat::Short), "2023-01-05");
        assert_eq!(format_date("2023/01/05", DateFormat::Short), "2023-01-05");
    }

    #[test]
    fn test_long() {
        assert_eq!(format_date("2023-01-05", DateFormat::Long), "January 5, 2023");
        assert_eq!(format_date("2023-05-15", DateFormat::Long), "May 15, 2023");
    }

    #[test]
    fn test_month_abbreviation() {
        assert_eq!(format_date("2021-09-30", DateFormat::Month), "Sep");
        assert_eq!(format_date("2021-12-01", DateFormat::Month), "Dec");
    }

    #[test]
    fn test_alternative_layouts() {
        assert_eq!(format_date("05/15/2023", DateFormat::Short), "2023-05-15");
        assert_eq!(format_date("May 15, 2023", DateFormat::Short), "2023-05-15");
        assert_eq!(format_date("Sep 3, 2020", DateFormat::Short), "2020-09-03");
        assert_eq!(
            format_date("2023-05-15T10:30:00Z", DateFormat::Short),
            "2023-05-15"
        );
        assert_eq!(format_date("2023-05", DateFormat::Long), "May 1, 2023");
        assert_eq!(format_date("2023", DateFormat::Long), "January 1, 2023");
    }

    #[test]
    fn test_malformed_passes_through() {
        assert_eq!(format_date("not-a-date", DateFormat::Long), "not-a-date");
        assert_eq!(format_date("2023-02-30", DateFormat::Short), "2023-02-30");
        assert_eq!(format_date("Spring 2021", DateFormat::Month), "Spring 2021");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_date("", DateFormat::Short), "");
        assert_eq!(format_date("   ", DateFormat::Long), "");
    }

    #[test]
    fn test_parse_date_reports_malformed() {
        assert_eq!(
            parse_date("soon"),
            Err(Error::MalformedDate {
                value: "soon".to_string()
            })
        );
    }
}
