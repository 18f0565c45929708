//! Author-list helpers.
//!
//! Author fields hold a single string with entries separated by `&`, each
//! entry written `Lastname, Initial.` (e.g. `"Smith, J. & Doe, J."`). No
//! other name structure is assumed or repaired.

/// Split an author string into trimmed entries.
///
/// Empty entries (from a stray or trailing `&`) are dropped.
pub fn split_authors(authors: &str) -> Vec<&str> {
    authors
        .split('&')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Join authors APA-style: `A`, `A, & B`, `A, B, & C`.
///
/// ```
/// use citegen_core::names::format_authors_apa;
///
/// assert_eq!(format_authors_apa("Smith, J."), "Smith, J.");
/// assert_eq!(format_authors_apa("Smith, J. & Doe, J."), "Smith, J., & Doe, J.");
/// assert_eq!(format_authors_apa("A & B & C"), "A, B, & C");
/// assert_eq!(format_authors_apa(""), "");
/// ```
pub fn format_authors_apa(authors: &str) -> String {
    match split_authors(authors).as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{}, & {}", rest.join(", "), last),
    }
}

/// The surname of one author entry: the text before the first comma.
///
/// An entry with no comma (an organization, or a name typed as
/// `Jane Smith`) is returned whole.
pub fn surname(entry: &str) -> &str {
    entry.split(',').next().unwrap_or(entry).trim()
}

/// Surnames of every author, in order.
pub fn surnames(authors: &str) -> Vec<&str> {
    split_authors(authors).into_iter().map(surname).collect()
}

/// The first author's surname, if there is an author at all.
pub fn first_surname(authors: &str) -> Option<&str> {
    split_authors(authors).into_iter().next().map(surname)
}
