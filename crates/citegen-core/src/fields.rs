//! Field values collected for one citation request.

use indexmap::IndexMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between repeated entries of the same field.
pub const ENTRY_SEPARATOR: &str = " & ";

/// Field id → value, in collection order.
///
/// A field entered more than once (the "add another author" case) keeps a
/// single value: the entries joined with `" & "` in the order they were
/// pushed. Values are trimmed on the way in; a repeated entry that is blank
/// after trimming is dropped so it cannot leave a dangling `&`.
///
/// ```
/// use citegen_core::FieldValues;
///
/// let mut values = FieldValues::new();
/// values.push("author", "Smith, J.");
/// values.push("author_2", " Doe, J. ");
/// values.push("author_3", "");
/// assert_eq!(values.get("author"), "Smith, J. & Doe, J.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: IndexMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one raw entry.
    ///
    /// `raw_id` may carry a `_<suffix>` distinguishing repeated inputs
    /// (`author_1699`); everything from the first `_` on is ignored.
    pub fn push(&mut self, raw_id: &str, value: &str) {
        let id = base_field_id(raw_id);
        let value = value.trim();

        match self.values.get_mut(id) {
            None => {
                self.values.insert(id.to_string(), value.to_string());
            }
            Some(_) if value.is_empty() => {}
            Some(existing) if existing.is_empty() => {
                existing.push_str(value);
            }
            Some(existing) => {
                existing.push_str(ENTRY_SEPARATOR);
                existing.push_str(value);
            }
        }
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, raw_id: &str, value: &str) -> Self {
        self.push(raw_id, value);
        self
    }

    /// The value for `id`, or `""` when absent.
    pub fn get(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    /// The value for `id` when present and non-blank.
    pub fn non_empty(&self, id: &str) -> Option<&str> {
        let value = self.get(id);
        (!value.trim().is_empty()).then_some(value)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.non_empty(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (id, value) in iter {
            values.push(id.as_ref(), value.as_ref());
        }
        values
    }
}

/// The field id a raw input id belongs to.
pub fn base_field_id(raw_id: &str) -> &str {
    raw_id.split('_').next().unwrap_or(raw_id).trim()
}

/// A JSON value for one field: a string, a number, or a list of entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    One(String),
    Number(serde_json::Number),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for FieldValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldValuesVisitor;

        impl<'de> Visitor<'de> for FieldValuesVisitor {
            type Value = FieldValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field ids to strings or lists of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FieldValues, A::Error> {
                let mut values = FieldValues::new();
                while let Some(id) = map.next_key::<String>()? {
                    match map.next_value::<RawEntry>()? {
                        RawEntry::One(value) => values.push(&id, &value),
                        RawEntry::Number(n) => values.push(&id, &n.to_string()),
                        RawEntry::Many(entries) => {
                            for entry in entries {
                                values.push(&id, &entry);
                            }
                        }
                    }
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(FieldValuesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_entries_join_in_order() {
        let values: FieldValues = [
            ("author", "Smith, J."),
            ("author_1", "Doe, J."),
            ("author_2", "Roe, R."),
        ]
        .into_iter()
        .collect();
        assert_eq!(values.get("author"), "Smith, J. & Doe, J. & Roe, R.");
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_blank_first_entry_is_replaced() {
        let values = FieldValues::new().with("author", "  ").with("author_9", "Doe, J.");
        assert_eq!(values.get("author"), "Doe, J.");
    }

    #[test]
    fn test_missing_field_reads_empty() {
        let values = FieldValues::new();
        assert_eq!(values.get("doi"), "");
        assert!(values.non_empty("doi").is_none());
        assert!(!values.contains("doi"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let values = FieldValues::new().with("title", "  Deep Work \n");
        assert_eq!(values.get("title"), "Deep Work");
    }

    #[test]
    fn test_base_field_id() {
        assert_eq!(base_field_id("author_1699999"), "author");
        assert_eq!(base_field_id("title"), "title");
    }

    #[test]
    fn test_deserialize_strings_numbers_and_lists() {
        let values: FieldValues = serde_json::from_str(
            r#"{"author": ["Smith, J.", "Doe, J."], "year": 2023, "title": "Notes"}"#,
        )
        .unwrap();
        assert_eq!(values.get("author"), "Smith, J. & Doe, J.");
        assert_eq!(values.get("year"), "2023");
        assert_eq!(values.get("title"), "Notes");
        let ids: Vec<_> = values.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["author", "year", "title"]);
    }

    #[test]
    fn test_serialize_is_a_flat_map() {
        let values = FieldValues::new().with("title", "T").with("year", "2020");
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"{"title":"T","year":"2020"}"#
        );
    }
}
