//! Required-field validation against the source registry.

use crate::error::{Error, Result};
use crate::fields::FieldValues;
use crate::source_type::SourceType;

/// Check that every required field of `source_type` has a non-blank value.
///
/// Fields are checked in schema order and the first missing one is
/// reported, regardless of the order the values were collected in.
///
/// ```
/// use citegen_core::{validate, Error, FieldValues, SourceType};
///
/// let values = FieldValues::new()
///     .with("title", "")
///     .with("publisher", "X")
///     .with("year", "2020")
///     .with("author", "Y");
/// let err = validate(SourceType::Book, &values).unwrap_err();
/// assert!(matches!(err, Error::MissingRequiredField { field_id: "title", .. }));
/// ```
pub fn validate(source_type: SourceType, values: &FieldValues) -> Result<()> {
    match source_type
        .schema()
        .required_fields()
        .find(|spec| !values.contains(spec.id))
    {
        Some(spec) => {
            tracing::debug!(
                source_type = %source_type,
                field = spec.id,
                "required field missing"
            );
            Err(Error::MissingRequiredField {
                field_id: spec.id,
                label: spec.label,
            })
        }
        None => Ok(()),
    }
}
