//! Tests for citegen-core error types.
//!
//! These tests verify that all error variants have correct Display implementations
//! and produce valid DiagnosticMessage output.

use citegen_core::Error;
use citegen_core::lookup::{IdentifierKind, ResolveError};
use citegen_error_reporting::{DiagnosticKind, get_error_info};

// ============================================================================
// Display implementation tests
// ============================================================================

#[test]
fn test_unknown_source_type_display() {
    let err = Error::UnknownSourceType {
        tag: "podcast".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown source type 'podcast'");
}

#[test]
fn test_unknown_style_display() {
    let err = Error::UnknownStyle {
        tag: "vancouver".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown citation style 'vancouver'");
}

#[test]
fn test_missing_required_field_display() {
    let err = Error::MissingRequiredField {
        field_id: "title",
        label: "Book Title",
    };
    let display = err.to_string();
    assert!(display.contains("'title'"), "Got: {}", display);
    assert!(display.contains("Book Title"), "Got: {}", display);
}

#[test]
fn test_malformed_date_display() {
    let err = Error::MalformedDate {
        value: "soon".to_string(),
    };
    assert_eq!(err.to_string(), "Malformed date 'soon'");
}

// ============================================================================
// to_diagnostic tests
// ============================================================================

#[test]
fn test_diagnostic_codes_are_cataloged() {
    let errors = [
        Error::UnknownSourceType { tag: "x".into() },
        Error::MissingRequiredField {
            field_id: "title",
            label: "Title",
        },
        Error::UnknownStyle { tag: "x".into() },
        Error::MalformedDate { value: "x".into() },
    ];
    for err in errors {
        let diagnostic = err.to_diagnostic();
        let code = diagnostic.code.clone().expect("diagnostic without code");
        let info = get_error_info(&code).unwrap_or_else(|| panic!("{code} not in catalog"));
        assert_eq!(info.title, diagnostic.title, "code {code}");
    }
}

#[test]
fn test_malformed_date_is_a_warning() {
    let diagnostic = Error::MalformedDate {
        value: "Spring".into(),
    }
    .to_diagnostic();
    assert_eq!(diagnostic.kind, DiagnosticKind::Warning);
}

#[test]
fn test_missing_field_diagnostic_text() {
    let diagnostic = Error::MissingRequiredField {
        field_id: "title",
        label: "Book Title",
    }
    .to_diagnostic();
    insta::assert_snapshot!(diagnostic.to_text(), @r#"
    Error [C-1-2]: Missing Required Field
    The "Book Title" field must be filled in
    ✖ Field `title` is empty
    ? Fill in "Book Title" and generate the citation again?
    "#);
}

#[test]
fn test_resolve_error_codes_are_cataloged() {
    let errors = [
        ResolveError::Unrecognized {
            input: "hello".into(),
        },
        ResolveError::NotFound {
            kind: IdentifierKind::Isbn,
            value: "0306406152".into(),
        },
        ResolveError::Unavailable {
            message: "timeout".into(),
        },
    ];
    for err in errors {
        let diagnostic = err.to_diagnostic();
        let code = diagnostic.code.clone().expect("diagnostic without code");
        let info = get_error_info(&code).unwrap_or_else(|| panic!("{code} not in catalog"));
        assert_eq!(info.title, diagnostic.title, "code {code}");
        assert_eq!(info.subsystem, "lookup");
    }
}

#[test]
fn test_resolve_error_display() {
    let err = ResolveError::NotFound {
        kind: IdentifierKind::Doi,
        value: "10.1/x".into(),
    };
    assert_eq!(err.to_string(), "No record found for DOI '10.1/x'");
}
