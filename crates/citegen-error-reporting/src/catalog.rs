//! Error code catalog and lookup.
//!
//! Maps error codes (like "C-1-2") to their metadata: subsystem, title,
//! message template and documentation URL.
//!
//! Subsystems:
//! - `1` registry and validation
//! - `2` dates
//! - `3` configuration and input
//! - `4` identifier lookup

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name (e.g., "registry", "date")
    pub subsystem: String,

    /// Short title for the error
    pub title: String,

    /// Default message template (may include `{placeholders}`)
    pub message_template: String,

    /// URL to documentation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    /// When this error was introduced (version)
    pub since_version: String,
}

/// Global error catalog, embedded at compile time and parsed on first use.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid, which the `test_catalog_loads`
/// test catches.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../error_catalog.json");
    serde_json::from_str(json_data).expect("Invalid error catalog JSON")
});

/// Look up error code information.
///
/// # Example
///
/// ```
/// use citegen_error_reporting::catalog::get_error_info;
///
/// let info = get_error_info("C-1-2").unwrap();
/// assert_eq!(info.title, "Missing Required Field");
/// ```
pub fn get_error_info(code: &str) -> Option<&ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

/// Get documentation URL for an error code.
pub fn get_docs_url(code: &str) -> Option<&str> {
    ERROR_CATALOG
        .get(code)
        .and_then(|info| info.docs_url.as_deref())
}

/// Get the subsystem name for an error code.
///
/// ```
/// use citegen_error_reporting::catalog::get_subsystem;
///
/// assert_eq!(get_subsystem("C-2-1"), Some("date"));
/// ```
pub fn get_subsystem(code: &str) -> Option<&str> {
    ERROR_CATALOG.get(code).map(|info| info.subsystem.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert!(!ERROR_CATALOG.is_empty());
    }

    #[test]
    fn test_every_code_matches_its_subsystem_number() {
        for (code, info) in ERROR_CATALOG.iter() {
            let subsystem_number = code.split('-').nth(1).unwrap();
            let expected = match subsystem_number {
                "1" => "registry",
                "2" => "date",
                "3" => "input",
                "4" => "lookup",
                other => panic!("unexpected subsystem {other} in {code}"),
            };
            assert_eq!(info.subsystem, expected, "code {code}");
        }
    }

    #[test]
    fn test_get_docs_url() {
        let url = get_docs_url("C-1-1").unwrap();
        assert!(url.starts_with("https://citegen.dev/errors/"));
    }

    #[test]
    fn test_nonexistent_code() {
        assert!(get_error_info("C-999-999").is_none());
        assert!(get_docs_url("C-999-999").is_none());
        assert!(get_subsystem("C-999-999").is_none());
    }
}
