//! Output building for citation templates.
//!
//! Templates are written as a sequence of [`Output`] nodes. Optional fields
//! are wrapped with their punctuation in [`Output::affixed`], which collapses
//! to [`Output::Null`] when the field is empty; empty nodes render as
//! nothing, so a missing field takes its comma or parentheses with it.

/// A piece of a formatted citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Literal text content.
    Literal(String),
    /// Children rendered back to back.
    Sequence(Vec<Output>),
    /// Empty output.
    Null,
}

impl Output {
    /// Create a literal text node. Empty text is `Null`.
    pub fn literal(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Output::Null
        } else {
            Output::Literal(s)
        }
    }

    /// `prefix + value + suffix`, or `Null` when `value` is blank.
    ///
    /// ```
    /// use citegen_core::output::Output;
    ///
    /// assert_eq!(Output::affixed(" (", "3", ")").render(), " (3)");
    /// assert_eq!(Output::affixed(" (", "  ", ")").render(), "");
    /// ```
    pub fn affixed(prefix: &str, value: &str, suffix: &str) -> Self {
        if value.trim().is_empty() {
            Output::Null
        } else {
            Output::Literal(format!("{prefix}{value}{suffix}"))
        }
    }

    /// Create a sequence, dropping null children.
    pub fn sequence(children: Vec<Output>) -> Self {
        let children: Vec<_> = children.into_iter().filter(|c| !c.is_null()).collect();
        if children.is_empty() {
            Output::Null
        } else {
            Output::Sequence(children)
        }
    }

    /// Join non-null outputs with a delimiter.
    ///
    /// ```
    /// use citegen_core::output::Output;
    ///
    /// let joined = Output::join(
    ///     vec![Output::literal("Paris"), Output::Null, Output::literal("2020")],
    ///     ", ",
    /// );
    /// assert_eq!(joined.render(), "Paris, 2020");
    /// ```
    pub fn join(outputs: Vec<Output>, delimiter: &str) -> Self {
        let mut children = Vec::new();
        for output in outputs.into_iter().filter(|o| !o.is_null()) {
            if !children.is_empty() {
                children.push(Output::literal(delimiter));
            }
            children.push(output);
        }
        Output::sequence(children)
    }

    /// Wrap this output in prefix and suffix, unless it is null.
    pub fn wrap(self, prefix: &str, suffix: &str) -> Self {
        if self.is_null() {
            Output::Null
        } else {
            Output::sequence(vec![Output::literal(prefix), self, Output::literal(suffix)])
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Output::Null => true,
            Output::Literal(s) => s.is_empty(),
            Output::Sequence(children) => children.iter().all(Output::is_null),
        }
    }

    /// Render to a plain string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Output::Null => {}
            Output::Literal(s) => out.push_str(s),
            Output::Sequence(children) => {
                for child in children {
                    child.render_into(out);
                }
            }
        }
    }
}

impl From<&str> for Output {
    fn from(s: &str) -> Self {
        Output::literal(s)
    }
}

impl From<&String> for Output {
    fn from(s: &String) -> Self {
        Output::literal(s.as_str())
    }
}

impl From<String> for Output {
    fn from(s: String) -> Self {
        Output::literal(s)
    }
}

/// Build a rendered string from template parts.
///
/// ```
/// use citegen_core::{output::Output, template};
///
/// let volume = "";
/// let s = template!["Journal", Output::affixed(", ", volume, ""), "."];
/// assert_eq!(s, "Journal.");
/// ```
#[macro_export]
macro_rules! template {
    ($($part:expr),* $(,)?) => {
        $crate::output::Output::sequence(vec![$($crate::output::Output::from($part)),*]).render()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_empty_is_null() {
        assert!(Output::literal("").is_null());
        assert!(!Output::literal(" ").is_null());
    }

    #[test]
    fn test_sequence_drops_nulls() {
        let out = Output::sequence(vec![Output::Null, Output::literal("a"), Output::Null]);
        assert_eq!(out, Output::Sequence(vec![Output::literal("a")]));
        assert_eq!(Output::sequence(vec![Output::Null]), Output::Null);
    }

    #[test]
    fn test_join_skips_nulls_without_doubling_delimiters() {
        let out = Output::join(
            vec![
                Output::Null,
                Output::literal("a"),
                Output::Null,
                Output::literal("b"),
                Output::Null,
            ],
            ", ",
        );
        assert_eq!(out.render(), "a, b");
        assert!(Output::join(vec![Output::Null], ", ").is_null());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(Output::literal("x").wrap("(", ")").render(), "(x)");
        assert!(Output::Null.wrap("(", ")").is_null());
    }

    #[test]
    fn test_template_macro_accepts_mixed_parts() {
        let s = template![
            "A",
            String::from("B"),
            Output::affixed("[", "C", "]"),
            Output::affixed("[", "", "]"),
        ];
        assert_eq!(s, "AB[C]");
    }
}
