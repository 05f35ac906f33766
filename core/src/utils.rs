//! Utility functions and types.

use std::fmt;

/// Redact hides a secret when formatted.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 characters prints `***`.
/// - Longer input keeps its first and last three characters, so two redacted
///   keys can still be told apart in logs.
///
/// ```
/// use bookproxy_core::utils::Redact;
///
/// assert_eq!(format!("{:?}", Redact::from("AKIDEXAMPLE")), "***");
/// assert_eq!(format!("{}", Redact::from("sk-proj-abcdefghijkl")), "sk-***jkl");
/// ```
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl fmt::Display for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars = self.0.chars().count();
        if chars == 0 {
            return f.write_str("EMPTY");
        }
        if chars < 12 {
            return f.write_str("***");
        }

        let head: String = self.0.chars().take(3).collect();
        let tail: String = self.0.chars().skip(chars - 3).collect();
        write!(f, "{head}***{tail}")
    }
}

impl fmt::Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
