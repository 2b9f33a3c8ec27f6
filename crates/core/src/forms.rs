//! Form field sanitization and validation helpers.
//!
//! Submitted form values go through the same pipeline everywhere: trim
//! whitespace, check the field-specific rules against the trimmed value,
//! then escape markup-significant characters before the value is persisted
//! or echoed back into a re-rendered form.

use crate::types::Timestamp;

/// A single field-level validation failure.
///
/// Collected into a `Vec` per submission; an empty vec means the form
/// passed and may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Escape markup-significant characters so stored values are inert when
/// rendered into HTML.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trim and escape a submitted value in one step.
pub fn sanitize(raw: &str) -> String {
    escape_html(raw.trim())
}

/// ASCII letters and digits only. Rejects spaces and punctuation.
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parse an ISO-8601 date or datetime into a UTC timestamp.
///
/// Accepts a plain `YYYY-MM-DD` (interpreted as midnight UTC) or a full
/// RFC 3339 datetime. Returns `None` for anything else.
pub fn parse_iso_date(value: &str) -> Option<Timestamp> {
    if let Ok(date) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc());
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&chrono::Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn sanitize_trims_whitespace() {
        assert_eq!(sanitize("  Meerkat  "), "Meerkat");
        assert_eq!(sanitize("\tSuricata suricatta\n"), "Suricata suricatta");
    }

    #[test]
    fn sanitize_escapes_markup() {
        assert_eq!(
            sanitize("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt;"
        );
        assert_eq!(sanitize("a & b"), "a &amp; b");
        assert_eq!(sanitize("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn sanitize_leaves_plain_text_alone() {
        assert_eq!(sanitize("Mammalia"), "Mammalia");
    }

    #[test]
    fn alphanumeric_accepts_letters_and_digits() {
        assert!(is_alphanumeric("Mammalia"));
        assert!(is_alphanumeric("Carnivora2"));
    }

    #[test]
    fn alphanumeric_rejects_spaces_punctuation_and_empty() {
        assert!(!is_alphanumeric("Sugar Glider"));
        assert!(!is_alphanumeric("a-b"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn parse_iso_date_accepts_plain_date() {
        let ts = parse_iso_date("2024-10-03").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 10, 3));
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn parse_iso_date_accepts_rfc3339() {
        let ts = parse_iso_date("2024-10-03T12:30:00Z").unwrap();
        assert_eq!(ts.hour(), 12);
    }

    #[test]
    fn parse_iso_date_rejects_garbage() {
        assert!(parse_iso_date("next tuesday").is_none());
        assert!(parse_iso_date("03/10/2024").is_none());
        assert!(parse_iso_date("").is_none());
    }
}
