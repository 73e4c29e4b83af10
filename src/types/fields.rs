//! Three-state field model for optional document metadata
//!
//! Document properties distinguish a field that was never written from one
//! that is present but empty. Collapsing both into `None` would lose the
//! distinctions the scrape detector and the app/author checkers report on,
//! so every optional field carries an explicit `Absent | Blank | Value`
//! state.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional text field of a document's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// The element or dictionary key does not exist at all.
    Absent,
    /// Present but empty or whitespace-only.
    Blank,
    Value(String),
}

impl FieldValue {
    /// Classifies raw element text: empty/whitespace-only becomes `Blank`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            FieldValue::Blank
        } else {
            FieldValue::Value(text)
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Value(s) => Some(s),
            _ => None,
        }
    }

    /// True for both `Absent` and `Blank`.
    pub fn is_missing(&self) -> bool {
        !matches!(self, FieldValue::Value(_))
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Absent
    }
}

/// Optional timestamp field, normalized to UTC at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampValue {
    Absent,
    /// Present but empty, or present with text the W3CDTF parser rejects.
    Blank,
    Value(DateTime<Utc>),
}

impl TimestampValue {
    /// Parses a W3CDTF timestamp as written in OOXML core properties.
    /// A timestamp with no zone designator is assumed to be UTC.
    pub fn from_w3cdtf(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return TimestampValue::Blank;
        }
        match parse_w3cdtf(text) {
            Some(dt) => TimestampValue::Value(dt),
            None => TimestampValue::Blank,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            TimestampValue::Value(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        !matches!(self, TimestampValue::Value(_))
    }
}

impl Default for TimestampValue {
    fn default() -> Self {
        TimestampValue::Absent
    }
}

/// W3CDTF / ISO 8601 parsing for core-property dates, e.g.
/// `2024-01-01T00:00:00Z`, with or without fractional seconds or zone.
fn parse_w3cdtf(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }
    None
}
