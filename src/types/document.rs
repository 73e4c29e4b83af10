//! Structured records extracted from document packages

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::{FieldValue, TimestampValue};

/// Core properties of an OOXML package (`docProps/core.xml`).
///
/// Every field keeps the three-state absent/blank/value distinction; a
/// package with no core part at all is represented by `Default` (all
/// fields `Absent`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreProperties {
    pub author: FieldValue,
    pub last_modified_by: FieldValue,
    pub comments: FieldValue,
    pub title: FieldValue,
    pub subject: FieldValue,
    pub keywords: FieldValue,
    pub category: FieldValue,
    pub revision: FieldValue,
    pub created: TimestampValue,
    pub modified: TimestampValue,
}

/// Extended properties of an OOXML package (`docProps/app.xml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppProperties {
    pub application: FieldValue,
    pub app_version: FieldValue,
}

/// Per-session revision identifiers observed in a document body, plus the
/// master session list declared in `word/settings.xml`.
///
/// Body counts preserve first-seen order so output is stable under the
/// document's own traversal order.
#[derive(Debug, Clone, Default)]
pub struct RsidTable {
    order: Vec<String>,
    counts: HashMap<String, usize>,
    /// Number of sessions declared in the settings master list;
    /// `None` when the settings part or its rsid list is absent.
    pub settings_count: Option<usize>,
}

impl RsidTable {
    pub fn record(&mut self, rsid: &str) {
        if let Some(count) = self.counts.get_mut(rsid) {
            *count += 1;
        } else {
            self.order.push(rsid.to_string());
            self.counts.insert(rsid.to_string(), 1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn distinct_sessions(&self) -> usize {
        self.order.len()
    }

    /// Iterates `(rsid, occurrence count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(move |rsid| (rsid.as_str(), self.counts[rsid]))
    }
}

/// Paragraph counts per style name, iterated in descending-count order
/// with ties broken by first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct StyleDistribution {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl StyleDistribution {
    pub fn record(&mut self, style_name: &str) {
        if let Some(count) = self.counts.get_mut(style_name) {
            *count += 1;
        } else {
            self.order.push(style_name.to_string());
            self.counts.insert(style_name.to_string(), 1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(style name, paragraph count)` sorted by descending count,
    /// first-encountered order on ties.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(usize, &str, usize)> = self
            .order
            .iter()
            .enumerate()
            .map(|(seen, name)| (seen, name.as_str(), self.counts[name]))
            .collect();
        ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
        ranked.into_iter().map(|(_, name, count)| (name, count)).collect()
    }

    pub fn style_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Flat record of a PDF's `Info` dictionary fields.
///
/// Absence of the dictionary itself is handled by the checker before this
/// record is built, so a `PdfMetadata` always corresponds to a present
/// dictionary whose individual fields may still be absent or blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfMetadata {
    pub creator: FieldValue,
    pub producer: FieldValue,
    pub author: FieldValue,
    pub title: FieldValue,
    pub subject: FieldValue,
    pub keywords: FieldValue,
    pub creation_date: PdfDate,
    pub modification_date: PdfDate,
}

/// A PDF date field: the raw `D:`-syntax string as stored, plus the parsed
/// UTC timestamp when the syntax is well-formed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfDate {
    pub raw: FieldValue,
    pub parsed: Option<DateTime<Utc>>,
}
