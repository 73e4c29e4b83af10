//! Shared data model for the analysis pipeline

pub mod document;
pub mod fields;
pub mod finding;

pub use document::{
    AppProperties, CoreProperties, PdfDate, PdfMetadata, RsidTable, StyleDistribution,
};
pub use fields::{FieldValue, TimestampValue};
pub use finding::{Category, Finding, FindingKind};
