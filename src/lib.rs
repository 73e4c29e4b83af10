//! Document forensic analysis library
//! Inspects Word (.docx), PDF, and XML documents for authorship metadata,
//! AI-related keywords, revision-session identifiers, tracked changes,
//! comments, formatting uniformity, and timestamp anomalies, reporting
//! everything as an ordered sequence of tagged findings.

// Configuration and core pipeline
pub mod analyzer;
pub mod batch;
pub mod config;
pub mod error;
pub mod types;

// Document package access
pub mod package;

// Stage 1: Metadata checkers
pub mod metadata;

// Stage 2: RSID analysis
pub mod rsid;

// Stage 3: Content checkers
pub mod content;

// PDF pipeline (metadata + content)
pub mod pdf;

// Report generation
pub mod report;

// Re-exports for crate consumers
pub use analyzer::analyze_file;
pub use batch::analyze_directory;
pub use config::AnalysisConfig;
pub use error::{Error, ReportError, Result};
pub use package::DocumentPackage;
pub use report::{render_text, write_report, ReportFormat};
pub use types::{Category, Finding, FindingKind};
