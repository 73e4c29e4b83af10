//! Analysis configuration
//!
//! All checkers take their keyword and name lists from here so a config
//! file can extend them without a rebuild. `Default` carries the built-in
//! lists; a partial config file overrides only the keys it names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunable inputs for the checker pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// AI-related keywords scanned against OOXML core-property text fields.
    pub ai_keywords: Vec<String>,
    /// Expanded keyword list for PDF metadata fields.
    pub pdf_ai_keywords: Vec<String>,
    /// Author names considered generic placeholders.
    pub generic_authors: Vec<String>,
    /// Comment bodies longer than this many characters are truncated
    /// with an ellipsis marker.
    pub comment_preview_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            ai_keywords: to_strings(&[
                "ai",
                "artificial intelligence",
                "chatgpt",
                "gpt-3",
                "gpt-4",
                "dall-e",
                "midjourney",
                "stable diffusion",
                "copilot",
            ]),
            pdf_ai_keywords: to_strings(&[
                "chatgpt",
                "gpt-4",
                "gpt-3",
                "openai",
                "dall-e",
                "midjourney",
                "stable diffusion",
                "copilot",
                "claude",
                "gemini",
                "bard",
                "llm",
                "artificial intelligence",
                "ai-generated",
            ]),
            generic_authors: to_strings(&["user", "unknown", "author", "admin", "default"]),
            comment_preview_chars: 120,
        }
    }
}

impl AnalysisConfig {
    /// Loads a config file, trying JSON first and YAML second.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;
        serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e| Error::Config(format!("config parsing error: {e}")))
    }

    /// Case-insensitive scan of one text value against a keyword list;
    /// returns the first keyword that matches.
    pub fn first_keyword_hit<'a>(keywords: &'a [String], value: &str) -> Option<&'a str> {
        let lower = value.to_lowercase();
        keywords
            .iter()
            .find(|k| lower.contains(&k.to_lowercase()))
            .map(String::as_str)
    }

    pub fn is_generic_author(&self, author: &str) -> bool {
        let normalized = author.trim().to_lowercase();
        self.generic_authors.iter().any(|g| g.to_lowercase() == normalized)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
