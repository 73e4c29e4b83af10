//! Finding records produced by the analysis checkers

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Category tag carried by a finding, used by the presentation layer
/// for color coding. One tag per checker family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Keyword,
    Scrape,
    App,
    Rsid,
    Timestamp,
    Revision,
    Author,
    Content,
    Track,
    Comment,
    Format,
    Gdocs,
}

impl Category {
    /// Bracketed tag as rendered in text output, e.g. `[KEYWORD]`.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Keyword => "[KEYWORD]",
            Category::Scrape => "[SCRAPE]",
            Category::App => "[APP]",
            Category::Rsid => "[RSID]",
            Category::Timestamp => "[TIMESTAMP]",
            Category::Revision => "[REVISION]",
            Category::Author => "[AUTHOR]",
            Category::Content => "[CONTENT]",
            Category::Track => "[TRACK]",
            Category::Comment => "[COMMENT]",
            Category::Format => "[FORMAT]",
            Category::Gdocs => "[GDOCS]",
        }
    }

    /// Fixed display color for this tag. The renderer maps each of the
    /// twelve categories to one palette entry; untagged lines use the
    /// widget default.
    pub fn color(self) -> &'static str {
        match self {
            Category::Keyword => "#e53935",
            Category::Scrape => "#d81b60",
            Category::App => "#8e24aa",
            Category::Rsid => "#3949ab",
            Category::Timestamp => "#1e88e5",
            Category::Revision => "#00897b",
            Category::Author => "#43a047",
            Category::Content => "#7cb342",
            Category::Track => "#fb8c00",
            Category::Comment => "#f4511e",
            Category::Format => "#6d4c41",
            Category::Gdocs => "#546e7a",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.tag())
    }
}

/// Structural role of a finding.
///
/// Carried explicitly so the dispatcher can decide whether an analysis
/// produced anything informative without inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Section marker, e.g. `--- Metadata Analysis ---`.
    Section,
    /// "No X found" line emitted when a checker came up empty.
    Placeholder,
    /// An actual observation, including caught checker failures.
    Observation,
}

/// One reported observation, optionally tagged by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Option<Category>,
    pub text: String,
    pub kind: FindingKind,
}

impl Finding {
    /// Section marker line.
    pub fn section(text: impl Into<String>) -> Self {
        Finding {
            category: None,
            text: text.into(),
            kind: FindingKind::Section,
        }
    }

    /// "Nothing found" line for a checker that came up empty. May carry a
    /// tag so the placeholder still renders in the checker's color.
    pub fn placeholder(category: Option<Category>, text: impl Into<String>) -> Self {
        Finding {
            category,
            text: text.into(),
            kind: FindingKind::Placeholder,
        }
    }

    /// Tagged observation.
    pub fn tagged(category: Category, text: impl Into<String>) -> Self {
        Finding {
            category: Some(category),
            text: text.into(),
            kind: FindingKind::Observation,
        }
    }

    /// Untagged observation (explanatory or error line).
    pub fn note(text: impl Into<String>) -> Self {
        Finding {
            category: None,
            text: text.into(),
            kind: FindingKind::Observation,
        }
    }

    pub fn is_observation(&self) -> bool {
        self.kind == FindingKind::Observation
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.category {
            Some(cat) => write!(f, "{} {}", cat.tag(), self.text),
            None => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_finding_renders_bracketed_tag() {
        let finding = Finding::tagged(Category::Keyword, "Match found in 'author': ChatGPT");
        assert_eq!(
            finding.to_string(),
            "[KEYWORD] Match found in 'author': ChatGPT"
        );
    }

    #[test]
    fn section_renders_bare_text() {
        let finding = Finding::section("--- Metadata Analysis ---");
        assert_eq!(finding.to_string(), "--- Metadata Analysis ---");
        assert!(!finding.is_observation());
    }

    #[test]
    fn placeholder_is_not_an_observation() {
        let finding = Finding::placeholder(Some(Category::Comment), "No comments found in document.");
        assert!(!finding.is_observation());
        assert_eq!(finding.to_string(), "[COMMENT] No comments found in document.");
    }

    #[test]
    fn every_category_has_a_distinct_color() {
        use std::collections::HashSet;
        let all = [
            Category::Keyword,
            Category::Scrape,
            Category::App,
            Category::Rsid,
            Category::Timestamp,
            Category::Revision,
            Category::Author,
            Category::Content,
            Category::Track,
            Category::Comment,
            Category::Format,
            Category::Gdocs,
        ];
        let colors: HashSet<_> = all.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), all.len());
    }
}
