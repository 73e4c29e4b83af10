//! Metadata scrape/removal indicators
//!
//! Three independent signals that document metadata has been deliberately
//! stripped:
//!   1. `docProps/core.xml` missing from the package entirely (strongest;
//!      short-circuits the other two checks)
//!   2. several key fields blank or absent simultaneously
//!   3. identical creation and modification timestamps, a common artifact
//!      of metadata-reset tools

use crate::types::{Category, CoreProperties, Finding};

pub fn check_scrape_indicators(core_present: bool, props: &CoreProperties) -> Vec<Finding> {
    if !core_present {
        return vec![Finding::tagged(
            Category::Scrape,
            "docProps/core.xml is absent from the file. The core metadata \
             file has been removed entirely.",
        )];
    }

    let mut findings = Vec::new();

    let key_fields = [
        ("author", props.author.is_missing()),
        ("created", props.created.is_missing()),
        ("last_modified", props.modified.is_missing()),
        ("last_modified_by", props.last_modified_by.is_missing()),
    ];
    let blank: Vec<&str> = key_fields
        .iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| *name)
        .collect();
    if blank.len() >= 2 {
        findings.push(Finding::tagged(
            Category::Scrape,
            format!(
                "{}/4 key metadata fields are blank or absent ({}).",
                blank.len(),
                blank.join(", ")
            ),
        ));
    }

    if let (Some(created), Some(modified)) =
        (props.created.as_datetime(), props.modified.as_datetime())
    {
        if created == modified {
            findings.push(Finding::tagged(
                Category::Scrape,
                "'created' and 'last_modified' timestamps are identical. \
                 This can occur when metadata is reset by a removal tool.",
            ));
        }
    }

    findings
}
