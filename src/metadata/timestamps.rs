//! Creation/modification timestamp reporting

use chrono::{DateTime, Utc};

use crate::types::{Category, CoreProperties, Finding};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Reports the document's creation and last-modification timestamps and
/// the elapsed time between them. Timestamps arrive already normalized to
/// UTC (zoneless source values are assumed UTC at parse time).
pub fn check_timestamps(props: &CoreProperties) -> Vec<Finding> {
    let created = props.created.as_datetime();
    let modified = props.modified.as_datetime();

    let mut findings = Vec::new();
    if let Some(created) = created {
        findings.push(Finding::tagged(
            Category::Timestamp,
            format!("Created:       {}", format_utc(created)),
        ));
    }
    if let Some(modified) = modified {
        findings.push(Finding::tagged(
            Category::Timestamp,
            format!("Last Modified: {}", format_utc(modified)),
        ));
    }

    if let (Some(created), Some(modified)) = (created, modified) {
        let delta_seconds = (modified - created).num_seconds();
        if delta_seconds < 0 {
            findings.push(Finding::tagged(
                Category::Timestamp,
                "Note: 'Last Modified' timestamp is earlier than 'Created'; \
                 metadata may be inconsistent.",
            ));
        } else {
            let minutes = delta_seconds / 60;
            let seconds = delta_seconds % 60;
            findings.push(Finding::tagged(
                Category::Timestamp,
                format!("Time between creation and last save: {minutes} min {seconds} sec"),
            ));
        }
    }

    findings
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimestampValue;

    fn props(created: &str, modified: &str) -> CoreProperties {
        CoreProperties {
            created: TimestampValue::from_w3cdtf(created),
            modified: TimestampValue::from_w3cdtf(modified),
            ..CoreProperties::default()
        }
    }

    #[test]
    fn one_hour_delta_reports_sixty_minutes() {
        let findings = check_timestamps(&props("2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z"));
        assert_eq!(findings.len(), 3);
        assert_eq!(
            findings[2].text,
            "Time between creation and last save: 60 min 0 sec"
        );
    }

    #[test]
    fn negative_delta_is_an_inconsistency_note() {
        let findings = check_timestamps(&props("2024-01-01T01:00:00Z", "2024-01-01T00:00:00Z"));
        assert!(findings[2].text.starts_with("Note: 'Last Modified'"));
    }

    #[test]
    fn lone_created_timestamp_reports_without_delta() {
        let core = CoreProperties {
            created: TimestampValue::from_w3cdtf("2024-01-01T00:00:00Z"),
            ..CoreProperties::default()
        };
        let findings = check_timestamps(&core);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "Created:       2024-01-01 00:00:00 UTC");
    }

    #[test]
    fn no_timestamps_no_findings() {
        assert!(check_timestamps(&CoreProperties::default()).is_empty());
    }
}
