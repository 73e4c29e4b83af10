//! PDF date string parsing
//!
//! PDF dates use the `D:YYYYMMDDHHmmSSOHH'mm'` syntax where every field
//! after the year is optional and the offset may be `Z`, absent, or an
//! `+HH'mm'` pair. Values that parse are normalized to UTC; callers fall
//! back to reporting the raw string otherwise.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PDF_DATE: Regex = Regex::new(
        r"^D:(\d{4})(\d{2})?(\d{2})?(\d{2})?(\d{2})?(\d{2})?(?:([Zz])|([+-])(\d{2})(?:'(\d{2})'?)?)?"
    )
    .unwrap();
}

pub fn parse_pdf_date(raw: &str) -> Option<DateTime<Utc>> {
    let caps = PDF_DATE.captures(raw.trim())?;

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = capture_or(&caps, 2, 1);
    let day: u32 = capture_or(&caps, 3, 1);
    let hour: u32 = capture_or(&caps, 4, 0);
    let minute: u32 = capture_or(&caps, 5, 0);
    let second: u32 = capture_or(&caps, 6, 0);

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;

    let offset_seconds = match (caps.get(7), caps.get(8)) {
        (Some(_), _) => 0,
        (None, Some(sign)) => {
            let hours: i32 = capture_or(&caps, 9, 0) as i32;
            let minutes: i32 = capture_or(&caps, 10, 0) as i32;
            let magnitude = (hours * 60 + minutes) * 60;
            if sign.as_str() == "-" {
                -magnitude
            } else {
                magnitude
            }
        }
        // No offset designator: assume UTC.
        (None, None) => 0,
    };

    let offset = FixedOffset::east_opt(offset_seconds)?;
    let local = offset.from_local_datetime(&naive).single()?;
    Some(local.with_timezone(&Utc))
}

fn capture_or(caps: &regex::Captures<'_>, index: usize, default: u32) -> u32 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(default)
}
