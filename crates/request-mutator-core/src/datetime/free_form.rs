//! Free-form date parsing for the `date` rule
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use super::anchor;
use crate::config::MutatorConfig;
use crate::error::{MutatorError, Result};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Formats that carry their own offset
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parse a date/time value written in any of the commonly accepted shapes
pub fn parse_free_form(raw: &str, config: &MutatorConfig) -> Result<DateTime<FixedOffset>> {
    let offset = config.offset()?;
    let input = raw.trim();

    for format in &config.date_formats {
        if let Some(dt) = try_format(input, format, offset)? {
            return Ok(dt);
        }
    }

    if let Some(dt) = relative(input, offset)? {
        return Ok(dt);
    }

    if let Some(seconds) = input.strip_prefix('@') {
        if let Some(dt) = seconds
            .parse::<i64>()
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, 0))
        {
            return Ok(dt.with_timezone(&offset));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Ok(dt);
    }

    for format in OFFSET_FORMATS.iter().chain(DATETIME_FORMATS).chain(DATE_FORMATS) {
        if let Some(dt) = try_format(input, format, offset)? {
            return Ok(dt);
        }
    }

    Err(MutatorError::date_parse("", raw, "unrecognised date/time format"))
}

/// Try one chrono format, from the most specific reading to the least
fn try_format(
    input: &str,
    format: &str,
    offset: FixedOffset,
) -> Result<Option<DateTime<FixedOffset>>> {
    if let Ok(dt) = DateTime::parse_from_str(input, format) {
        return Ok(Some(dt));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
        return anchor(naive, offset).map(Some);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, format) {
        return anchor(date.and_time(NaiveTime::MIN), offset).map(Some);
    }
    Ok(None)
}

fn relative(input: &str, offset: FixedOffset) -> Result<Option<DateTime<FixedOffset>>> {
    let now = Utc::now().with_timezone(&offset);
    let today = now.date_naive();

    let date = match input.to_ascii_lowercase().as_str() {
        "now" => return Ok(Some(now)),
        "today" | "midnight" => Some(today),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        _ => return Ok(None),
    };

    match date {
        Some(date) => anchor(date.and_time(NaiveTime::MIN), offset).map(Some),
        None => Ok(None),
    }
}
