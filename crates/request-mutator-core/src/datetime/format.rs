//! Strict parsing for the `date_format:` rule
//!
//! Validation rules spell formats with PHP-style letters (`Y/m/d`,
//! `Y-m-d\TH:i:sP`). These are translated to chrono strftime patterns before
//! parsing. A format that already contains `%` is treated as strftime.
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use super::anchor;
use crate::config::MutatorConfig;
use crate::error::{MutatorError, Result};
use chrono::format::{parse, ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Utc};

/// Format letters that have no chrono equivalent
const UNSUPPORTED: &str = "SzWtLoBIeTZcrXx+";

/// Translate a rule format into a chrono strftime pattern
pub fn translate_format(format: &str) -> Result<String> {
    if format.contains('%') {
        return Ok(format.to_string());
    }

    let mut pattern = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        let piece = match c {
            '\\' => match chars.next() {
                Some(escaped) => {
                    push_literal(&mut pattern, escaped);
                    continue;
                }
                None => continue,
            },
            // reset markers; missing fields are always reset here
            '!' | '|' => continue,
            'd' | 'j' => "%d",
            'D' => "%a",
            'l' => "%A",
            'N' => "%u",
            'w' => "%w",
            'm' | 'n' => "%m",
            'M' => "%b",
            'F' => "%B",
            'Y' => "%Y",
            'y' => "%y",
            'a' | 'A' => "%p",
            'g' | 'h' => "%I",
            'G' | 'H' => "%H",
            'i' => "%M",
            's' => "%S",
            'u' => "%6f",
            'v' => "%3f",
            'O' => "%z",
            'P' | 'p' => "%:z",
            'U' => "%s",
            c if UNSUPPORTED.contains(c) => {
                return Err(MutatorError::UnsupportedFormat {
                    format: format.to_string(),
                    specifier: c,
                });
            }
            c => {
                push_literal(&mut pattern, c);
                continue;
            }
        };
        pattern.push_str(piece);
    }

    Ok(pattern)
}

fn push_literal(pattern: &mut String, c: char) {
    if c == '%' {
        pattern.push_str("%%");
    } else {
        pattern.push(c);
    }
}

/// Parse a value that must match `format` exactly.
///
/// Missing time fields default to midnight, missing date fields to today and
/// a missing offset to the configured one.
pub fn parse_with_format(
    raw: &str,
    format: &str,
    config: &MutatorConfig,
) -> Result<DateTime<FixedOffset>> {
    let pattern = translate_format(format)?;
    let default_offset = config.offset()?;

    let mut parsed = Parsed::new();
    parse(&mut parsed, raw, StrftimeItems::new(&pattern))
        .and_then(|_| resolve(&parsed, default_offset))
        .map_err(|e| MutatorError::date_format("", raw, format, e))
        .and_then(|(naive, offset)| anchor(naive, offset))
}

fn resolve(
    parsed: &Parsed,
    default_offset: FixedOffset,
) -> ParseResult<(NaiveDateTime, FixedOffset)> {
    let offset = or_default(parsed.to_fixed_offset(), || default_offset)?;

    if let Some(naive) = or_none(parsed.to_naive_datetime_with_offset(offset.local_minus_utc()))? {
        return Ok((naive, offset));
    }

    let date = or_default(parsed.to_naive_date(), || {
        Utc::now().with_timezone(&offset).date_naive()
    })?;
    let time = or_default(parsed.to_naive_time(), || NaiveTime::MIN)?;

    Ok((date.and_time(time), offset))
}

/// Substitute a default only when the fields were absent, not invalid
fn or_default<T>(result: ParseResult<T>, default: impl FnOnce() -> T) -> ParseResult<T> {
    Ok(or_none(result)?.unwrap_or_else(default))
}

fn or_none<T>(result: ParseResult<T>) -> ParseResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == ParseErrorKind::NotEnough => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_translate_common_formats() {
        assert_eq!(translate_format("Y/m/d").unwrap(), "%Y/%m/%d");
        assert_eq!(translate_format("Y-m-d H:i:s").unwrap(), "%Y-%m-%d %H:%M:%S");
        assert_eq!(translate_format("d.m.y g:i A").unwrap(), "%d.%m.%y %I:%M %p");
        assert_eq!(translate_format("Y-m-d\\TH:i:sP").unwrap(), "%Y-%m-%dT%H:%M:%S%:z");
        assert_eq!(translate_format("!Y-m-d|").unwrap(), "%Y-%m-%d");
        assert_eq!(translate_format("Y \\a\\t H").unwrap(), "%Y at %H");
    }

    #[test]
    fn test_strftime_is_passed_through() {
        assert_eq!(translate_format("%d/%m/%Y").unwrap(), "%d/%m/%Y");
    }

    #[test]
    fn test_unsupported_specifier() {
        let err = translate_format("jS F Y").unwrap_err();
        assert!(matches!(err, MutatorError::UnsupportedFormat { specifier: 'S', .. }));
    }

    #[test]
    fn test_parse_date_only_format_is_midnight() {
        let dt = parse_with_format("2017/01/23", "Y/m/d", &MutatorConfig::default()).unwrap();
        let expected = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2017, 1, 23, 0, 0, 0)
            .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_parse_with_time_and_offset() {
        let dt = parse_with_format(
            "2017-01-23T12:34:56+09:00",
            "Y-m-d\\TH:i:sP",
            &MutatorConfig::default(),
        )
        .unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 9 * 3600);
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 34, 56));
    }

    #[test]
    fn test_time_only_format_uses_today() {
        let config = MutatorConfig::default();
        let dt = parse_with_format("12:30", "H:i", &config).unwrap();
        let today = Utc::now().date_naive();
        assert_eq!((dt.hour(), dt.minute()), (12, 30));
        // allow for the clock crossing midnight during the test
        assert!((dt.date_naive() - today).num_days().abs() <= 1);
    }

    #[test]
    fn test_unix_timestamp_format() {
        let dt = parse_with_format("1485129600", "U", &MutatorConfig::default()).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2017, 1, 23));
    }

    #[test]
    fn test_mismatch_is_a_format_error() {
        let config = MutatorConfig::default();
        for raw in ["2017-01-23", "2017/01/23 extra", "2017/13/01", "23/01/2017"] {
            let err = parse_with_format(raw, "Y/m/d", &config).unwrap_err();
            match err {
                MutatorError::DateFormat { value, format, .. } => {
                    assert_eq!(value, raw);
                    assert_eq!(format, "Y/m/d");
                }
                other => panic!("unexpected error for {raw:?}: {other:?}"),
            }
        }
    }
}
