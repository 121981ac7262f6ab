//! Date and time parsing for the `date` and `date_format:` rules
//!
//! Two entry points are provided:
//!
//! - [`parse_free_form`] accepts the loose shapes people type into forms
//!   (`2017-01-23`, `2017-01-23 12:34:56`, RFC 3339, `today`, `@1485129600`...)
//! - [`parse_with_format`] parses strictly against the format carried by a
//!   `date_format:` rule, written with PHP-style format letters (`Y/m/d`)
//!
//! Values without an offset are anchored at the offset configured in
//! [`MutatorConfig`](crate::MutatorConfig).
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

pub mod format;
pub mod free_form;

pub use format::{parse_with_format, translate_format};
pub use free_form::parse_free_form;

use crate::error::{MutatorError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

/// Attach an offset to a naive local date-time
pub(crate) fn anchor(naive: NaiveDateTime, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    offset.from_local_datetime(&naive).single().ok_or_else(|| {
        MutatorError::date_parse("", naive.to_string(), "local time is out of range for the offset")
    })
}
