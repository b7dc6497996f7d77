use std::borrow::Cow;
use std::fmt;

use anyhow::{bail, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Offset-aware forms tried after RFC 3339.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Naive forms, read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 `dateModified`. Values without an offset are UTC.
pub fn parse_date_modified(raw: &str) -> Result<DateTime<Utc>> {
    let normalized = normalize_offset(raw.trim());
    let s = normalized.as_ref();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    bail!("invalid ISO-8601 datetime: {:?}", raw)
}

/// Rewrite a trailing `Z` or hours-only `±hh` offset as `±hh:mm`.
/// Date-only values are left alone so `-dd` is not taken for an offset.
fn normalize_offset(s: &str) -> Cow<'_, str> {
    if s.len() <= 10 {
        return Cow::Borrowed(s);
    }
    if let Some(rest) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        return Cow::Owned(format!("{}+00:00", rest));
    }

    let bytes = s.as_bytes();
    let n = bytes.len();
    let hours_only = matches!(bytes[n - 3], b'+' | b'-')
        && bytes[n - 2].is_ascii_digit()
        && bytes[n - 1].is_ascii_digit()
        && bytes[n - 4].is_ascii_digit();
    if hours_only {
        Cow::Owned(format!("{}:00", s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Elapsed time split into display buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeAge {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl RelativeAge {
    /// Negative input (a date in the future) is clamped to zero.
    pub fn from_seconds(seconds: i64) -> Self {
        let s = seconds.max(0);
        Self {
            days: s / 86_400,
            hours: (s / 3_600) % 24,
            minutes: (s / 60) % 60,
        }
    }

    pub fn between(modified: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_seconds((now - modified).num_seconds())
    }
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "Updated {}d ago", self.days)
        } else if self.hours > 0 {
            write!(f, "Updated {}h ago", self.hours)
        } else if self.minutes > 0 {
            write!(f, "Updated {}m ago", self.minutes)
        } else {
            f.write_str("Updated just now")
        }
    }
}

/// Label for a card last modified at `modified`, as seen at `now`.
pub fn relative_label(modified: DateTime<Utc>, now: DateTime<Utc>) -> String {
    RelativeAge::between(modified, now).to_string()
}
