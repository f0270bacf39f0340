//! Fixed-locale date rendering for
//! the template surface.
//!
//! The application displays
//! Vietnamese-style dates
//! (`d/M/yyyy`, no zero padding) on
//! a fixed project timezone.
//! Offset-carrying inputs are
//! converted into that zone; naive
//! inputs are taken as already
//! local.

use chrono::{
  DateTime,
  NaiveDate,
  NaiveDateTime
};
use chrono_tz::Tz;

const PROJECT_TZ: Tz =
  chrono_tz::Asia::Ho_Chi_Minh;

const DATE_FORMAT: &str =
  "%-d/%-m/%Y";
const DATE_TIME_FORMAT: &str =
  "%H:%M:%S %-d/%-m/%Y";

fn parse_local(
  value: &str
) -> Option<NaiveDateTime> {
  let value = value.trim();
  if let Ok(with_offset) =
    DateTime::parse_from_rfc3339(
      value
    )
  {
    return Some(
      with_offset
        .with_timezone(&PROJECT_TZ)
        .naive_local()
    );
  }
  for format in [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
  ] {
    if let Ok(naive) =
      NaiveDateTime::parse_from_str(
        value, format
      )
    {
      return Some(naive);
    }
  }
  NaiveDate::parse_from_str(
    value, "%Y-%m-%d"
  )
  .ok()
  .map(|date| {
    date.and_time(
      chrono::NaiveTime::MIN
    )
  })
}

/// `6/8/2026` for an August 6th.
/// `None` when the input does not
/// parse.
pub fn format_date(
  value: &str
) -> Option<String> {
  parse_local(value).map(|local| {
    local
      .format(DATE_FORMAT)
      .to_string()
  })
}

/// `14:30:05 6/8/2026`. `None`
/// when the input does not parse.
pub fn format_date_time(
  value: &str
) -> Option<String> {
  parse_local(value).map(|local| {
    local
      .format(DATE_TIME_FORMAT)
      .to_string()
  })
}
