use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::types::{FilenameMatcher, TokenSet};

// Calendar date, optional time of day, optional milliseconds:
//   IMG_20190916_152241_512.jpg, Screenshot_2019-09-16-15-22-41.png, 20190916.pdf
// The leading group keeps the year from starting inside a longer digit run.
// Field ranges are loose on purpose; tokens_to_date does the real validation.
static GENERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:^|[^0-9])",
        r"(?P<year>(?:19|20)[0-9]{2})[-_]?(?P<month>[01][0-9])[-_]?(?P<day>[0-3][0-9])",
        r"(?:[-_]?(?P<hour>[0-2][0-9])[-_]?(?P<minute>[0-6][0-9])[-_]?(?P<second>[0-6][0-9])",
        r"(?:[-_]?(?P<millisecond>[0-9]{3}))?)?",
    ))
    .unwrap()
});

/// Dates written out as `YYYYMMDD[HHMMSS[mmm]]`, as cameras and phones name their exports
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericMatcher;

impl FilenameMatcher for GenericMatcher {
    fn name(&self) -> &'static str {
        "Generic"
    }

    fn pattern(&self) -> &Regex {
        &GENERIC_REGEX
    }

    // The next hit needs a non-digit before its year, so restarting at this year skips it.
    fn resume_at(&self, tokens: &TokenSet<'_>) -> usize {
        let start = tokens.range().start;
        tokens.start_of("year").unwrap_or(start).max(start + 1)
    }

    fn tokens_to_date(&self, tokens: &TokenSet<'_>) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            tokens.number("year")?,
            tokens.number("month")?,
            tokens.number("day")?,
        );
        let Some(date) = date else {
            trace!(
                year = tokens.get("year"),
                month = tokens.get("month"),
                day = tokens.get("day"),
                "Not a calendar date"
            );
            return None;
        };

        if tokens.get("hour").is_none() {
            return date.and_hms_opt(0, 0, 0);
        }

        let millisecond = match tokens.get("millisecond") {
            Some(_) => tokens.number("millisecond")?,
            None => 0,
        };

        let datetime = date.and_hms_milli_opt(
            tokens.number("hour")?,
            tokens.number("minute")?,
            tokens.number("second")?,
            millisecond,
        );
        if datetime.is_some() {
            return datetime;
        }

        // The time digits are only the head of a longer digit run, not a time block
        if tokens.followed_by_digit() {
            trace!("Digits after the date are not a time, keeping the date alone");
            return date.and_hms_opt(0, 0, 0);
        }

        trace!(
            hour = tokens.get("hour"),
            minute = tokens.get("minute"),
            second = tokens.get("second"),
            "Not a valid time of day"
        );
        None
    }
}
