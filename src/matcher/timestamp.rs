use chrono::{Local, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::types::{FilenameMatcher, TokenSet};

// Milliseconds since the Unix epoch, e.g. VID-1568291659773.mp4.
// Ten or more digits starting with "1"; may start right after other digits.
static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<timestamp>1[0-9]{9,})").unwrap());

/// Raw Unix epoch milliseconds, as chat apps name their downloads
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampMatcher;

impl FilenameMatcher for TimestampMatcher {
    fn name(&self) -> &'static str {
        "Timestamp"
    }

    fn pattern(&self) -> &Regex {
        &TIMESTAMP_REGEX
    }

    fn tokens_to_date(&self, tokens: &TokenSet<'_>) -> Option<NaiveDateTime> {
        let Some(millis) = tokens.number::<i64>("timestamp") else {
            trace!(timestamp = tokens.get("timestamp"), "Timestamp overflows i64");
            return None;
        };

        match Local.timestamp_millis_opt(millis).single() {
            Some(instant) => Some(instant.naive_local()),
            None => {
                trace!(millis, "Timestamp outside representable range");
                None
            }
        }
    }
}
