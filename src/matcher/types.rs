use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use serde::Serialize;
use std::ops::Range;

/// Substrings captured by a single successful pattern search.
#[derive(Debug)]
pub struct TokenSet<'h> {
    haystack: &'h str,
    captures: Captures<'h>,
}

impl<'h> TokenSet<'h> {
    pub fn new(haystack: &'h str, captures: Captures<'h>) -> Self {
        Self { haystack, captures }
    }

    /// Text of a named group, if that group took part in the match
    pub fn get(&self, name: &str) -> Option<&'h str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// Parse a named group as a number. Missing groups and overflow both yield `None`.
    pub fn number<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name)?.parse().ok()
    }

    /// Byte range of the whole match within the filename
    pub fn range(&self) -> Range<usize> {
        self.captures.get(0).map_or(0..0, |m| m.range())
    }

    /// Byte offset where a named group starts
    pub fn start_of(&self, name: &str) -> Option<usize> {
        self.captures.name(name).map(|m| m.start())
    }

    /// True when the match ends in the middle of a longer digit run
    pub fn followed_by_digit(&self) -> bool {
        self.haystack[self.range().end..].starts_with(|c: char| c.is_ascii_digit())
    }
}

/// A named, fixed filename convention plus the rule turning its tokens into a date-time.
///
/// Implementations are immutable and shared read-only, so they must be `Send + Sync`.
pub trait FilenameMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn pattern(&self) -> &Regex;

    /// Search (not anchor) the filename for the pattern, starting at byte `start`
    fn to_tokens_at<'h>(&self, filename: &'h str, start: usize) -> Option<TokenSet<'h>> {
        self.pattern()
            .captures_at(filename, start)
            .map(|captures| TokenSet::new(filename, captures))
    }

    fn to_tokens<'h>(&self, filename: &'h str) -> Option<TokenSet<'h>> {
        self.to_tokens_at(filename, 0)
    }

    /// Where to search again after `tokens` failed to convert. Must be past the previous start.
    fn resume_at(&self, tokens: &TokenSet<'_>) -> usize {
        tokens.range().end
    }

    /// Strict conversion; `None` when the digits are not a real date-time
    fn tokens_to_date(&self, tokens: &TokenSet<'_>) -> Option<NaiveDateTime>;

    /// Convert the leftmost hit; if it is not a real date-time, keep searching after it
    fn parse(&self, filename: &str) -> Option<NaiveDateTime> {
        let mut start = 0;
        while let Some(tokens) = self.to_tokens_at(filename, start) {
            if let Some(datetime) = self.tokens_to_date(&tokens) {
                return Some(datetime);
            }
            start = self.resume_at(&tokens);
        }
        None
    }
}

/// The first successful (matcher, date-time) pair for a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub matcher: &'static str,
    pub datetime: NaiveDateTime,
}
