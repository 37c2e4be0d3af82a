mod generic;
mod timestamp;
mod types;

pub use generic::GenericMatcher;
pub use timestamp::TimestampMatcher;
pub use types::*;

use once_cell::sync::Lazy;
use tracing::debug;

static DEFAULT_RESOLVER: Lazy<Resolver> = Lazy::new(Resolver::new);

/// Resolve a filename with the default matcher list
pub fn resolve(filename: &str) -> Option<Resolution> {
    DEFAULT_RESOLVER.resolve(filename)
}

/// Ordered list of matchers; the first one that both matches and converts wins.
pub struct Resolver {
    matchers: Vec<Box<dyn FilenameMatcher>>,
}

impl Resolver {
    /// Calendar dates are a stronger signal than a bare digit run, so Generic goes first.
    pub fn new() -> Self {
        Self {
            matchers: vec![Box::new(GenericMatcher), Box::new(TimestampMatcher)],
        }
    }

    pub fn matchers(&self) -> impl Iterator<Item = &(dyn FilenameMatcher + 'static)> + '_ {
        self.matchers.iter().map(|m| m.as_ref())
    }

    pub fn resolve(&self, filename: &str) -> Option<Resolution> {
        let resolution = self.matchers().find_map(|matcher| {
            matcher.parse(filename).map(|datetime| Resolution {
                matcher: matcher.name(),
                datetime,
            })
        });

        match &resolution {
            Some(r) => debug!(filename, matcher = r.matcher, datetime = %r.datetime, "Resolved"),
            None => debug!(filename, "No matcher produced a date"),
        }

        resolution
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.matchers().map(|m| m.name()))
            .finish()
    }
}
