mod process;
mod types;

pub use process::{process_entries, UpdateOptions};
pub use types::{FileOutcome, FileResult, RunReport};
