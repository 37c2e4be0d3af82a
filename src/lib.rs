pub mod cli;
pub mod confirm;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod scanner;
pub mod touch;
pub mod update;

pub use error::{AppError, ExitCode};
pub use matcher::{
    resolve, FilenameMatcher, GenericMatcher, Resolution, Resolver, TimestampMatcher, TokenSet,
};
pub use scanner::{scan_directory, FileEntry, ScannerError};
pub use touch::{set_modification_time, TouchError};
pub use update::{process_entries, FileOutcome, FileResult, RunReport, UpdateOptions};
