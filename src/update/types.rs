use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;

/// What happened to a single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Modification time was rewritten
    Updated {
        matcher: &'static str,
        datetime: NaiveDateTime,
    },
    /// Dry run: the date resolved but nothing was written
    WouldUpdate {
        matcher: &'static str,
        datetime: NaiveDateTime,
    },
    /// No matcher produced a date
    Unresolved,
    /// The date resolved but writing it failed
    Failed {
        matcher: &'static str,
        datetime: NaiveDateTime,
        error: String,
    },
}

impl FileOutcome {
    pub fn resolution(&self) -> Option<(&'static str, NaiveDateTime)> {
        match self {
            FileOutcome::Updated { matcher, datetime }
            | FileOutcome::WouldUpdate { matcher, datetime }
            | FileOutcome::Failed {
                matcher, datetime, ..
            } => Some((*matcher, *datetime)),
            FileOutcome::Unresolved => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Outcome of one run over a directory
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileResult>,
}

impl RunReport {
    pub fn new(target_dir: PathBuf, dry_run: bool) -> Self {
        Self {
            target_dir,
            dry_run,
            files: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: FileResult) {
        self.files.push(result);
    }

    /// Files that were (or in a dry run, would be) updated
    pub fn updated_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f.outcome,
                    FileOutcome::Updated { .. } | FileOutcome::WouldUpdate { .. }
                )
            })
            .count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Unresolved)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Failed { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn midnight() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 9, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn result(name: &str, outcome: FileOutcome) -> FileResult {
        FileResult {
            name: name.to_string(),
            path: PathBuf::from("/photos").join(name),
            outcome,
        }
    }

    #[test]
    fn test_run_report_counts() {
        let mut report = RunReport::new(PathBuf::from("/photos"), false);
        assert!(report.is_empty());

        report.add_result(result(
            "20190916.jpg",
            FileOutcome::Updated {
                matcher: "Generic",
                datetime: midnight(),
            },
        ));
        report.add_result(result("notes.txt", FileOutcome::Unresolved));
        report.add_result(result(
            "20190916-locked.jpg",
            FileOutcome::Failed {
                matcher: "Generic",
                datetime: midnight(),
                error: "Permission denied".to_string(),
            },
        ));

        assert_eq!(report.len(), 3);
        assert_eq!(report.updated_count(), 1);
        assert_eq!(report.unresolved_count(), 1);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_outcome_resolution() {
        let outcome = FileOutcome::WouldUpdate {
            matcher: "Generic",
            datetime: midnight(),
        };
        assert_eq!(outcome.resolution(), Some(("Generic", midnight())));
        assert_eq!(FileOutcome::Unresolved.resolution(), None);
    }

    #[test]
    fn test_file_result_serializes_flat() {
        let json = serde_json::to_value(result(
            "20190916.jpg",
            FileOutcome::WouldUpdate {
                matcher: "Generic",
                datetime: midnight(),
            },
        ))
        .unwrap();

        assert_eq!(json["name"], "20190916.jpg");
        assert_eq!(json["status"], "would_update");
        assert_eq!(json["matcher"], "Generic");
        assert_eq!(json["datetime"], "2019-09-16T00:00:00");
    }
}
