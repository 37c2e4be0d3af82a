use std::path::Path;
use tracing::{debug, info, warn};

use crate::matcher::Resolver;
use crate::scanner::FileEntry;
use crate::touch::set_modification_time;

use super::types::{FileOutcome, FileResult, RunReport};

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub dry_run: bool,
}

/// Resolve every regular file in `entries` and rewrite its modification time.
///
/// A file that does not resolve, or whose timestamp cannot be written, is recorded and
/// skipped; the loop always runs to the end. `on_result` sees each result as it is produced.
pub fn process_entries(
    target_dir: &Path,
    entries: &[FileEntry],
    resolver: &Resolver,
    options: &UpdateOptions,
    mut on_result: impl FnMut(&FileResult),
) -> RunReport {
    let mut report = RunReport::new(target_dir.to_path_buf(), options.dry_run);

    for entry in entries {
        if !entry.is_file {
            debug!(name = %entry.name, "Skipping non-regular file");
            continue;
        }

        let outcome = match resolver.resolve(&entry.name) {
            None => FileOutcome::Unresolved,
            Some(resolution) if options.dry_run => FileOutcome::WouldUpdate {
                matcher: resolution.matcher,
                datetime: resolution.datetime,
            },
            Some(resolution) => match set_modification_time(&entry.path, resolution.datetime) {
                Ok(()) => {
                    info!(name = %entry.name, datetime = %resolution.datetime, "Updated");
                    FileOutcome::Updated {
                        matcher: resolution.matcher,
                        datetime: resolution.datetime,
                    }
                }
                Err(e) => {
                    warn!(name = %entry.name, error = %e, "Failed to update");
                    FileOutcome::Failed {
                        matcher: resolution.matcher,
                        datetime: resolution.datetime,
                        error: e.to_string(),
                    }
                }
            },
        };

        let result = FileResult {
            name: entry.name.clone(),
            path: entry.path.clone(),
            outcome,
        };
        on_result(&result);
        report.add_result(result);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_directory;
    use chrono::{Local, NaiveDate, TimeZone};
    use filetime::FileTime;
    use std::fs;
    use tempfile::tempdir;

    fn mtime_seconds(path: &Path) -> i64 {
        FileTime::from_last_modification_time(&fs::metadata(path).unwrap()).unix_seconds()
    }

    fn local_seconds(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        let naive = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap().timestamp()
    }

    #[test]
    fn test_updates_resolved_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("IMG_20190916_152241_512.jpg"), "").unwrap();
        fs::write(dir.path().join("VID-1568291659773.mp4"), "").unwrap();
        fs::write(dir.path().join("vacation_photo.jpg"), "").unwrap();

        let entries = scan_directory(dir.path()).unwrap();
        let report = process_entries(
            dir.path(),
            &entries,
            &Resolver::new(),
            &UpdateOptions::default(),
            |_| {},
        );

        assert_eq!(report.len(), 3);
        assert_eq!(report.updated_count(), 2);
        assert_eq!(report.unresolved_count(), 1);
        assert_eq!(report.failed_count(), 0);

        assert_eq!(
            mtime_seconds(&dir.path().join("IMG_20190916_152241_512.jpg")),
            local_seconds(2019, 9, 16, 15, 22, 41)
        );
        assert_eq!(
            mtime_seconds(&dir.path().join("VID-1568291659773.mp4")),
            1_568_291_659
        );
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("20190916.jpg");
        fs::write(&path, "").unwrap();
        let before = mtime_seconds(&path);

        let entries = scan_directory(dir.path()).unwrap();
        let report = process_entries(
            dir.path(),
            &entries,
            &Resolver::new(),
            &UpdateOptions { dry_run: true },
            |_| {},
        );

        assert!(report.dry_run);
        assert!(matches!(
            report.files[0].outcome,
            FileOutcome::WouldUpdate {
                matcher: "Generic",
                ..
            }
        ));
        assert_eq!(mtime_seconds(&path), before);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("20190916")).unwrap();

        let entries = scan_directory(dir.path()).unwrap();
        let report = process_entries(
            dir.path(),
            &entries,
            &Resolver::new(),
            &UpdateOptions::default(),
            |_| {},
        );

        assert!(report.is_empty());
    }

    #[test]
    fn test_write_failure_does_not_stop_the_loop() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("20200101.jpg"), "").unwrap();

        let mut entries = vec![FileEntry::new(
            "20190916.jpg".to_string(),
            dir.path().join("missing").join("20190916.jpg"),
            true,
        )];
        entries.extend(scan_directory(dir.path()).unwrap());

        let mut seen = Vec::new();
        let report = process_entries(
            dir.path(),
            &entries,
            &Resolver::new(),
            &UpdateOptions::default(),
            |r| seen.push(r.name.clone()),
        );

        assert_eq!(seen, ["20190916.jpg", "20200101.jpg"]);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.updated_count(), 1);
    }
}
