mod codes;

pub use codes::ExitCode;

use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("{failed} files could not be updated")]
    UpdateFailed { failed: usize, files: Vec<String> },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::UpdateFailed { .. } => ExitCode::UpdateFailed,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::UpdateFailed { failed, files } => {
                let mut msg = format!(
                    "The modification date of {} files could not be changed:\n",
                    failed
                );
                for file in files.iter().take(10) {
                    msg.push_str(&format!("  - {}\n", file));
                }
                if files.len() > 10 {
                    msg.push_str(&format!("  ... and {} more\n", files.len() - 10));
                }
                msg.push_str("\nAll other files were processed.");
                msg
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = AppError::DirectoryNotFound {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);

        let err = AppError::NotADirectory {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);

        let err = AppError::PermissionDenied {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::PermissionError);

        let err = AppError::UpdateFailed {
            failed: 1,
            files: vec![],
        };
        assert_eq!(err.exit_code(), ExitCode::UpdateFailed);
    }

    #[test]
    fn test_update_failed_lists_files() {
        let files: Vec<String> = (0..12).map(|i| format!("2019091{}.jpg", i % 10)).collect();
        let err = AppError::UpdateFailed {
            failed: files.len(),
            files,
        };

        let msg = err.detailed_message();
        assert!(msg.contains("12 files"));
        assert!(msg.contains("20190910.jpg"));
        assert!(msg.contains("... and 2 more"));
    }

    #[test]
    fn test_scanner_error_conversion() {
        let scanner_err = ScannerError::PathNotFound(PathBuf::from("/missing"));
        let app_err: AppError = scanner_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::DirectoryNotFound);

        let scanner_err = ScannerError::PermissionDenied(PathBuf::from("/root"));
        let app_err: AppError = scanner_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::PermissionError);
    }
}
