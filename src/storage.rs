//! Enrollment file persistence
//!
//! The whole collection is read and written at once as a JSON array.
//! `load` and `save` never fail on a storage problem: it goes to an
//! [`ErrorReporter`] and the caller keeps running. They only return an
//! error when the reporter itself cannot deliver the message.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::console::ErrorReporter;
use crate::error::StorageError;
use crate::types::Enrollment;

/// Default data file, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "enrollments.json";

const READ_FAILED: &str = "Error: There was a problem with reading the file.";
const WRITE_FAILED: &str = "Error: There was a problem with writing to the file.\n\
                            Please check that the file is not open by another program.";

/// JSON file holding every enrollment
#[derive(Debug, Clone)]
pub struct EnrollmentStore {
    path: PathBuf,
}

impl Default for EnrollmentStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl EnrollmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the data file
    pub fn try_load(&self) -> Result<Vec<Enrollment>, StorageError> {
        let file = File::open(&self.path).map_err(|source| StorageError::Open {
            path: self.path.clone(),
            source,
        })?;

        let mut contents = String::new();
        BufReader::new(file)
            .read_to_string(&mut contents)
            .map_err(|source| StorageError::Read {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<Enrollment> =
            serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} enrollments from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Load the data file, or report the problem and hand back `fallback`.
    pub fn load(
        &self,
        fallback: Vec<Enrollment>,
        reporter: &mut dyn ErrorReporter,
    ) -> anyhow::Result<Vec<Enrollment>> {
        match self.try_load() {
            Ok(records) => Ok(records),
            Err(err) => {
                if err.is_not_found() {
                    info!("No enrollment file at {}", self.path.display());
                } else {
                    warn!("Failed to load enrollments: {}", err);
                }
                reporter.report(READ_FAILED, Some(&err))?;
                Ok(fallback)
            }
        }
    }

    /// Overwrite the data file with `records`
    pub fn try_save(&self, records: &[Enrollment]) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|source| StorageError::Open {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
            if source.is_io() {
                StorageError::Write {
                    path: self.path.clone(),
                    source: source.into(),
                }
            } else {
                StorageError::Serialize(source)
            }
        })?;

        writer.flush().map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!("Saved {} enrollments to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Save, reporting any failure. Returns whether the write succeeded.
    pub fn save(
        &self,
        records: &[Enrollment],
        reporter: &mut dyn ErrorReporter,
    ) -> anyhow::Result<bool> {
        match self.try_save(records) {
            Ok(()) => Ok(true),
            Err(err) => {
                warn!("Failed to save enrollments: {}", err);
                reporter.report(WRITE_FAILED, Some(&err))?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Captures reports instead of printing them
    #[derive(Default)]
    struct Recorder {
        reports: Vec<(String, Option<String>)>,
    }

    impl ErrorReporter for Recorder {
        fn report(
            &mut self,
            message: &str,
            error: Option<&dyn std::error::Error>,
        ) -> anyhow::Result<()> {
            self.reports
                .push((message.to_string(), error.map(|e| e.to_string())));
            Ok(())
        }
    }

    /// Reporter whose output channel is gone
    struct Unreachable;

    impl ErrorReporter for Unreachable {
        fn report(
            &mut self,
            _message: &str,
            _error: Option<&dyn std::error::Error>,
        ) -> anyhow::Result<()> {
            anyhow::bail!("terminal closed")
        }
    }

    fn sample() -> Vec<Enrollment> {
        vec![
            Enrollment::new("Jane", "Doe", "Biology101").unwrap(),
            Enrollment::new("Bob", "Smith", "Python 100").unwrap(),
            Enrollment::new("ada", "lovelace", "Math").unwrap(),
        ]
    }

    #[test]
    fn test_default_path() {
        assert_eq!(EnrollmentStore::default().path(), Path::new("enrollments.json"));
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = EnrollmentStore::new(dir.path().join("enrollments.json"));
        let records = sample();

        store.try_save(&records).unwrap();
        let loaded = store.try_load().unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = EnrollmentStore::new(dir.path().join("enrollments.json"));

        store.try_save(&sample()).unwrap();
        let one = vec![Enrollment::new("Solo", "Student", "Art").unwrap()];
        store.try_save(&one).unwrap();

        assert_eq!(store.try_load().unwrap(), one);
    }

    #[test]
    fn test_empty_collection_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = EnrollmentStore::new(dir.path().join("enrollments.json"));

        store.try_save(&[]).unwrap();
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let store = EnrollmentStore::new(dir.path().join("missing.json"));
        let mut recorder = Recorder::default();

        let loaded = store.load(Vec::new(), &mut recorder).unwrap();

        assert!(loaded.is_empty());
        assert_eq!(recorder.reports.len(), 1);
        assert_eq!(recorder.reports[0].0, READ_FAILED);
        assert!(recorder.reports[0].1.is_some());
        assert!(store.try_load().unwrap_err().is_not_found());
    }

    #[test]
    fn test_malformed_file_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enrollments.json");
        std::fs::write(&path, "[{\"FirstName\": \"Jane\"").unwrap();
        let store = EnrollmentStore::new(&path);
        let mut recorder = Recorder::default();

        let fallback = vec![Enrollment::new("Keep", "Me", "Bio").unwrap()];
        let loaded = store.load(fallback.clone(), &mut recorder).unwrap();

        assert_eq!(loaded, fallback);
        assert_eq!(recorder.reports.len(), 1);
        assert!(matches!(store.try_load(), Err(StorageError::Parse { .. })));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enrollments.json");
        std::fs::write(&path, r#"{"FirstName": "Jane"}"#).unwrap();
        let store = EnrollmentStore::new(&path);

        assert!(matches!(store.try_load(), Err(StorageError::Parse { .. })));
    }

    #[test]
    fn test_loaded_records_are_not_revalidated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enrollments.json");
        std::fs::write(
            &path,
            r#"[{"FirstName": "R2", "LastName": "D2", "CourseName": "Droid-101"}]"#,
        )
        .unwrap();
        let store = EnrollmentStore::new(&path);

        let loaded = store.try_load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].first_name(), "R2");
        assert_eq!(loaded[0].course_name(), "Droid-101");
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file for writing
        let store = EnrollmentStore::new(dir.path());
        let mut recorder = Recorder::default();

        assert!(!store.save(&sample(), &mut recorder).unwrap());
        assert_eq!(recorder.reports.len(), 1);
        assert!(recorder.reports[0].0.contains("problem with writing"));
        assert!(recorder.reports[0].0.contains("open by another program"));
    }

    #[test]
    fn test_successful_save_reports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = EnrollmentStore::new(dir.path().join("enrollments.json"));
        let mut recorder = Recorder::default();

        assert!(store.save(&sample(), &mut recorder).unwrap());
        assert!(recorder.reports.is_empty());
    }

    #[test]
    fn test_undeliverable_report_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let missing = EnrollmentStore::new(dir.path().join("missing.json"));
        assert!(missing.load(Vec::new(), &mut Unreachable).is_err());

        let unwritable = EnrollmentStore::new(dir.path());
        assert!(unwritable.save(&sample(), &mut Unreachable).is_err());

        // Nothing to report, so the reporter is never consulted
        let ok = EnrollmentStore::new(dir.path().join("enrollments.json"));
        assert!(ok.save(&sample(), &mut Unreachable).unwrap());
        assert_eq!(ok.load(Vec::new(), &mut Unreachable).unwrap(), sample());
    }
}
