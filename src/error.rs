//! Error types for enrollment validation and persistence

use std::path::PathBuf;
use thiserror::Error;

/// A field entered for an enrollment failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The first name should not be left blank.")]
    BlankFirstName,

    #[error("The first name should not contain numbers.")]
    FirstName,

    #[error("The last name should not be left blank.")]
    BlankLastName,

    #[error("The last name should not contain numbers.")]
    LastName,

    #[error("The course name should not be left blank.")]
    BlankCourse,

    #[error("The course name should not contain special characters.")]
    CourseName,
}

/// Reading or writing the enrollment file failed
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be opened or created
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but reading it failed
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the file failed
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not a JSON array of enrollment objects
    #[error("malformed enrollment data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize enrollments: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StorageError {
    /// True when the failure is just a file that does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::Open { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
