//! Enrollment record and its field validation
//!
//! [`Enrollment::new`] enforces every field rule. [`Enrollment::register`]
//! is the menu entry path and only asks the course to be non-blank.
//! Records deserialized from the data file are taken as-is.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One student enrolled in one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "CourseName")]
    course_name: String,
}

impl Enrollment {
    /// Validate all three fields and build the record.
    ///
    /// Fields are checked in order (first name, last name, course) and the
    /// first failure is returned.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let course_name = course_name.into();

        validate_first_name(&first_name)?;
        validate_last_name(&last_name)?;
        validate_course_name(&course_name)?;

        Ok(Self {
            first_name,
            last_name,
            course_name,
        })
    }

    /// Build a record from menu input.
    ///
    /// Names follow the same rules as [`Enrollment::new`], but the course
    /// only has to be non-blank; punctuation such as "C++ Intro" is kept.
    pub fn register(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let course_name = course_name.into();

        validate_first_name(&first_name)?;
        validate_last_name(&last_name)?;
        validate_course_present(&course_name)?;

        Ok(Self {
            first_name,
            last_name,
            course_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// First name as shown to users
    pub fn display_first_name(&self) -> String {
        title_case(&self.first_name)
    }

    /// Last name as shown to users
    pub fn display_last_name(&self) -> String {
        title_case(&self.last_name)
    }
}

impl std::fmt::Display for Enrollment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.display_first_name(),
            self.display_last_name(),
            self.course_name
        )
    }
}

/// Letters only, at least one
fn is_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::BlankFirstName);
    }
    if !is_name(value) {
        return Err(ValidationError::FirstName);
    }
    Ok(())
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::BlankLastName);
    }
    if !is_name(value) {
        return Err(ValidationError::LastName);
    }
    Ok(())
}

/// At least one non-whitespace character
pub fn validate_course_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankCourse);
    }
    Ok(())
}

/// Letters, digits and spaces, with at least one non-space character
pub fn validate_course_name(value: &str) -> Result<(), ValidationError> {
    validate_course_present(value)?;
    if !value.chars().all(|c| c == ' ' || c.is_alphanumeric()) {
        return Err(ValidationError::CourseName);
    }
    Ok(())
}

/// Uppercase the first letter of every run of letters and lowercase the rest.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
