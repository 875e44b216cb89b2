//! Terminal presentation: menu, prompts, listings and error output
//!
//! `Console` is generic over its reader and writer so the whole
//! registration loop can run against in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::error::ValidationError;
use crate::types::{self, Enrollment};

/// Main menu text
pub const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";

/// Separator printed around enrollment listings
pub const SEPARATOR: &str = "--------------------------------------------------";

pub const INVALID_CHOICE: &str = "Please choose option 1, 2, 3, or 4.";
pub const INVALID_DATA: &str = "One of the values was the incorrect type of data!";

/// Receives user-facing failures: a friendly message and, when there is
/// one, the underlying error. Fails only if the report itself cannot be
/// delivered.
pub trait ErrorReporter {
    fn report(&mut self, message: &str, error: Option<&dyn std::error::Error>) -> Result<()>;
}

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
    /// Anything other than 1-4
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Register,
            "2" => MenuChoice::Show,
            "3" => MenuChoice::Save,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Line-oriented terminal over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line without its terminator.
    /// Returns `None` once input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed at prompt {:?}", prompt);
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn output_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Ask for a menu choice. Anything but 1-4 is reported and comes back
    /// as [`MenuChoice::Invalid`].
    pub fn input_menu_choice(&mut self) -> Result<Option<MenuChoice>> {
        let Some(line) = self.read_line("Enter your menu choice number: ")? else {
            return Ok(None);
        };

        let choice = MenuChoice::parse(&line);
        if choice == MenuChoice::Invalid {
            self.report(INVALID_CHOICE, None)?;
        }
        Ok(Some(choice))
    }

    pub fn output_enrollments(&mut self, enrollments: &[Enrollment]) -> Result<()> {
        writeln!(self.output, "{}", SEPARATOR)?;
        for e in enrollments {
            writeln!(
                self.output,
                "Student {} {} is enrolled in {}",
                e.first_name(),
                e.last_name(),
                e.course_name()
            )?;
        }
        writeln!(self.output, "{}", SEPARATOR)?;
        Ok(())
    }

    /// Prompt for the three fields, rejecting the attempt at the first bad one.
    ///
    /// Returns `None` when a field was rejected (already reported) or input
    /// ran out partway through.
    pub fn input_enrollment(&mut self) -> Result<Option<Enrollment>> {
        let Some(first) = self.read_field(
            "Enter the student's first name: ",
            types::validate_first_name,
        )?
        else {
            return Ok(None);
        };
        let Some(last) = self.read_field(
            "Enter the student's last name: ",
            types::validate_last_name,
        )?
        else {
            return Ok(None);
        };
        let Some(course) = self.read_field(
            "Please enter the name of the course: ",
            types::validate_course_present,
        )?
        else {
            return Ok(None);
        };

        let enrollment = match Enrollment::register(first, last, course) {
            Ok(e) => e,
            Err(err) => {
                self.report(INVALID_DATA, Some(&err))?;
                return Ok(None);
            }
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "You have registered {} {} for {}.",
            enrollment.first_name(),
            enrollment.last_name(),
            enrollment.course_name()
        )?;
        Ok(Some(enrollment))
    }

    fn read_field(
        &mut self,
        prompt: &str,
        validate: fn(&str) -> Result<(), ValidationError>,
    ) -> Result<Option<String>> {
        let Some(value) = self.read_line(prompt)? else {
            return Ok(None);
        };
        if let Err(err) = validate(&value) {
            debug!("Rejected input for {:?}: {}", prompt, err);
            self.report(INVALID_DATA, Some(&err))?;
            return Ok(None);
        }
        Ok(Some(value))
    }

    pub fn output_goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Program Ended")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ErrorReporter for Console<R, W> {
    fn report(&mut self, message: &str, error: Option<&dyn std::error::Error>) -> Result<()> {
        writeln!(self.output, "{}\n", message)?;
        if let Some(err) = error {
            writeln!(self.output, "-- Technical Error Message -- ")?;
            writeln!(self.output, "{}", err)?;
            writeln!(self.output, "{:?}", err)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
