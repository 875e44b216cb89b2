//! Course Registration Library
//!
//! A console program for enrolling students in courses:
//! - Validated enrollment records (letters-only names, alphanumeric courses)
//! - Whole-list JSON persistence that degrades to an empty list on failure
//! - An interactive register/show/save/exit menu loop
//!
//! # Example
//!
//! ```no_run
//! use course_registration::{Config, Console, Session};
//!
//! fn main() -> anyhow::Result<()> {
//!     let console = Console::new(std::io::stdin().lock(), std::io::stdout());
//!     let mut session = Session::start(&Config::default(), console)?;
//!     session.run()
//! }
//! ```

pub mod types;
pub mod error;
pub mod config;
pub mod storage;
pub mod console;
pub mod session;
pub mod cli;

// Re-export commonly used types for convenience
pub use types::Enrollment;
pub use error::{StorageError, ValidationError};
pub use config::Config;
pub use storage::EnrollmentStore;
pub use console::{Console, ErrorReporter, MenuChoice};
pub use session::{Session, SessionState};
