//! The registration read-dispatch loop
//!
//! A `Session` owns everything the program mutates: the enrollment list,
//! the store it was loaded from, and the console. Each call to
//! [`Session::step`] performs one state transition.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::console::{Console, MenuChoice};
use crate::storage::EnrollmentStore;
use crate::types::Enrollment;

/// Where the loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MenuDisplay,
    AwaitingChoice,
    Registering,
    Showing,
    Saving,
    /// Terminal
    Exited,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    store: EnrollmentStore,
    enrollments: Vec<Enrollment>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Build a session around an already loaded enrollment list
    pub fn new(console: Console<R, W>, store: EnrollmentStore, enrollments: Vec<Enrollment>) -> Self {
        Self {
            console,
            store,
            enrollments,
            state: SessionState::MenuDisplay,
        }
    }

    /// Load the data file named by `config` (empty on failure) and start a session.
    pub fn start(config: &Config, mut console: Console<R, W>) -> Result<Self> {
        let store = EnrollmentStore::new(config.data_file.clone());
        let enrollments = store.load(Vec::new(), &mut console)?;
        info!(
            "Starting session with {} enrollments from {}",
            enrollments.len(),
            store.path().display()
        );
        Ok(Self::new(console, store, enrollments))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Perform one transition and return the new state
    pub fn step(&mut self) -> Result<SessionState> {
        let next = match self.state {
            SessionState::MenuDisplay => {
                self.console.output_menu()?;
                SessionState::AwaitingChoice
            }
            SessionState::AwaitingChoice => match self.console.input_menu_choice()? {
                None => {
                    info!("Input closed, ending session");
                    SessionState::Exited
                }
                Some(MenuChoice::Register) => SessionState::Registering,
                Some(MenuChoice::Show) => SessionState::Showing,
                Some(MenuChoice::Save) => SessionState::Saving,
                Some(MenuChoice::Exit) => {
                    self.console.output_goodbye()?;
                    SessionState::Exited
                }
                Some(MenuChoice::Invalid) => SessionState::MenuDisplay,
            },
            SessionState::Registering => {
                if let Some(enrollment) = self.console.input_enrollment()? {
                    debug!("Registered {}", enrollment);
                    self.enrollments.push(enrollment);
                }
                SessionState::MenuDisplay
            }
            SessionState::Showing => {
                self.console.output_enrollments(&self.enrollments)?;
                SessionState::MenuDisplay
            }
            SessionState::Saving => {
                if self.store.save(&self.enrollments, &mut self.console)? {
                    self.console.output_enrollments(&self.enrollments)?;
                }
                SessionState::MenuDisplay
            }
            SessionState::Exited => SessionState::Exited,
        };

        self.state = next;
        Ok(next)
    }

    /// Step until the session exits
    pub fn run(&mut self) -> Result<()> {
        while self.step()? != SessionState::Exited {}
        info!("Session ended with {} enrollments in memory", self.enrollments.len());
        Ok(())
    }
}
