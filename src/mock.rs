//! Mock implementations for testing
//!
//! Scripted stand-ins for the application seam, so the launch sequence
//! can be unit tested without spawning a process.

use std::sync::Mutex;

use crate::app::Runnable;
use crate::error::{AppError, Result};

/// Scripted application that records how often it ran.
#[derive(Debug)]
pub struct ScriptedApp {
    failure: Option<String>,
    runs: Mutex<u32>,
}

impl ScriptedApp {
    /// A run that completes successfully.
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            runs: Mutex::new(0),
        }
    }

    /// A run that fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            runs: Mutex::new(0),
        }
    }

    /// How many times this application has been run.
    pub fn runs(&self) -> u32 {
        *self.runs.lock().unwrap()
    }
}

impl Runnable for ScriptedApp {
    fn run(&self) -> Result<()> {
        *self.runs.lock().unwrap() += 1;
        match &self.failure {
            Some(message) => Err(AppError::runtime(message.clone())),
            None => Ok(()),
        }
    }
}
