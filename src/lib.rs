//! quantumleap - command-line launcher library
//!
//! Provides the lifecycle shell around the quantumleap application:
//! argument parsing, application construction, a single synchronous
//! run, and the failure policy the binary harness enforces.
//!
//! # Modules
//!
//! - [`app`]: Application capability and its default implementation
//! - [`bootstrap`]: Pure launch sequence (arguments in, results out)
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod error;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
