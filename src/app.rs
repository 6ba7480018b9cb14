//! Application capability
//!
//! The launcher only knows how to build one application instance and
//! drive it to completion once. Everything behind [`Runnable::run`] is
//! the application's own business; the trait keeps that seam narrow so
//! tests can substitute scripted implementations.

use crate::error::Result;

/// A unit of work the launcher can drive to completion exactly once.
pub trait Runnable {
    /// Perform the program's work synchronously, to completion.
    fn run(&self) -> Result<()>;
}

/// The quantumleap application, parameterized by its launch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct App {
    verbose: bool,
}

impl App {
    /// Create an application from the parsed configuration.
    ///
    /// Pure value construction: no I/O, cannot fail.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether verbose diagnostics were requested at launch.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Runnable for App {
    fn run(&self) -> Result<()> {
        log::debug!("application starting (verbose={})", self.verbose);

        // The workload plugs in here. Nothing is wired up yet, so a run
        // completes immediately and silently.

        log::debug!("application finished");
        Ok(())
    }
}
