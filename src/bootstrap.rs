//! Launch sequence
//!
//! Pure bootstrapper: an argument list goes in, a result comes out.
//! Only the binary harness in `main.rs` terminates the process, which
//! keeps every step here testable without spawning one.

use std::ffi::OsString;

use clap::Parser;

use crate::app::{App, Runnable};
use crate::cli::Cli;
use crate::error::Result;

/// Parse launcher arguments into the launch configuration.
///
/// Takes the argument list explicitly instead of reading the process
/// environment. The first element is the binary name, as with
/// `std::env::args_os`.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Build the one application instance for this invocation and run it.
pub fn run(cli: &Cli) -> Result<()> {
    execute(&App::new(cli.verbose))
}

/// Drive a runnable to completion, exactly once.
pub fn execute<R: Runnable>(app: &R) -> Result<()> {
    log::debug!("launching application");
    app.run()
}
