//! quantumleap - command-line launcher
//!
//! Thin binary harness around the library. This is the only place that
//! reads the real process arguments or terminates the process.

use quantumleap::bootstrap;

fn main() {
    let cli = match bootstrap::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        // Usage errors exit with status 2; --help and --version with 0.
        Err(err) => err.exit(),
    };

    init_logging(cli.verbose);

    if let Err(e) = bootstrap::run(&cli) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
