//! Process-level entry helpers and error handling.

/// Report a fatal error and exit with code 1.
///
/// The message goes to stderr so that stdout only ever carries results.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error running bezy-geometry:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    eprintln!("Or visit: https://bezy.org");
    std::process::exit(1);
}

/// Parse the command line arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
