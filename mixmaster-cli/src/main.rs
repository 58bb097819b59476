//! Entry point for the `mixmaster` binary.
#![forbid(unsafe_code)]

use std::process::ExitCode;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() -> ExitCode {
    match mixmaster_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(mixmaster_cli::CliError::ArgumentParsing(err)) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if err.print().is_err() {
                return ExitCode::FAILURE;
            }
            code
        }
        Err(err) => {
            eprintln!("mixmaster: {err}");
            ExitCode::FAILURE
        }
    }
}
