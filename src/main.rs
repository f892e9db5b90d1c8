use clap::Parser;
use std::process::ExitCode;
use ukoa_converter::cli::{run, setup_logging, Cli};
use ukoa_converter::error::ConversionError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e @ ConversionError::PathNotFound(_)) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) if e.is_parse_error() => {
            eprintln!("Invalid input: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
