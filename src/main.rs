use materials_template::config::{RenderConfig, OUTPUT_FILE};
use materials_template::error::TemplateError;
use materials_template::{generate, logging, parse_args};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (input, mode) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(TemplateError::Usage(usage)) => {
            println!("{}", usage);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(input = %input.display(), %mode, "starting");

    let config = RenderConfig::new(mode);
    match generate(&input, Path::new(OUTPUT_FILE), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
