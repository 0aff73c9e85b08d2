use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use gradient_bmp::generation_log::GenerationLogger;
use gradient_bmp::{app, parse_args, ConfigError};

fn usage() {
    eprintln!(
        "  Usage: gradient-bmp [--reflection] [--resolution <resolution-DPI>] \
         [--coeff <brightness-coefficient>] <output-filename> <width-inches> \
         <height-inches> <brightness-power>"
    );
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(ConfigError::Usage) => {
            usage();
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = app::run(&options, &GenerationLogger::new()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
