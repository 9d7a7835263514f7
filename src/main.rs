// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use qualitycheck::cli::{self, Args, EXIT_USAGE};

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level().as_str()),
    )
    .init();

    match cli::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}
