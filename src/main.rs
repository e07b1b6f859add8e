//! ihya - Build the Ihya Quran app's static JSON assets

mod cli;
mod error;
mod pipeline;

use crate::cli::Cli;
use crate::error::ErrorKind;
use clap::Parser;
use exn::ResultExt;
use ihya_config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    let config = match Config::load(cli.config.as_deref(), &cli.overrides()).or_raise(|| ErrorKind::Config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:?}");
            return ExitCode::FAILURE;
        },
    };

    if cli.print_config {
        return match serde_json::to_string_pretty(&config) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    match pipeline::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:?}");
            ExitCode::FAILURE
        },
    }
}
