use bcy::cli::Cli;
use bcy::commands::{build_config, execute};
use bcy::error::CliError;
use bcy::logger::initialize as LoggerInitialize;

use blockcypher_client::BlockCypherClient;

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

const LOG_DIR_NAME: &str = "blockcypher";

#[tokio::main]
async fn main() -> ExitCode {
    // Values in .env feed clap's `env` fallbacks, so load it before parsing.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli, dotenv.ok()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli, dotenv_path: Option<PathBuf>) -> Result<(), CliError> {
    let log_dir = match &cli.log_dir {
        Some(dir) => dir.clone(),
        None => dirs::cache_dir()
            .map(|dir| dir.join(LOG_DIR_NAME))
            .unwrap_or_else(std::env::temp_dir),
    };
    create_dir_all(&log_dir)
        .map_err(|e| CliError::cli(format!("Failed to create log directory: {e}")))?;
    LoggerInitialize(&log_dir, cli.log_level.to_level_filter())?;

    if let Some(path) = dotenv_path {
        debug!("Loaded .env from: {}", path.display());
    }

    let config = build_config(&cli)?;
    let client = BlockCypherClient::new(config)?;
    let output = execute(&client, &cli.command).await?;

    let pretty = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::cli(format!("Failed to render output: {e}")))?;
    println!("{pretty}");
    Ok(())
}
