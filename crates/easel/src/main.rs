//! Easel - structured slide-outline and diagram generation service.

use anyhow::Context;
use clap::Parser;
use easel::cli::{Cli, Commands, handle_check_config, handle_generate, handle_serve};
use easel_core::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs).map_err(anyhow::Error::msg)?;

    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Serve { port } => handle_serve(config_path, *port).await?,
        Commands::Generate { retries, target } => {
            let result = handle_generate(config_path, target, *retries).await?;
            let rendered =
                serde_json::to_string_pretty(&result).context("Failed to render the result")?;
            println!("{}", rendered);
        }
        Commands::CheckConfig => {
            let summary = handle_check_config(config_path)?;
            println!("Configuration OK\n{}", summary);
        }
    }

    Ok(())
}
