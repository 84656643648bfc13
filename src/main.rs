use crate::http::{HttpClient, ReqwestClient};
use anyhow::{Context, Result};
use log::{error, info};
use std::path::Path;
use std::process::ExitCode;

mod config;
mod discord;
mod error;
mod http;
mod logger;

fn run(config_path: &Path, client: &impl HttpClient) -> Result<()> {
    let config = config::load(config_path).context("Error loading configuration file")?;

    config.validate().context("Invalid configuration")?;

    discord::post_webhook(&config, client).context("Error sending webhook")?;

    Ok(())
}

fn main() -> ExitCode {
    logger::init();

    let result = ReqwestClient::new()
        .context("Unable to create HTTP client")
        .and_then(|client| run(Path::new(config::CONFIG_PATH), &client));

    match result {
        Ok(()) => {
            info!("Webhook sent successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // `{:#}` prints the whole source chain.
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
