mod config;
mod deployment;
mod error;
mod event;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use github::GithubClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();
    logger::init(config.log_level)?;

    log::info!("Starting");
    let token = config.token().context("Cannot load configuration")?;
    let client = GithubClient::new(&config.github_api_url, token);

    let result = deployment::deploy(&client, &config.deploy())
        .await
        .context("Cannot report the deployment")?;

    let output = result
        .to_json()
        .context("Cannot serialize the deployment result")?;
    println!("{}", output);

    Ok(())
}
