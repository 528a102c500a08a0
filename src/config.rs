use crate::{deployment::Deploy, error::Error, github::github_client::DEFAULT_API_URL};
use clap::Parser;
use log::Level;
use std::{convert::Infallible, num::ParseIntError};

const DEFAULT_DEPLOYMENT_STATE: &str = "pending";

/// Every flag can also be set through the environment variable of the same name in upper case.
///
/// An explicit flag wins over the environment. CI runners often export inputs they have no
/// value for as empty strings, so an empty deployment ID, API URL or log level means "unset".
#[derive(Debug, Parser)]
#[command(name = "pr-deploy", version, about = "Report pull request deployments to GitHub")]
pub struct Config {
    /// The GitHub pull_request event payload
    #[arg(long = "event_payload", env = "EVENT_PAYLOAD")]
    pub event_payload: String,

    /// The URL that the deployment can be accessed at
    #[arg(long = "environment_url", env = "ENVIRONMENT_URL", default_value = "")]
    pub environment_url: String,

    /// The name of the deployment environment (e.g. staging)
    #[arg(long = "environment_name", env = "ENVIRONMENT_NAME", default_value = "")]
    pub environment_name: String,

    /// GitHub token
    #[arg(long = "github_token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// The status of the deployment (success, pending, inactive, etc)
    #[arg(long = "deployment_state", env = "DEPLOYMENT_STATE", default_value = DEFAULT_DEPLOYMENT_STATE)]
    pub deployment_state: String,

    /// The ID of the deployment (if omitted, one will be created)
    #[arg(
        long = "deployment_id",
        env = "DEPLOYMENT_ID",
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = parse_deployment_id
    )]
    pub deployment_id: i64,

    /// GitHub API root, for GitHub Enterprise hosts
    #[arg(
        long = "github_api_url",
        env = "GITHUB_API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = parse_api_url
    )]
    pub github_api_url: String,

    /// One of error, warn, info, debug, trace
    #[arg(
        long = "log_level",
        env = "LOG_LEVEL",
        default_value_t = Level::Info,
        value_parser = parse_log_level
    )]
    pub log_level: Level,
}

fn parse_deployment_id(value: &str) -> Result<i64, ParseIntError> {
    match value.trim() {
        "" => Ok(0),
        id => id.parse(),
    }
}

fn parse_api_url(value: &str) -> Result<String, Infallible> {
    match value.trim() {
        "" => Ok(DEFAULT_API_URL.to_owned()),
        url => Ok(url.to_owned()),
    }
}

fn parse_log_level(value: &str) -> Result<Level, log::ParseLevelError> {
    match value.trim() {
        "" => Ok(Level::Info),
        level => level.parse(),
    }
}

impl Config {
    pub fn token(&self) -> Result<&str, Error> {
        match self.github_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(Error::Configuration("GITHUB_TOKEN not set".to_owned())),
        }
    }

    pub fn deploy(&self) -> Deploy {
        Deploy {
            event_payload: self.event_payload.to_owned(),
            environment_name: self.environment_name.to_owned(),
            environment_url: self.environment_url.to_owned(),
            state: self.deployment_state.to_owned(),
            deployment_id: Some(self.deployment_id).filter(|id| *id != 0),
        }
    }
}
