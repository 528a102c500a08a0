mod repository;

pub use repository::RepositoryName;

use crate::error::Error;
use serde::Deserialize;

/// The parts of a GitHub `pull_request` webhook payload needed to deploy it.
///
/// Every other field of the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    repository: Repository,
    #[serde(default)]
    pull_request: PullRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Repository {
    #[serde(default)]
    full_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PullRequest {
    #[serde(default)]
    number: u64,
}

impl PullRequestEvent {
    #[cfg(test)]
    pub fn new(full_name: impl Into<String>, number: u64) -> Self {
        PullRequestEvent {
            repository: Repository {
                full_name: full_name.into(),
            },
            pull_request: PullRequest { number },
        }
    }

    pub fn full_name(&self) -> &str {
        &self.repository.full_name
    }

    pub fn number(&self) -> u64 {
        self.pull_request.number
    }

    pub fn repository_name(&self) -> Result<RepositoryName, Error> {
        self.full_name().parse()
    }

    /// The ref GitHub exposes for the pull request head, e.g. `pull/1/head`.
    pub fn git_ref(&self) -> String {
        format!("pull/{}/head", self.number())
    }
}

pub fn decode(payload: &[u8]) -> Result<PullRequestEvent, Error> {
    let event = serde_json::from_slice::<PullRequestEvent>(payload)
        .map_err(|cause| Error::Decode { cause })?;

    // only pull request refs can be deployed
    if event.number() == 0 {
        return Err(Error::Validation(
            "event must be a pull request, but payload did not contain a pull request number"
                .to_owned(),
        ));
    }

    log::debug!(
        "decoded pull request #{} of {}",
        event.number(),
        event.full_name()
    );

    Ok(event)
}
