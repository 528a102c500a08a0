use super::{
    request::{CreateDeploymentRequest, CreateDeploymentStatusRequest, SerializeRequest},
    response::{Deployment, DeploymentStatus},
    DeploymentsApi,
};
use crate::{http::Error, post};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        GithubClient {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    fn parse<T: DeserializeOwned>(response: &str) -> Result<T, Error> {
        serde_json::from_str::<T>(response).map_err(|cause| Error::ParseResponseError { cause })
    }
}

impl DeploymentsApi for GithubClient {
    async fn create_deployment(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateDeploymentRequest,
    ) -> Result<Deployment, Error> {
        let uri = format!("{}/repos/{}/{}/deployments", self.base_url, owner, repo);
        log::debug!("POST {}", uri);

        let body = request.into_request()?;
        let response = post!(self.client, &self.token, &uri, body)?;

        Self::parse(&response)
    }

    async fn create_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: i64,
        request: &CreateDeploymentStatusRequest,
    ) -> Result<DeploymentStatus, Error> {
        let uri = format!(
            "{}/repos/{}/{}/deployments/{}/statuses",
            self.base_url, owner, repo, deployment_id
        );
        log::debug!("POST {}", uri);

        let body = request.into_request()?;
        let response = post!(self.client, &self.token, &uri, body)?;

        Self::parse(&response)
    }
}
