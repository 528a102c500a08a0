#[cfg(test)]
pub mod fake;
pub mod github_client;
mod macros;
pub mod request;
pub mod response;

pub use github_client::GithubClient;

use self::{
    request::{CreateDeploymentRequest, CreateDeploymentStatusRequest},
    response::{Deployment, DeploymentStatus},
};
use crate::http::Error;

/// The two GitHub deployment operations this tool relies on.
pub trait DeploymentsApi {
    /// Creates a new deployment. Every call creates another one.
    async fn create_deployment(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateDeploymentRequest,
    ) -> Result<Deployment, Error>;

    async fn create_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: i64,
        request: &CreateDeploymentStatusRequest,
    ) -> Result<DeploymentStatus, Error>;
}
