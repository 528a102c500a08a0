use serde::Serialize;

/// Body of `POST /repos/{owner}/{repo}/deployments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDeploymentRequest {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub environment: String,
    pub transient_environment: bool,
    pub required_contexts: Vec<String>,
}

impl CreateDeploymentRequest {
    /// Pull request deployments are always transient and skip commit status checks.
    pub fn new(git_ref: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            git_ref: git_ref.into(),
            environment: environment.into(),
            transient_environment: true,
            required_contexts: vec![],
        }
    }
}
