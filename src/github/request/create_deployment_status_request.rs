use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDeploymentStatusRequest {
    pub state: String,
    pub environment: String,
    pub environment_url: String,
}

impl CreateDeploymentStatusRequest {
    pub fn new(
        state: impl Into<String>,
        environment: impl Into<String>,
        environment_url: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            environment: environment.into(),
            environment_url: environment_url.into(),
        }
    }
}
