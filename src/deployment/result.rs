use serde::Serialize;

/// What a run reports on stdout, e.g. `{"deployment":123,"state":"success"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentResult {
    pub deployment: i64,
    pub state: String,
}

impl DeploymentResult {
    pub fn new(deployment: i64, state: impl Into<String>) -> Self {
        DeploymentResult {
            deployment,
            state: state.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
