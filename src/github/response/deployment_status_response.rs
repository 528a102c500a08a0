use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentStatus {
    #[serde(default)]
    pub id: i64,
    pub state: String,
    #[serde(default)]
    pub environment: String,
    pub environment_url: Option<String>,
    pub deployment_url: Option<String>,
}
