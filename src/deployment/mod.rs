mod manager;
mod result;

pub use manager::{create_deployment, create_deployment_status};
pub use result::DeploymentResult;

use crate::{error::Error, event, github::DeploymentsApi};

/// Everything one run needs to report a deployment.
#[derive(Debug, Clone)]
pub struct Deploy {
    pub event_payload: String,
    pub environment_name: String,
    pub environment_url: String,
    pub state: String,
    /// An existing deployment to report on instead of creating a new one.
    pub deployment_id: Option<i64>,
}

pub async fn deploy<A: DeploymentsApi>(api: &A, deploy: &Deploy) -> Result<DeploymentResult, Error> {
    let event = event::decode(deploy.event_payload.as_bytes())?;

    let deployment_id = match deploy.deployment_id {
        Some(id) => {
            log::info!("Reusing deployment {}", id);
            id
        }
        None => create_deployment(api, &event, &deploy.environment_name).await?,
    };

    let status = create_deployment_status(
        api,
        deployment_id,
        &event,
        &deploy.environment_name,
        &deploy.state,
        &deploy.environment_url,
    )
    .await?;

    Ok(DeploymentResult::new(deployment_id, status.state))
}
