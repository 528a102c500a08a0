use crate::{
    error::Error,
    event::PullRequestEvent,
    github::{
        request::{CreateDeploymentRequest, CreateDeploymentStatusRequest},
        response::DeploymentStatus,
        DeploymentsApi,
    },
};

/// Creates a transient deployment of the pull request head and returns its ID.
///
/// Not idempotent: each call registers a new deployment on GitHub.
pub async fn create_deployment<A: DeploymentsApi>(
    api: &A,
    event: &PullRequestEvent,
    environment_name: &str,
) -> Result<i64, Error> {
    let name = event.repository_name()?;
    let request = CreateDeploymentRequest::new(event.git_ref(), environment_name);

    log::info!(
        "Creating deployment of {} to `{}` in {}",
        request.git_ref,
        environment_name,
        name
    );

    let deployment = api
        .create_deployment(name.owner(), name.repo(), &request)
        .await
        .map_err(|cause| Error::Remote {
            operation: "creating deployment",
            cause,
        })?;

    log::debug!(
        "created deployment {} of {} to `{}` in {}",
        deployment.id,
        deployment.git_ref,
        deployment.environment,
        deployment.repository_url
    );

    Ok(deployment.id)
}

/// Records `state` against the deployment and returns the status GitHub acknowledged.
///
/// The acknowledged state may differ from the requested one.
pub async fn create_deployment_status<A: DeploymentsApi>(
    api: &A,
    deployment_id: i64,
    event: &PullRequestEvent,
    environment_name: &str,
    state: &str,
    environment_url: &str,
) -> Result<DeploymentStatus, Error> {
    let name = event.repository_name()?;
    let request = CreateDeploymentStatusRequest::new(state, environment_name, environment_url);

    log::info!(
        "Setting deployment {} of {} to `{}`",
        deployment_id,
        name,
        state
    );

    let status = api
        .create_deployment_status(name.owner(), name.repo(), deployment_id, &request)
        .await
        .map_err(|cause| Error::Remote {
            operation: "creating deployment status",
            cause,
        })?;

    log::debug!(
        "created status {} in `{}` with environment url {:?} for {:?}",
        status.id,
        status.environment,
        status.environment_url,
        status.deployment_url
    );

    Ok(status)
}
