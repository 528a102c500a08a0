mod deployment_response;
mod deployment_status_response;

pub use deployment_response::Deployment;
pub use deployment_status_response::DeploymentStatus;
