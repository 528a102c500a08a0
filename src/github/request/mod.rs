mod create_deployment_request;
mod create_deployment_status_request;

pub use create_deployment_request::CreateDeploymentRequest;
pub use create_deployment_status_request::CreateDeploymentStatusRequest;

use crate::http::Error;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(&self) -> Result<String, Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string(self).map_err(|cause| Error::SerializeRequestError { cause })
    }
}

impl SerializeRequest for CreateDeploymentRequest {}
impl SerializeRequest for CreateDeploymentStatusRequest {}
