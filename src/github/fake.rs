//! In-memory [`DeploymentsApi`] that records every call it receives.

use super::{
    request::{CreateDeploymentRequest, CreateDeploymentStatusRequest},
    response::{Deployment, DeploymentStatus},
    DeploymentsApi,
};
use crate::http::Error;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateDeployment {
        owner: String,
        repo: String,
        request: CreateDeploymentRequest,
    },
    CreateDeploymentStatus {
        owner: String,
        repo: String,
        deployment_id: i64,
        request: CreateDeploymentStatusRequest,
    },
}

pub struct FakeDeploymentsApi {
    calls: Mutex<Vec<Call>>,
    deployment_id: i64,
    acknowledged_state: Option<String>,
    fail_deployment: bool,
    fail_status: bool,
}

impl FakeDeploymentsApi {
    pub fn new() -> Self {
        FakeDeploymentsApi {
            calls: Mutex::new(vec![]),
            deployment_id: 123,
            acknowledged_state: None,
            fail_deployment: false,
            fail_status: false,
        }
    }

    pub fn deployment_id(mut self, deployment_id: i64) -> Self {
        self.deployment_id = deployment_id;
        self
    }

    /// Report this state for every status instead of echoing the requested one.
    pub fn acknowledging(mut self, state: impl Into<String>) -> Self {
        self.acknowledged_state = Some(state.into());
        self
    }

    pub fn failing_deployment(mut self) -> Self {
        self.fail_deployment = true;
        self
    }

    pub fn failing_status(mut self) -> Self {
        self.fail_status = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_name(name: &str) -> Result<(), Error> {
        if name.is_empty() || name.contains('/') {
            return Err(Error::StatusError {
                status: 404,
                message: format!("invalid owner or repository name `{}`", name),
            });
        }
        Ok(())
    }
}

impl DeploymentsApi for FakeDeploymentsApi {
    async fn create_deployment(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateDeploymentRequest,
    ) -> Result<Deployment, Error> {
        self.record(Call::CreateDeployment {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            request: request.clone(),
        });

        Self::check_name(owner)?;
        Self::check_name(repo)?;

        if self.fail_deployment {
            return Err(Error::StatusError {
                status: 500,
                message: "deployment failed".to_owned(),
            });
        }

        Ok(Deployment {
            id: self.deployment_id,
            git_ref: request.git_ref.clone(),
            environment: request.environment.clone(),
            repository_url: format!("https://www.github.com/{}/{}", owner, repo),
        })
    }

    async fn create_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: i64,
        request: &CreateDeploymentStatusRequest,
    ) -> Result<DeploymentStatus, Error> {
        self.record(Call::CreateDeploymentStatus {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            deployment_id,
            request: request.clone(),
        });

        Self::check_name(owner)?;
        Self::check_name(repo)?;

        if self.fail_status {
            return Err(Error::StatusError {
                status: 500,
                message: "status failed".to_owned(),
            });
        }

        Ok(DeploymentStatus {
            id: 1,
            state: self
                .acknowledged_state
                .clone()
                .unwrap_or_else(|| request.state.clone()),
            environment: request.environment.clone(),
            environment_url: Some(request.environment_url.clone()),
            deployment_url: Some(request.environment_url.clone()),
        })
    }
}
