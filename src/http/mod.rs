use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    RequestBuilder, Response,
};
use thiserror::Error;

const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT_NAME: &str = "pr-deploy";

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
            .header(CONTENT_TYPE, "application/json")
    }
}

/// Turns a sent request into its response text, treating any non-2xx status as an error.
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::StatusError {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(text)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("GitHub responded with status {status}: {message}")]
    StatusError { status: u16, message: String },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize request")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
