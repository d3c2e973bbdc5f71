use reqwest::Client;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

const REFERENCE_ALREADY_EXISTS: &str = "Reference already exists";

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

/// Turns a sent request into its body text, mapping non 2xx answers to [`Error::StatusError`].
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::StatusError {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Ok(text)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

// GitHub wraps failures in `{"message": ..., "documentation_url": ...}`
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text)
        .map(|body| body.message)
        .unwrap_or_else(|_| text.to_owned())
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Unexpected response status {status}: {message}")]
    StatusError { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::StatusError { status: 404, .. })
    }

    pub fn is_reference_already_exists(&self) -> bool {
        matches!(
            self,
            Error::StatusError { status: 422, message } if message == REFERENCE_ALREADY_EXISTS
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(cause: serde_json::Error) -> Self {
        Error::ParseResponseError { cause }
    }
}

/// Walks the error chain looking for a `Reference already exists` rejection.
pub fn is_reference_already_exists(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<Error>()
            .is_some_and(Error::is_reference_already_exists)
    })
}
