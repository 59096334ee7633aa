use crate::configuration::EndpointSettings;
use crate::form::FormFields;
use crate::submission::submission_error::TransportError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Remote service accepting the form as a JSON document.
#[async_trait]
pub trait ContactEndpoint {
    /// Sends `payload` exactly once. Any HTTP response, including 4xx and 5xx, is `Ok`.
    async fn post(&self, payload: &FormFields) -> Result<EndpointResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: Url,
}

impl HttpEndpoint {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub fn from_settings(settings: &EndpointSettings) -> Result<Self> {
        let url = settings.parsed_url().with_context(|| {
            format!(
                "{}::submission::HttpEndpoint: Invalid endpoint url \"{}\"",
                env!("CARGO_PKG_NAME"),
                settings.url
            )
        })?;
        Self::new(url, settings.timeout()).with_context(|| {
            format!(
                "{}::submission::HttpEndpoint: Failed to build HTTP client",
                env!("CARGO_PKG_NAME")
            )
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ContactEndpoint for HttpEndpoint {
    async fn post(&self, payload: &FormFields) -> Result<EndpointResponse, TransportError> {
        // `json` declares `Content-Type: application/json`. The response body is never read.
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await?;
        Ok(EndpointResponse {
            status: response.status().as_u16(),
        })
    }
}
