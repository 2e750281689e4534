use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::{Endpoints, USER_AGENT};
use crate::model::{ComponentsResponse, IncidentsResponse};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach {url}: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status { url: Url, status: StatusCode },
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the two status feeds come from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn components(&self) -> Result<ComponentsResponse, FetchError>;

    async fn incidents(&self) -> Result<IncidentsResponse, FetchError>;
}

#[derive(Clone)]
pub struct StatusClient {
    http: Client,
    endpoints: Endpoints,
}

impl fmt::Debug for StatusClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl StatusClient {
    pub fn new(endpoints: Endpoints) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, FetchError> {
        debug!(%url, "fetching status feed");
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status,
            });
        }

        let body = res.text().await.map_err(|source| FetchError::Network {
            url: url.clone(),
            source,
        })?;
        debug!(%url, %status, bytes = body.len(), "status feed received");

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.clone(),
            source,
        })
    }
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn components(&self) -> Result<ComponentsResponse, FetchError> {
        self.get_json(&self.endpoints.components).await
    }

    async fn incidents(&self) -> Result<IncidentsResponse, FetchError> {
        self.get_json(&self.endpoints.incidents).await
    }
}
