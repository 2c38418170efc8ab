use crate::error_fmt::error_chain_fmt;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::{fmt::Debug, time::Duration};
use tracing::instrument;

#[derive(thiserror::Error)]
pub enum FetchError {
    #[error("Failed to reach {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("Failed to decode the json body from {url}")]
    JsonDecode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Debug for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Single GET, no retries. Any non 2xx status is an error.
#[instrument(skip(client))]
pub async fn get_body(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_owned(),
            source,
        })?;

    if !response.status().is_success() {
        tracing::error!("error response from {}: {:?}", url, response);
        return Err(FetchError::HttpStatus {
            url: url.to_owned(),
            status: response.status(),
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Network {
        url: url.to_owned(),
        source,
    })?;
    tracing::info!("raw body: {:?}", body);
    Ok(body)
}

pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let body = get_body(client, url).await?;
    serde_json::from_str::<T>(&body).map_err(|source| {
        tracing::error!("error converting body into json: {:?}", source);
        FetchError::JsonDecode {
            url: url.to_owned(),
            source,
        }
    })
}
