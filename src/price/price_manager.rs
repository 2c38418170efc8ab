use super::{PriceQuote, Provider};
use crate::{
    configuration::PriceSettings,
    error_fmt::error_chain_fmt,
    http_client::{get_body, FetchError},
};
use reqwest::Client;
use std::{fmt::Debug, num::ParseFloatError};
use tracing::instrument;

#[derive(thiserror::Error)]
pub enum PriceError {
    #[error("Failed to fetch the bitcoin price from {provider}")]
    Fetch {
        provider: Provider,
        #[source]
        source: FetchError,
    },
    #[error("{provider} sent a price that is not a number: {raw:?}")]
    NumericParse {
        provider: Provider,
        raw: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("{provider} sent a price that is not positive: {price}")]
    NotPositive { provider: Provider, price: f64 },
}

impl Debug for PriceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Clone, Debug)]
pub struct PriceManager {
    http_client: Client,
    settings: PriceSettings,
}

impl PriceManager {
    pub fn build(http_client: Client, settings: PriceSettings) -> PriceManager {
        Self {
            http_client,
            settings,
        }
    }

    #[instrument(skip(self))]
    pub async fn current_price(&self, provider: Provider) -> Result<PriceQuote, PriceError> {
        let url = provider.endpoint(&self.settings);
        tracing::info!("pulling bitcoin price from {}", url);
        let body = get_body(&self.http_client, &url)
            .await
            .map_err(|source| PriceError::Fetch { provider, source })?;

        let raw_price = provider.decode(&body).map_err(|source| {
            tracing::error!("error decoding {} response: {:?}", provider, source);
            PriceError::Fetch {
                provider,
                source: FetchError::JsonDecode {
                    url: url.clone(),
                    source,
                },
            }
        })?;

        let usd_price = raw_price
            .to_usd()
            .map_err(|source| PriceError::NumericParse {
                provider,
                raw: raw_price.to_string(),
                source,
            })?;
        if !usd_price.is_finite() || usd_price <= 0.0 {
            return Err(PriceError::NotPositive {
                provider,
                price: usd_price,
            });
        }

        tracing::info!("{} price: {}", provider, usd_price);
        Ok(PriceQuote {
            source: provider,
            usd_price,
        })
    }
}
