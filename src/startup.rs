use crate::{
    configuration::Settings,
    error_fmt::error_chain_fmt,
    http_client::{build_client, FetchError},
    mempool::MempoolManager,
    menu::{read_selection, write_menu, SelectionError},
    price::{PriceError, PriceManager, Provider},
    report::Report,
};
use chrono::Utc;
use chrono_tz::Tz;
use std::{
    fmt::Debug,
    io::{BufRead, Write},
};
use tracing::instrument;

#[derive(thiserror::Error)]
pub enum ApplicationError {
    #[error("Failed to load timezone {name:?}: {reason}")]
    Timezone { name: String, reason: String },
    #[error("Failed to build the http client")]
    HttpClient(#[source] reqwest::Error),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Price(#[from] PriceError),
    #[error("Failed to get the recommended fees")]
    Fees(#[source] FetchError),
    #[error("Failed to write the report")]
    Output(#[from] std::io::Error),
}

impl Debug for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct Application {
    price_manager: PriceManager,
    mempool_manager: MempoolManager,
    timezone: Tz,
    fixed_provider: Option<Provider>,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, ApplicationError> {
        let timezone = load_timezone(&configuration.application.timezone)?;
        let http_client =
            build_client(configuration.http.timeout()).map_err(ApplicationError::HttpClient)?;
        let price_manager = PriceManager::build(http_client.clone(), configuration.price);
        let mempool_manager = MempoolManager::build(http_client, &configuration.mempool.base_url);
        Ok(Self {
            price_manager,
            mempool_manager,
            timezone,
            fixed_provider: configuration.application.provider,
        })
    }

    /// Selection, price, fees, then the report. The first failure ends the run
    /// and nothing is printed past the menu.
    #[instrument(skip_all)]
    pub async fn run<R, W>(self, input: &mut R, output: &mut W) -> Result<(), ApplicationError>
    where
        R: BufRead,
        W: Write,
    {
        let provider = match self.fixed_provider {
            Some(provider) => provider,
            None => {
                write_menu(output)?;
                read_selection(input)?
            }
        };
        tracing::info!("price provider: {}", provider);

        let quote = self.price_manager.current_price(provider).await?;
        let fees = self
            .mempool_manager
            .recommended_fees()
            .await
            .map_err(ApplicationError::Fees)?;

        let report = Report::new(quote, fees, Utc::now().with_timezone(&self.timezone));
        write!(output, "{}", report)?;
        output.flush()?;
        Ok(())
    }
}

pub fn load_timezone(name: &str) -> Result<Tz, ApplicationError> {
    name.parse::<Tz>()
        .map_err(|reason| ApplicationError::Timezone {
            name: name.to_owned(),
            reason: reason.to_string(),
        })
}
