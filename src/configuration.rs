use crate::price::Provider;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub http: HttpSettings,
    pub price: PriceSettings,
    pub mempool: MempoolSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub timezone: String,
    // skips the menu when set
    pub provider: Option<Provider>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct HttpSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Base urls for each price provider, the endpoint paths are fixed per provider.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct PriceSettings {
    pub coindesk_url: String,
    pub coingecko_url: String,
    pub bitfinex_url: String,
    pub kraken_url: String,
    pub binance_url: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct MempoolSettings {
    pub base_url: String,
}

pub const DEFAULT_TIMEZONE: &str = "Europe/London";

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| config::ConfigError::Foreign(e.into()))?;
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .set_default("application.timezone", DEFAULT_TIMEZONE)?
        .set_default("http.timeout_milliseconds", 10_000_i64)?
        .set_default("price.coindesk_url", "https://api.coindesk.com")?
        .set_default("price.coingecko_url", "https://api.coingecko.com")?
        .set_default("price.bitfinex_url", "https://api.bitfinex.com")?
        .set_default("price.kraken_url", "https://api.kraken.com")?
        .set_default("price.binance_url", "https://api.binance.com")?
        .set_default("mempool.base_url", "https://mempool.space")?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        // E.g. `APP_APPLICATION__PROVIDER=kraken` would pin the price source
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
