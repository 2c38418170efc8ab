use serde::Deserialize;
use std::{fmt, num::ParseFloatError};

/// The price exactly as a provider sent it, before it is turned into dollars.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    /// String prices may carry thousands separators, e.g. `"65,432.10"`.
    pub fn to_usd(&self) -> Result<f64, ParseFloatError> {
        match self {
            RawPrice::Number(price) => Ok(*price),
            RawPrice::Text(price) => price.trim().replace(',', "").parse::<f64>(),
        }
    }
}

impl fmt::Display for RawPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPrice::Number(price) => write!(f, "{}", price),
            RawPrice::Text(price) => f.write_str(price),
        }
    }
}

// {"bpi":{"USD":{"rate":"65,432.10", ...}}}
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDeskResponse {
    pub bpi: CoinDeskBpi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinDeskBpi {
    #[serde(rename = "USD")]
    pub usd: CoinDeskRate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinDeskRate {
    pub rate: String,
}

// {"bitcoin":{"usd":65432.1}}
#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoResponse {
    pub bitcoin: CoinGeckoPrice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoPrice {
    pub usd: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BitfinexResponse {
    pub last_price: String,
}

// {"error":[],"result":{"XXBTZUSD":{"c":["65432.10000","0.00100000"], ...}}}
#[derive(Debug, Clone, Deserialize)]
pub struct KrakenResponse {
    pub result: KrakenResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KrakenResult {
    #[serde(rename = "XXBTZUSD")]
    pub xxbtzusd: KrakenTicker,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KrakenTicker {
    /// Last trade closed: `[price, lot volume]`
    pub c: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinanceResponse {
    pub price: String,
}
