use super::{
    BinanceResponse, BitfinexResponse, CoinDeskResponse, CoinGeckoResponse, KrakenResponse,
    RawPrice,
};
use crate::configuration::PriceSettings;
use serde::{de::Error as _, Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    CoinDesk = 1,
    CoinGecko = 2,
    Bitfinex = 3,
    Kraken = 4,
    Binance = 5,
}

impl Provider {
    /// Menu order.
    pub const ALL: [Provider; 5] = [
        Provider::CoinDesk,
        Provider::CoinGecko,
        Provider::Bitfinex,
        Provider::Kraken,
        Provider::Binance,
    ];

    pub fn menu_number(&self) -> i64 {
        *self as i64
    }

    pub fn from_menu_number(number: i64) -> Option<Provider> {
        Provider::ALL
            .into_iter()
            .find(|provider| provider.menu_number() == number)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::CoinDesk => "CoinDesk",
            Provider::CoinGecko => "CoinGecko",
            Provider::Bitfinex => "Bitfinex",
            Provider::Kraken => "Kraken",
            Provider::Binance => "Binance",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Provider::CoinDesk => "/v1/bpi/currentprice/BTC.json",
            Provider::CoinGecko => "/api/v3/simple/price?ids=bitcoin&vs_currencies=usd",
            Provider::Bitfinex => "/v1/pubticker/btcusd",
            Provider::Kraken => "/0/public/Ticker?pair=BTCUSD",
            Provider::Binance => "/api/v3/ticker/price?symbol=BTCUSDT",
        }
    }

    pub fn endpoint(&self, settings: &PriceSettings) -> String {
        let base_url = match self {
            Provider::CoinDesk => &settings.coindesk_url,
            Provider::CoinGecko => &settings.coingecko_url,
            Provider::Bitfinex => &settings.bitfinex_url,
            Provider::Kraken => &settings.kraken_url,
            Provider::Binance => &settings.binance_url,
        };
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Pull the usd price out of this provider's response body.
    pub fn decode(&self, body: &str) -> Result<RawPrice, serde_json::Error> {
        match self {
            Provider::CoinDesk => serde_json::from_str::<CoinDeskResponse>(body)
                .map(|response| RawPrice::Text(response.bpi.usd.rate)),
            Provider::CoinGecko => serde_json::from_str::<CoinGeckoResponse>(body)
                .map(|response| RawPrice::Number(response.bitcoin.usd)),
            Provider::Bitfinex => serde_json::from_str::<BitfinexResponse>(body)
                .map(|response| RawPrice::Text(response.last_price)),
            Provider::Kraken => {
                let response = serde_json::from_str::<KrakenResponse>(body)?;
                response
                    .result
                    .xxbtzusd
                    .c
                    .into_iter()
                    .next()
                    .map(RawPrice::Text)
                    .ok_or_else(|| serde_json::Error::custom("kraken ticker has no last trade"))
            }
            Provider::Binance => serde_json::from_str::<BinanceResponse>(body)
                .map(|response| RawPrice::Text(response.price)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
