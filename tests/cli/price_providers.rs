use crate::helpers::{choice, spawn_app};
use btc_price_fees::http_client::FetchError;
use btc_price_fees::price::{PriceError, Provider};
use btc_price_fees::startup::ApplicationError;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn price_line_for(provider: Provider, mock: Mock) -> String {
    let app = spawn_app().await;
    app.mount_fees().await;
    mock.mount(&app.mock_server).await;

    let output = app.run_with_input(&choice(provider)).await;
    assert!(output.result.is_ok(), "{:?}", output.result);
    output
        .stdout
        .lines()
        .find(|line| line.trim_start().starts_with("1 BTC = $"))
        .expect("No price line in the report")
        .trim()
        .to_owned()
}

#[tokio::test]
async fn coindesk_rate_with_thousands_separator() {
    let mock = Mock::given(method("GET"))
        .and(path("/v1/bpi/currentprice/BTC.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "time": { "updated": "Oct 19, 2026 14:04:00 UTC" },
            "bpi": { "USD": { "code": "USD", "rate": "65,432.10", "rate_float": 65432.1 } }
        })))
        .expect(1);

    assert_eq!(
        price_line_for(Provider::CoinDesk, mock).await,
        "1 BTC = $65,432.10"
    );
}

#[tokio::test]
async fn coingecko_numeric_price() {
    let mock = Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "bitcoin"))
        .and(query_param("vs_currencies", "usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bitcoin": { "usd": 65432.10 }
        })))
        .expect(1);

    assert_eq!(
        price_line_for(Provider::CoinGecko, mock).await,
        "1 BTC = $65,432.10"
    );
}

#[tokio::test]
async fn bitfinex_last_price() {
    let mock = Mock::given(method("GET"))
        .and(path("/v1/pubticker/btcusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mid": "104999.5",
            "bid": "104999.0",
            "ask": "105000.0",
            "last_price": "105000.0",
            "timestamp": "1760882640.0"
        })))
        .expect(1);

    assert_eq!(
        price_line_for(Provider::Bitfinex, mock).await,
        "1 BTC = $105,000.00"
    );
}

#[tokio::test]
async fn kraken_first_element_of_last_trade() {
    let mock = Mock::given(method("GET"))
        .and(path("/0/public/Ticker"))
        .and(query_param("pair", "BTCUSD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": [],
            "result": {
                "XXBTZUSD": {
                    "a": ["1234568.00000", "1", "1.000"],
                    "c": ["1234567.89000", "0.00150000"]
                }
            }
        })))
        .expect(1);

    assert_eq!(
        price_line_for(Provider::Kraken, mock).await,
        "1 BTC = $1,234,567.89"
    );
}

#[tokio::test]
async fn binance_price_string() {
    let mock = Mock::given(method("GET"))
        .and(path("/api/v3/ticker/price"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "BTCUSDT",
            "price": "999.50000000"
        })))
        .expect(1);

    assert_eq!(
        price_line_for(Provider::Binance, mock).await,
        "1 BTC = $999.50"
    );
}

#[tokio::test]
async fn error_status_from_provider_fails_the_run() {
    let app = spawn_app().await;
    app.mount_fees().await;
    Mock::given(path("/v1/pubticker/btcusd"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let output = app.run_with_input(&choice(Provider::Bitfinex)).await;

    assert!(matches!(
        output.result,
        Err(ApplicationError::Price(PriceError::Fetch {
            provider: Provider::Bitfinex,
            source: FetchError::HttpStatus { status, .. },
        })) if status == StatusCode::SERVICE_UNAVAILABLE
    ));
    assert!(!output.stdout.contains("1 BTC"));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let app = spawn_app().await;
    app.mount_fees().await;
    Mock::given(path("/api/v3/ticker/price"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&app.mock_server)
        .await;

    let output = app.run_with_input(&choice(Provider::Binance)).await;

    assert!(matches!(
        output.result,
        Err(ApplicationError::Price(PriceError::Fetch {
            source: FetchError::JsonDecode { .. },
            ..
        }))
    ));
}

#[tokio::test]
async fn empty_kraken_last_trade_is_a_decode_error() {
    let app = spawn_app().await;
    app.mount_fees().await;
    Mock::given(path("/0/public/Ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": [],
            "result": { "XXBTZUSD": { "c": [] } }
        })))
        .mount(&app.mock_server)
        .await;

    let output = app.run_with_input(&choice(Provider::Kraken)).await;

    assert!(matches!(
        output.result,
        Err(ApplicationError::Price(PriceError::Fetch {
            source: FetchError::JsonDecode { .. },
            ..
        }))
    ));
}

#[tokio::test]
async fn unparsable_price_string_is_a_numeric_error() {
    let app = spawn_app().await;
    app.mount_fees().await;
    Mock::given(path("/v1/bpi/currentprice/BTC.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bpi": { "USD": { "rate": "sixty five thousand" } }
        })))
        .mount(&app.mock_server)
        .await;

    let output = app.run_with_input(&choice(Provider::CoinDesk)).await;

    assert!(matches!(
        output.result,
        Err(ApplicationError::Price(PriceError::NumericParse { ref raw, .. }))
            if raw == "sixty five thousand"
    ));
}

#[tokio::test]
async fn zero_price_is_rejected() {
    let app = spawn_app().await;
    app.mount_fees().await;
    Mock::given(path("/api/v3/simple/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bitcoin": { "usd": 0.0 }
        })))
        .mount(&app.mock_server)
        .await;

    let output = app.run_with_input(&choice(Provider::CoinGecko)).await;

    assert!(matches!(
        output.result,
        Err(ApplicationError::Price(PriceError::NotPositive { .. }))
    ));
}
