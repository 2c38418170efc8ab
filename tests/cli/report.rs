use crate::helpers::spawn_app;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn coingecko_and_mempool_produce_the_full_report() {
    let app = spawn_app().await;
    app.mount_fees().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "bitcoin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bitcoin": { "usd": 65432.10 }
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let output = app.run_with_input("2\n").await;
    assert!(output.result.is_ok(), "{:?}", output.result);

    let lines: Vec<&str> = output.stdout.lines().collect();
    let header = lines
        .iter()
        .position(|line| line.starts_with("On the "))
        .expect("No date line in the report");
    assert!(lines[header].ends_with("m:"));
    assert_eq!(
        &lines[header + 1..],
        &[
            "  1 BTC = $65,432.10",
            "  1 BTC = 1 BTC",
            "  The recommended tx fees are:",
            "    - Fast: 20 sat/byte",
            "    - Half hour: 15 sat/byte",
            "    - Hour: 10 sat/byte",
            "    - Economy: 5 sat/byte",
            "    - Minimum: 1 sat/byte",
            "",
            "   #FreeRoss",
            "",
        ]
    );
    assert_eq!(app.received_request_count().await, 2);
}
