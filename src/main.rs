use btc_price_fees::configuration::get_configuration;
use btc_price_fees::startup::Application;
use btc_price_fees::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the report, logs go to stderr
    let subscriber = get_subscriber("btc_price_fees".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    application
        .run(&mut stdin.lock(), &mut stdout.lock())
        .await
        .map_err(|e| {
            tracing::error!("run failed: {:?}", e);
            e
        })?;
    Ok(())
}
