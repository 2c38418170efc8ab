pub mod configuration;
pub mod error_fmt;
pub mod http_client;
pub mod mempool;
pub mod menu;
pub mod price;
pub mod report;
pub mod startup;
pub mod telemetry;
