use super::Provider;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub source: Provider,
    pub usd_price: f64,
}
