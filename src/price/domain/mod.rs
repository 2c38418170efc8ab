mod price_quote;
mod provider;
mod provider_responses;

pub use price_quote::*;
pub use provider::*;
pub use provider_responses::*;
