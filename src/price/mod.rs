mod domain;
mod price_manager;

pub use domain::*;
pub use price_manager::*;
