mod recommended_fees;

pub use recommended_fees::*;
