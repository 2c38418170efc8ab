mod domain;
mod mempool_manager;

pub use domain::*;
pub use mempool_manager::*;
