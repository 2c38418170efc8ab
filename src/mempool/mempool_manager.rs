use super::RecommendedFees;
use crate::http_client::{get_json, FetchError};
use reqwest::Client;
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct MempoolManager {
    http_client: Client,
    pub mempool_space: String,
}

impl MempoolManager {
    pub fn build(http_client: Client, mempool_url: &str) -> MempoolManager {
        Self {
            http_client,
            mempool_space: mempool_url.trim_end_matches('/').to_owned(),
        }
    }

    #[instrument(skip(self))]
    pub async fn recommended_fees(&self) -> Result<RecommendedFees, FetchError> {
        let url = format!("{}/api/v1/fees/recommended", self.mempool_space);
        tracing::info!("pulling recommended fees from mempool.space");
        let fees = get_json::<RecommendedFees>(&self.http_client, &url).await?;
        tracing::info!("recommended fees: {:?}", fees);
        Ok(fees)
    }
}
