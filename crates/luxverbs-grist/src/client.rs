use async_trait::async_trait;
use luxverbs_config::grist::GristConfig;

use crate::RecordSource;
use crate::error::FetchError;
use crate::records::{RawRecord, parse_records};

/// Grist client that goes through the configured CORS relay. The spoofed
/// `Origin` and the XHR marker are what the relay requires before it will
/// forward the request.
#[derive(Clone)]
pub struct GristClient {
    url: String,
    origin: String,
    client: reqwest::Client,
}

impl GristClient {
    pub fn new(config: &GristConfig) -> Self {
        Self {
            url: config.records_url(),
            origin: config.origin.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RecordSource for GristClient {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, FetchError> {
        tracing::debug!("fetching verb records from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Origin", &self.origin)
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        parse_records(&body)
    }
}
