mod catalog;
mod client;
mod error;
mod records;

pub use catalog::build_catalog;
pub use client::GristClient;
pub use error::FetchError;
pub use records::{RawFields, RawRecord, parse_records};

use async_trait::async_trait;

/// Source of raw verb records. The production implementation goes through
/// the CORS relay to the Grist API; tests substitute canned sources, and the
/// relay can be dropped without touching grouping or navigation.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, FetchError>;
}

#[cfg(test)]
mod tests;
