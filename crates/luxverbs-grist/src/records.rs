use serde::{Deserialize, Deserializer};

use crate::error::FetchError;

/// Wire shape of the Grist records endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordsResponse {
    pub records: Vec<RawRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: i64,
    #[serde(default)]
    pub fields: RawFields,
}

/// Per-record cells. A record with missing, null, or non-string cells still
/// loads; every field degrades to an empty string rather than failing the
/// whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    pub verb_type: String,
    #[serde(rename = "LU", default, deserialize_with = "lenient_string")]
    pub lu: String,
    #[serde(rename = "EN", default, deserialize_with = "lenient_string")]
    pub en: String,
    #[serde(rename = "FR", default, deserialize_with = "lenient_string")]
    pub fr: String,
    #[serde(rename = "DE", default, deserialize_with = "lenient_string")]
    pub de: String,
    #[serde(rename = "All", default, deserialize_with = "lenient_string")]
    pub all: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub video_embed: String,
}

/// Grist cells are untyped; empty cells come back as null and formula cells
/// can hold numbers. Coerce everything to a string, null to "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Parse a response body into raw records. A body that is not JSON, or JSON
/// without a `records` array, is a `FetchError::Parse`.
pub fn parse_records(body: &str) -> Result<Vec<RawRecord>, FetchError> {
    let payload: RecordsResponse = serde_json::from_str(body)?;
    Ok(payload.records)
}
