use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_RELAY_URL: &str = "https://cors-anywhere.herokuapp.com";
const DEFAULT_API_URL: &str =
    "https://grist.skilltech.tools/api/docs/bnxws71sTCDzixcjGA6mqw/tables/LesVerbes/records";
const DEFAULT_ORIGIN: &str = "https://grist.skilltech.tools";

/// Where and how to fetch the verb table. The public relay interposes on the
/// Grist endpoint to get around its CORS policy; the spoofed `Origin` header
/// is what the relay expects to see.
#[derive(Serialize, Deserialize)]
pub struct GristConfig {
    /// CORS relay prefixed to the API URL; empty disables the relay
    pub relay_url: String,
    /// The Grist records endpoint
    pub api_url: String,
    /// Value presented in the `Origin` header
    pub origin: String,
}

impl GristConfig {
    pub fn new() -> Self {
        let relay_url =
            env::var("GRIST_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
        let api_url = env::var("GRIST_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let origin = env::var("GRIST_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());

        Self {
            relay_url,
            api_url,
            origin,
        }
    }

    /// Full request URL, with the relay prefix when one is configured.
    pub fn records_url(&self) -> String {
        if self.relay_url.is_empty() {
            self.api_url.clone()
        } else {
            format!("{}/{}", self.relay_url.trim_end_matches('/'), self.api_url)
        }
    }
}

impl Default for GristConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_url_prefixes_relay() {
        let config = GristConfig {
            relay_url: "https://relay.example/".to_string(),
            api_url: "https://grist.example/api/docs/d/tables/t/records".to_string(),
            origin: "https://grist.example".to_string(),
        };

        assert_eq!(
            config.records_url(),
            "https://relay.example/https://grist.example/api/docs/d/tables/t/records"
        );
    }

    #[test]
    fn empty_relay_hits_the_api_directly() {
        let config = GristConfig {
            relay_url: String::new(),
            api_url: "https://grist.example/records".to_string(),
            origin: "https://grist.example".to_string(),
        };

        assert_eq!(config.records_url(), "https://grist.example/records");
    }
}
