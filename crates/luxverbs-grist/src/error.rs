use reqwest::StatusCode;

/// What can go wrong while loading the verb table. All variants are caught
/// at the loader task boundary and logged; none of them abort the app.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Grist returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response is not a records payload: {0}")]
    Parse(#[from] serde_json::Error),
}
