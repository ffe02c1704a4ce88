use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UiConfig {
    /// Colored terminal output (also requires stdout to be a tty)
    pub color: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        let color = env::var("LUXVERBS_COLOR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Self { color }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
