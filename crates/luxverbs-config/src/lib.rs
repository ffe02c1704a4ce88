use serde::{Deserialize, Serialize};

use self::grist::GristConfig;
use self::ui::UiConfig;

pub mod grist;
pub mod ui;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub grist: GristConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Read configuration from the environment, falling back to the built-in
    /// defaults for anything unset.
    pub fn new() -> Self {
        Config {
            grist: GristConfig::new(),
            ui: UiConfig::new(),
        }
    }
}
