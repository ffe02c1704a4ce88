use std::sync::Arc;

use luxverbs_config::Config;
use luxverbs_types::Catalog;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Written exactly once by the loader (or left empty on failure),
    /// read-only afterwards.
    pub catalog: RwLock<Catalog>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            catalog: RwLock::new(Catalog::default()),
        }
    }
}
