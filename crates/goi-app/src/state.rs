use std::collections::HashSet;
use std::sync::Arc;

use goi_config::Config;
use goi_core::state::SessionState;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: Arc<SessionState>,
    /// Deny-list, bundled with the app; read-only for the session.
    pub stopwords: HashSet<String>,
}

impl AppState {
    pub fn new(config: Config, stopwords: HashSet<String>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: Arc::new(SessionState::new()),
            stopwords,
        }
    }
}
