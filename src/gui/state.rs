use std::sync::Arc;

use crate::{AppConfig, RecipeBoundary, SessionGate};

/// State shared by every screen for the life of the window.
pub struct AppState {
    pub session: SessionGate,
    pub config: AppConfig,
    pub boundary: Arc<dyn RecipeBoundary>,
}

impl AppState {
    pub fn new(config: AppConfig, boundary: Arc<dyn RecipeBoundary>) -> Self {
        Self {
            session: SessionGate::new(),
            config,
            boundary,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session", &self.session)
            .field("config", &self.config)
            .finish()
    }
}
