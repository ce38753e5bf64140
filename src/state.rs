//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::parser::LogParser;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the parser adapter used to
/// invoke the external log extraction tool.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub parser: Arc<dyn LogParser>,
}

impl AppState {
    /// Creates a new application state from the given configuration and parser adapter.
    pub fn new(config: AppConfig, parser: Arc<dyn LogParser>) -> Self {
        Self {
            config: Arc::new(config),
            parser,
        }
    }
}
