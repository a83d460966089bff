use generator_core::GenerationService;
use generator_sheets::{PassthroughGateway, RecordStore};
use std::sync::Arc;

use crate::config::ServerConfig;

pub const SERVICE_NAME: &str = "workspace-generator-backend";

/// Shared by every worker. Nothing here is mutated after startup.
pub struct AppState {
    pub generation: GenerationService,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(generation: GenerationService, store: Arc<dyn RecordStore>) -> Self {
        Self { generation, store }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let passthrough = config.passthrough();
        let missing = passthrough.missing();
        if missing.is_empty() {
            log::info!("Spreadsheet passthrough configured at {}", passthrough.base_url());
        } else {
            log::warn!(
                "Spreadsheet passthrough not fully configured, /api/save will fail. Missing: {}",
                missing.join(", ")
            );
        }

        Self::new(
            GenerationService::new(config.generate_delay()),
            Arc::new(PassthroughGateway::new(passthrough)),
        )
    }
}
