//! Shared application state

use std::sync::Arc;

use crate::application::services::SheetServiceImpl;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::store::RemoteStoreClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub sheet_service: SheetServiceImpl,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(RemoteStoreClient::new(&config.character_store_url));
        let sheet_service = SheetServiceImpl::new(store);
        Self {
            config,
            sheet_service,
        }
    }
}
