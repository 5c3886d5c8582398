use std::sync::Arc;

use crate::config::Config;
use crate::core::loader;
use crate::core::lookup::LookupService;
use crate::core::store::PromotionStore;
use crate::core::PromotionRepository;
use crate::utils::error::Result;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<LookupService>,
}

impl AppState {
    pub fn new(lookup: LookupService) -> Self {
        Self {
            inner: Arc::new(lookup),
        }
    }

    /// Loads the configured dataset into a fresh store.
    pub fn from_config(config: &Config) -> Result<Self> {
        let report = loader::load_file(&config.dataset.path, config.dataset.row_policy)?;
        let store: Arc<dyn PromotionRepository> =
            Arc::new(PromotionStore::from_map(report.promotions));

        Ok(Self::new(LookupService::new(store, config.lookup.id_format)))
    }

    pub fn lookup(&self) -> &LookupService {
        &self.inner
    }
}
