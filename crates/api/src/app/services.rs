use std::sync::Arc;

use bankapi_banks::{BankDataSource, InMemoryBankDataSource};

use crate::config::ApiConfig;

/// Dependencies shared by every request handler.
#[derive(Clone)]
pub struct AppServices {
    pub banks: Arc<dyn BankDataSource>,
}

impl AppServices {
    pub fn new(banks: Arc<dyn BankDataSource>) -> Self {
        Self { banks }
    }
}

/// Wire the in-memory bank store according to `config`.
pub fn build_services(config: &ApiConfig) -> AppServices {
    let store = if config.seed {
        InMemoryBankDataSource::seeded()
    } else {
        InMemoryBankDataSource::new()
    };
    tracing::info!(banks = store.len(), "bank store ready");
    AppServices::new(Arc::new(store))
}
