use crate::config::ServerConfig;
use crate::error::ServerResult;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use zookeepr::{AnimalStore, JsonFileStorage};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Animal collection (shared across requests)
    pub store: Arc<AnimalStore>,

    /// Prometheus render handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state, loading animals from `config.data_path`
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let storage = Arc::new(JsonFileStorage::new(config.data_path.clone()));
        let store = Arc::new(AnimalStore::open(storage)?);
        Ok(Self::with_store(config, store))
    }

    /// Create state around an already opened store
    pub fn with_store(config: ServerConfig, store: Arc<AnimalStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
