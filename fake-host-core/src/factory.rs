use crate::backends::mock::MockBackend;
use crate::config::ServerConfig;
use crate::frontends::provider_disk::DiskFrontend;
use crate::traits::{DeviceBackend, UiAssetProvider};
use std::sync::Arc;

/// The fake host only ships the mock hardware.
pub fn create_backend() -> Arc<dyn DeviceBackend> {
    tracing::info!("🤖 Backend: Mock device selected");
    Arc::new(MockBackend::new())
}

pub fn create_frontend(config: &ServerConfig) -> Arc<dyn UiAssetProvider> {
    tracing::info!(
        "💿 Frontend: Disk Provider selected (webroot: {})",
        config.webroot.display()
    );
    Arc::new(DiskFrontend::new(config.webroot.clone()))
}
