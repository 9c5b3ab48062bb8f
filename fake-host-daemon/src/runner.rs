use fake_host_core::{
    config::ServerConfig,
    factory::{create_backend, create_frontend},
    store::DeviceStore,
    web_server::{self, AppState},
};
use std::sync::Arc;

/// 组装设备状态、模拟后端和前端，运行 Web 服务器直到收到 Ctrl-C
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let store = DeviceStore::with_config(config.initial_device_config());
    let state = Arc::new(AppState::new(
        store,
        create_backend(),
        create_frontend(&config),
    ));

    tracing::info!("🚀 Starting fake host on {}", config.bind_addr);
    web_server::run_server(state, config.bind_addr, shutdown_signal()).await?;

    tracing::info!("🛑 Shutting down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        // 无法监听信号时不退出，一直运行
        std::future::pending::<()>().await;
    }
}
