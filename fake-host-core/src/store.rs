use crate::structs::{DeviceConfig, NetworkStatus};
use std::sync::{Mutex, MutexGuard};

/// 设备状态存储：进程生命周期内的配置和网络状态，无持久化。
///
/// One instance is created at startup and shared by every handler.
#[derive(Debug, Default)]
pub struct DeviceStore {
    config: Mutex<DeviceConfig>,
    status: Mutex<NetworkStatus>,
}

impl DeviceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the given configuration instead of the factory defaults.
    pub fn with_config(config: DeviceConfig) -> Self {
        Self {
            config: Mutex::new(config),
            status: Mutex::new(NetworkStatus::default()),
        }
    }

    pub fn get_config(&self) -> DeviceConfig {
        lock(&self.config).clone()
    }

    /// Replaces the whole configuration. Cross-field consistency is not checked.
    pub fn set_config(&self, config: DeviceConfig) {
        tracing::info!(
            name = %config.name,
            blink_interval_ms = config.blink_interval_ms,
            station_ssid = ?config.station_ssid,
            "Device config replaced"
        );
        *lock(&self.config) = config;
    }

    pub fn get_status(&self) -> NetworkStatus {
        lock(&self.status).clone()
    }
}

// 每次写入都是整体替换，锁中毒后数据依然一致
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
