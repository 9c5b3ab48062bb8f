use crate::structs::{Measurement, Station};
use async_trait::async_trait;
use std::borrow::Cow;

// 在这里定义模拟硬件和前端资源的 trait。

/// 前端资源提供者接口。
#[async_trait]
pub trait UiAssetProvider: Send + Sync {
    /// Retrieves a single UI asset.
    ///
    /// # Arguments
    /// * `path` - The path to the asset (e.g., "index.html", "app.js").
    ///
    /// # Returns
    /// A `Result` containing a tuple of (`Cow<'static, [u8]>`, `String`)
    /// representing the asset's content and its MIME type, or an `Error` if not found.
    async fn get_asset(&self, path: &str) -> crate::Result<(Cow<'static, [u8]>, String)>;
}

/// 模拟的设备硬件：无线电扫描结果和传感器读数。
///
/// The scan state machine lives in [`crate::scan::ScanController`]; a backend
/// only supplies what a finished scan found.
#[async_trait]
pub trait DeviceBackend: Send + Sync {
    /// Access points reported by a completed scan.
    async fn scan_results(&self) -> crate::Result<Vec<Station>>;

    /// Current sensor readings, in display order.
    async fn read_measurements(&self) -> crate::Result<Vec<Measurement>>;
}
