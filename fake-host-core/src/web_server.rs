use crate::scan::{ScanController, ScanError};
use crate::store::DeviceStore;
use crate::structs::{DeviceConfig, Station, StatusReport};
use crate::traits::{DeviceBackend, UiAssetProvider};
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

// The shared state for our web server.
// By using `Arc<dyn Trait>`, we can inject any implementation
// that satisfies the trait bounds.
pub type WebServerState = State<Arc<AppState>>;

/// Web 服务器状态：一个设备存储、一个扫描控制器，注入到每个处理器
pub struct AppState {
    pub store: DeviceStore,
    pub scanner: ScanController,
    pub backend: Arc<dyn DeviceBackend>,
    pub frontend: Arc<dyn UiAssetProvider>,
}

impl AppState {
    pub fn new(
        store: DeviceStore,
        backend: Arc<dyn DeviceBackend>,
        frontend: Arc<dyn UiAssetProvider>,
    ) -> Self {
        Self {
            store,
            scanner: ScanController::new(),
            backend,
            frontend,
        }
    }
}

/// Builds the device API router on top of the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/config", get(api_get_config).post(api_set_config))
        .route("/api/status", get(api_status))
        .route("/api/meas", get(api_measurements))
        .route("/api/wifi-scan-start", get(api_scan_start))
        .route("/api/wifi-scan-get", get(api_scan_get))
        .route("/", get(serve_index))
        .route("/{*path}", get(serve_static_asset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server until `shutdown` resolves.
pub async fn run_server(
    state: Arc<AppState>,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> crate::Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🌐 Web server listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

// --- Errors ---

/// Everything a handler can fail with, rendered the way the device replies.
#[derive(Debug)]
pub enum ApiError {
    Scan(ScanError),
    Backend(crate::Error),
}

impl From<ScanError> for ApiError {
    fn from(e: ScanError) -> Self {
        ApiError::Scan(e)
    }
}

impl From<crate::Error> for ApiError {
    fn from(e: crate::Error) -> Self {
        ApiError::Backend(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Scan(e) => {
                let status = match e {
                    ScanError::Conflict | ScanError::NotStarted => StatusCode::CONFLICT,
                    // 425 Too Early
                    ScanError::NotReady => {
                        StatusCode::from_u16(425).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
                    }
                };
                (status, Json(json!({ "status": "fail", "scan": e.to_string() }))).into_response()
            }
            ApiError::Backend(e) => {
                tracing::error!("Backend failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

// --- Route Handlers ---

async fn api_get_config(State(state): WebServerState) -> Json<DeviceConfig> {
    tracing::debug!("Handling GET /api/config");
    Json(state.store.get_config())
}

async fn api_set_config(
    State(state): WebServerState,
    Json(config): Json<DeviceConfig>,
) -> impl IntoResponse {
    tracing::debug!("Handling POST /api/config");
    state.store.set_config(config);
    Json(json!({ "status": "ok" }))
}

async fn api_status(State(state): WebServerState) -> Json<StatusReport> {
    Json(StatusReport {
        network: state.store.get_status(),
    })
}

async fn api_measurements(State(state): WebServerState) -> Result<impl IntoResponse, ApiError> {
    let readings = state.backend.read_measurements().await?;
    Ok(Json(readings))
}

async fn api_scan_start(State(state): WebServerState) -> Result<impl IntoResponse, ApiError> {
    state.scanner.start()?;
    Ok(Json(json!({ "status": "ok", "scan": "started" })))
}

#[derive(Serialize)]
struct ScanResults {
    status: &'static str,
    stations: Vec<Station>,
}

async fn api_scan_get(State(state): WebServerState) -> Result<impl IntoResponse, ApiError> {
    // 先判定，再取结果，最后提交状态转换；后端失败时扫描保持 Running
    state.scanner.check_ready()?;
    let stations = state.backend.scan_results().await?;
    state.scanner.poll()?;
    Ok(Json(ScanResults {
        status: "ok",
        stations,
    }))
}

/// Serves the main `index.html` file.
async fn serve_index(State(state): WebServerState) -> Response {
    serve_static_asset(State(state), Path("index.html".to_string())).await
}

/// 处理静态资产
///
/// 捕获所有未被 API 路由匹配的 GET 请求，并尝试从 `UiAssetProvider` 中服务文件。
/// `Path` 提取器已完成百分号解码。
async fn serve_static_asset(State(state): WebServerState, Path(path): Path<String>) -> Response {
    match state.frontend.get_asset(&path).await {
        Ok((data, mime)) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .body(Body::from(data))
            .unwrap_or_else(|_| {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
            }),
        Err(e) => {
            tracing::warn!("Failed to get asset: {} (Error: {})", path, e);
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
