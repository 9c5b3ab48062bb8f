use crate::structs::DeviceConfig;
use crate::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_WEBROOT: &str = "webroot";

/// 假设备的运行时配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub webroot: PathBuf,
    /// Initial `DeviceConfig.name`; `None` keeps the factory default.
    pub device_name: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            webroot: PathBuf::from(DEFAULT_WEBROOT),
            device_name: None,
        }
    }
}

/// 用于解析 TOML 的临时结构，所有字段可选
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ServerConfigFile {
    bind_addr: Option<String>,
    webroot: Option<PathBuf>,
    device_name: Option<String>,
}

impl TryFrom<ServerConfigFile> for ServerConfig {
    type Error = Error;

    fn try_from(t: ServerConfigFile) -> Result<Self> {
        let defaults = ServerConfig::default();
        let bind_addr = match t.bind_addr {
            Some(addr) => parse_bind_addr(&addr)?,
            None => defaults.bind_addr,
        };

        Ok(ServerConfig {
            bind_addr,
            webroot: t.webroot.unwrap_or(defaults.webroot),
            device_name: t.device_name,
        })
    }
}

impl ServerConfig {
    /// The device configuration the store starts from.
    pub fn initial_device_config(&self) -> DeviceConfig {
        match &self.device_name {
            Some(name) => DeviceConfig {
                name: name.clone(),
                ..DeviceConfig::default()
            },
            None => DeviceConfig::default(),
        }
    }
}

pub fn parse_bind_addr(s: &str) -> Result<SocketAddr> {
    SocketAddr::from_str(s).map_err(|_| Error::InvalidAddress(s.to_string()))
}

/// 从 TOML 字符串加载配置
pub fn load_config_from_toml_str(s: &str) -> Result<ServerConfig> {
    let parsed: ServerConfigFile = toml::from_str(s)?;
    ServerConfig::try_from(parsed)
}

/// 从 TOML 文件加载配置
pub fn load_config_from_file(path: &Path) -> Result<ServerConfig> {
    let content = std::fs::read_to_string(path)?;
    tracing::info!("Loaded config from {}", path.display());
    load_config_from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = load_config_from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn all_keys_are_read() {
        let config = load_config_from_toml_str(
            r#"
            bind_addr = "0.0.0.0:3000"
            webroot = "/srv/whm"
            device_name = "Bench unit"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(config.webroot, PathBuf::from("/srv/whm"));
        assert_eq!(config.initial_device_config().name, "Bench unit");
        assert_eq!(config.initial_device_config().blink_interval_ms, 250);
    }

    #[test]
    fn bad_address_is_reported() {
        let err = load_config_from_toml_str(r#"bind_addr = "localhost""#).unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(a) if a == "localhost"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = load_config_from_toml_str("scan_duration = 3").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake-host.toml");
        std::fs::write(&path, "webroot = \"ui\"\n").unwrap();

        let config = load_config_from_file(&path).unwrap();
        assert_eq!(config.webroot, PathBuf::from("ui"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config_from_file(Path::new("/nonexistent/fake-host.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
