use serde::{Deserialize, Serialize};

pub const DEFAULT_DEVICE_NAME: &str = "Web-Host MCU";
pub const DEFAULT_BLINK_INTERVAL_MS: i64 = 250;

/// 设备配置，`POST /api/config` 整体替换（不做合并）。
///
/// The JSON keys follow what the device web UI sends; the Rust field names
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub name: String,
    #[serde(rename = "blinking_ms", alias = "blink_interval_ms")]
    pub blink_interval_ms: i64,
    #[serde(
        rename = "wifi_ssid",
        alias = "station_ssid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub station_ssid: Option<String>,
    #[serde(
        rename = "wifi_pass",
        alias = "station_password",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub station_password: Option<String>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DEVICE_NAME.to_string(),
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            station_ssid: None,
            station_password: None,
        }
    }
}

/// 网络连接状态（客户端只读）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub connected: bool,
    #[serde(rename = "ssid")]
    pub station_ssid: Option<String>,
}

/// `GET /api/status` 的响应体，UI 读取 `network.connected`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub network: NetworkStatus,
}

/// A single sensor reading, values are kept as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub value: String,
    pub unit: String,
}

/// Authentication mode advertised by an access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMode {
    Open,
    Wep,
    Wpa,
    Wpa2,
    Wpa3,
    #[serde(rename = "WPA2_WPA3")]
    Wpa2Wpa3,
}

/// Wi-Fi 扫描时单个接入点的具体信息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub ssid: String,
    #[serde(rename = "mac")]
    pub mac_address: String,
    pub channel: u8,
    pub rssi: i16, // dBm
    pub auth: AuthMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_uses_device_ui_keys() {
        let config = DeviceConfig {
            station_ssid: Some("home".to_string()),
            station_password: Some("secret".to_string()),
            ..DeviceConfig::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Web-Host MCU",
                "blinking_ms": 250,
                "wifi_ssid": "home",
                "wifi_pass": "secret",
            })
        );
    }

    #[test]
    fn config_omits_unset_station_fields() {
        let value = serde_json::to_value(DeviceConfig::default()).unwrap();
        assert_eq!(value, json!({ "name": "Web-Host MCU", "blinking_ms": 250 }));
    }

    #[test]
    fn config_accepts_field_name_aliases() {
        let config: DeviceConfig = serde_json::from_value(json!({
            "name": "bench",
            "blink_interval_ms": 100,
            "station_password": "orphan",
        }))
        .unwrap();

        assert_eq!(config.blink_interval_ms, 100);
        assert_eq!(config.station_ssid, None);
        assert_eq!(config.station_password.as_deref(), Some("orphan"));
    }

    #[test]
    fn blink_interval_takes_any_integer() {
        let config: DeviceConfig =
            serde_json::from_value(json!({ "name": "n", "blinking_ms": -1 })).unwrap();
        assert_eq!(config.blink_interval_ms, -1);

        let big: DeviceConfig =
            serde_json::from_value(json!({ "name": "n", "blinking_ms": 5_000_000_000_i64 }))
                .unwrap();
        assert_eq!(big.blink_interval_ms, 5_000_000_000);
    }

    #[test]
    fn auth_mode_is_upper_case_on_the_wire() {
        assert_eq!(serde_json::to_value(AuthMode::Open).unwrap(), json!("OPEN"));
        assert_eq!(serde_json::to_value(AuthMode::Wpa2).unwrap(), json!("WPA2"));
        assert_eq!(
            serde_json::to_value(AuthMode::Wpa2Wpa3).unwrap(),
            json!("WPA2_WPA3")
        );
    }
}
