use crate::Result;
use crate::structs::{AuthMode, Measurement, Station};
use crate::traits::DeviceBackend;
use async_trait::async_trait;

/// A mock backend standing in for the device's radio and sensor.
/// It returns the same fixed data every time, no hardware involved.
#[derive(Debug, Default)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeviceBackend for MockBackend {
    async fn scan_results(&self) -> Result<Vec<Station>> {
        let stations = vec![
            Station {
                ssid: "Example Wifi".to_string(),
                mac_address: "aa:bb:cc:dd:ee:01".to_string(),
                channel: 6,
                rssi: -48,
                auth: AuthMode::Wpa2,
            },
            Station {
                ssid: "Another Spot".to_string(),
                mac_address: "aa:bb:cc:dd:ee:02".to_string(),
                channel: 11,
                rssi: -71,
                auth: AuthMode::Open,
            },
        ];

        tracing::debug!("🤖 [MockBackend] Reporting {} stations.", stations.len());
        Ok(stations)
    }

    async fn read_measurements(&self) -> Result<Vec<Measurement>> {
        // HTU31D 的固定读数
        Ok(vec![
            Measurement {
                name: "relative_humidity".to_string(),
                value: "48.29".to_string(),
                unit: "%".to_string(),
            },
            Measurement {
                name: "temperature".to_string(),
                value: "18.78".to_string(),
                unit: "C".to_string(),
            },
        ])
    }
}
