//! Core library for the Web-Host MCU fake host.
//! This crate holds the device state, the emulated Wi-Fi scan state machine,
//! the seams (traits) for the simulated hardware and the UI asset delivery,
//! and the HTTP API that ties them together.

pub mod backends;
pub mod config;
pub mod factory;
pub mod frontends;
pub mod scan;
pub mod store;
pub mod structs;
pub mod traits;
pub mod web_server;

// Define a shared Error and Result type for the entire crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// A `DeviceBackend` failed to read the (simulated) hardware.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;
