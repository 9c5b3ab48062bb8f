use anyhow::Result;
use clap::Parser;
use fake_host_core::config::{ServerConfig, load_config_from_file, parse_bind_addr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod runner;

/// Web-Host MCU 假设备：在没有硬件的情况下提供设备的 HTTP API。
#[derive(Debug, Parser)]
#[command(name = "fake-host", version, about)]
struct Cli {
    /// TOML config file
    #[arg(short, long, env = "FAKE_HOST_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory with the web UI, overrides the config file
    #[arg(short, long)]
    webroot: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(bind) = &self.bind {
            config.bind_addr = parse_bind_addr(bind)?;
        }
        if let Some(webroot) = &self.webroot {
            config.webroot = webroot.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 初始化日志（这是入口点的职责）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. 调用库的核心逻辑
    if let Err(e) = run(Cli::parse()).await {
        // 3. 处理顶层错误
        tracing::error!("❌ Fake host failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    runner::run(config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "fake-host",
            "--bind",
            "0.0.0.0:9000",
            "--webroot",
            "ui",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:9000");
        assert_eq!(config.webroot, PathBuf::from("ui"));
    }

    #[test]
    fn bad_bind_flag_is_an_error() {
        let cli = Cli::try_parse_from(["fake-host", "--bind", "nowhere"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
