use anyhow::anyhow;
use anyhow::{Context, Result};
use common::utils::logging::LogFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Dummy records generated at boot for manual exploration.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
    #[serde(default = "default_seed_count")]
    pub users: usize,
    #[serde(default = "default_seed_count")]
    pub movies: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: default_seed_enabled(), users: default_seed_count(), movies: default_seed_count() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_seed_enabled() -> bool { true }
fn default_seed_count() -> usize { 10 }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read config file {path}"))?;
    parse(&content).with_context(|| format!("failed to parse config file {path}"))
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let mut cfg = load_from_file(path)?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first, then `SERVER_HOST` / `SERVER_PORT` / `TOKIO_WORKER_THREADS`.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Only a missing file falls back to the environment; a file that fails
    /// to parse or validate is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        match Self::load_and_validate_from(path) {
            Ok(cfg) => Ok(cfg),
            Err(e) if is_missing_file(&e) => {
                let mut cfg = Self::from_env();
                cfg.normalize_and_validate()?;
                Ok(cfg)
            }
            Err(e) => Err(e),
        }
    }

    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(defaults.worker_threads);
        Self {
            server: ServerConfig { host, port, worker_threads },
            ..Self::default()
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "0.0.0.0".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        // 0 或缺省时回退到 4 个工作线程
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
