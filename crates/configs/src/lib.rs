use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
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

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the employee collection.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Directory served for static assets (stylesheets, images).
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_file: default_data_file(), public_dir: default_public_dir() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 3000 }
fn default_data_file() -> String { "data/employees.json".into() }
fn default_public_dir() -> String { "public".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file when present, otherwise environment variables with defaults.
    /// A file that exists but does not parse or validate is an error.
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_or_env_from(&path)
    }

    pub fn load_or_env_from(path: &str) -> Result<Self> {
        match load_from_file(path) {
            Ok(mut cfg) => {
                cfg.normalize_and_validate().with_context(|| format!("invalid config file {path}"))?;
                Ok(cfg)
            }
            Err(e) if is_missing_file(&e) => {
                let mut cfg = Self::from_env();
                cfg.normalize_and_validate()?;
                Ok(cfg)
            }
            Err(e) => Err(e.context(format!("cannot load config file {path}"))),
        }
    }

    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        cfg.storage.apply_env();
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.apply_env();
        self.storage.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    /// Environment variables override whatever the TOML file says.
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var("PAYROLL_DATA_FILE") {
            if !path.trim().is_empty() {
                self.data_file = path;
            }
        }
        if let Ok(dir) = std::env::var("PAYROLL_PUBLIC_DIR") {
            if !dir.trim().is_empty() {
                self.public_dir = dir;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(anyhow!("storage.data_file is empty; set it in config.toml or PAYROLL_DATA_FILE"));
        }
        if self.data_file.ends_with('/') {
            return Err(anyhow!("storage.data_file must name a file, not a directory"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.storage.data_file, "data/employees.json");
        assert_eq!(cfg.storage.public_dir, "public");
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8088

            [storage]
            data_file = "/var/lib/payroll/employees.json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8088");
        assert_eq!(cfg.storage.data_file, "/var/lib/payroll/employees.json");
        assert_eq!(cfg.storage.public_dir, "public");
    }

    #[test]
    fn normalize_fills_blank_host_and_threads() {
        let mut server = ServerConfig { host: "  ".into(), port: 3000, worker_threads: Some(0) };
        server.normalize().unwrap();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.worker_threads, Some(4));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut server = ServerConfig { host: "127.0.0.1".into(), port: 0, worker_threads: None };
        assert!(server.normalize().is_err());
    }

    fn write_temp_config(label: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("payroll_config_{}_{}.toml", label, uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_config_file_falls_back_to_env() {
        let path = std::env::temp_dir().join(format!("payroll_config_absent_{}.toml", uuid::Uuid::new_v4()));
        let cfg = AppConfig::load_or_env_from(&path.to_string_lossy()).unwrap();
        assert!(cfg.server.port > 0);
        assert!(!cfg.storage.data_file.trim().is_empty());
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        let path = write_temp_config(
            "invalid",
            "[server]\nport = 0\n\n[storage]\ndata_file = \"/srv/emp.json\"\n",
        );
        let err = AppConfig::load_or_env_from(&path.to_string_lossy()).unwrap_err();
        assert!(format!("{err:#}").contains("server.port"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unparsable_config_file_is_an_error() {
        let path = write_temp_config("garbage", "[server\nport = \"three thousand\"\n");
        assert!(AppConfig::load_or_env_from(&path.to_string_lossy()).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn valid_config_file_is_used() {
        let path = write_temp_config("valid", "[server]\nport = 8099\n");
        let cfg = AppConfig::load_or_env_from(&path.to_string_lossy()).unwrap();
        assert_eq!(cfg.server.port, 8099);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn blank_data_file_is_rejected() {
        let storage = StorageConfig { data_file: " ".into(), public_dir: "public".into() };
        assert!(storage.validate().is_err());
        let dir = StorageConfig { data_file: "data/".into(), public_dir: "public".into() };
        assert!(dir.validate().is_err());
    }
}
