//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, YAML file (when given),
//! `APP__*` environment variables, CLI overrides.

use std::path::Path;

use contacts::ServiceConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub contacts: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
            request_timeout_secs: 30,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dsn: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://contacts.db?mode=rwc".to_owned(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults -> YAML (if provided) -> env (`APP__*`).
    ///
    /// # Errors
    /// Returns an error when the file or environment cannot be parsed into
    /// the expected shape.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed("APP__").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, mock: bool) {
        if let Some(port) = port {
            let host = self
                .server
                .bind_addr
                .rsplit_once(':')
                .map_or("127.0.0.1", |(host, _)| host);
            self.server.bind_addr = format!("{host}:{port}");
        }
        if mock {
            self.database.dsn = "sqlite::memory:".to_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::AppConfig;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn cli_port_override_rewrites_bind_addr() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(Some(9000), false);
        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn mock_override_switches_to_inmemory_sqlite() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(None, true);
        assert_eq!(config.database.dsn, "sqlite::memory:");
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APP__SERVER__BIND_ADDR", "0.0.0.0:8080");
            let config = AppConfig::load_or_default(None).unwrap();
            assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
            Ok(())
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
database:
  dsn: "sqlite::memory:"
contacts:
  max_field_length: 64
"#,
            )?;
            let config =
                AppConfig::load_or_default(Some(std::path::Path::new("config.yaml"))).unwrap();
            assert_eq!(config.database.dsn, "sqlite::memory:");
            assert_eq!(config.contacts.max_field_length, 64);
            Ok(())
        });
    }
}
