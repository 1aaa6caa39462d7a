use anyhow::{bail, Context, Result};
use api_envelope::PaginationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration: listener, logging and request paging limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub console_level: String, // "trace", "debug", "info", "warn", "error", "off"
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8087,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Layered loading: defaults → YAML file → environment variables.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let path = config_path.as_ref();
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(path))
            // Example: APP__SERVER__PORT=9000 maps to server.port
            .merge(Env::prefixed("APP__").split("__"));

        let config: AppConfig = figment
            .extract()
            .with_context(|| format!("Failed to extract config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `config_path` when given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.pagination;
        if p.default_size == 0 || p.max_size == 0 {
            bail!("pagination.default_size and pagination.max_size must be at least 1");
        }
        if p.default_size > p.max_size {
            bail!(
                "pagination.default_size ({}) exceeds pagination.max_size ({})",
                p.default_size,
                p.max_size
            );
        }
        Ok(())
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Apply overrides from command line arguments.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        match args.verbose {
            0 => {}
            1 => self.logging.console_level = "debug".to_string(),
            _ => self.logging.console_level = "trace".to_string(),
        }
    }
}

/// Command line arguments relevant to configuration.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_structure() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8087);
        assert_eq!(config.logging.console_level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.pagination.default_size, 20);
        assert_eq!(config.pagination.max_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_layered_overrides_defaults() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        let yaml = r#"
server:
  host: "0.0.0.0"
  port: 9090

logging:
  console_level: debug

pagination:
  max_size: 50
"#;
        fs::write(&cfg_path, yaml).unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.console_level, "debug");
        assert!(!config.logging.json);
        assert_eq!(config.pagination.default_size, 20);
        assert_eq!(config.pagination.max_size, 50);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        fs::write(&cfg_path, "pagination:\n  biggest: 5\n").unwrap();
        assert!(AppConfig::load_layered(&cfg_path).is_err());
    }

    #[test]
    fn test_inconsistent_pagination_is_rejected() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        fs::write(
            &cfg_path,
            "pagination:\n  default_size: 200\n  max_size: 100\n",
        )
        .unwrap();
        let err = AppConfig::load_layered(&cfg_path).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = tempdir().unwrap();
        assert!(AppConfig::load_or_default(Some(tmp.path().join("nope.yaml"))).is_err());
        assert_eq!(
            AppConfig::load_or_default(None::<&str>).unwrap(),
            AppConfig::default()
        );
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&CliArgs {
            port: Some(1234),
            verbose: 2,
        });
        assert_eq!(config.server.port, 1234);
        assert_eq!(config.logging.console_level, "trace");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("pagination"));
        let back: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
