use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::PathBuf;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetConfig {
    /// Path of the TOML dataset file. When absent the embedded default
    /// dataset is used.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MetricsConfig {
    #[serde(default)]
    pub trend_fit: TrendFit,
}

/// Which monthly records participate in the sales trend fit.
///
/// `CompleteRecords` fits over the same filtered view the profit and growth
/// charts use (months with a cost figure); `AllRecords` fits over every month
/// with a sales figure.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TrendFit {
    #[default]
    CompleteRecords,
    AllRecords,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[metrics]
trend_fit = "complete-records"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Load configuration and store it for process-wide access.
pub fn initialize_config() -> anyhow::Result<&'static Config> {
    let config = load_config()?;
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Failed to set CONFIG"))?;
    Ok(get_config())
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Configuration has not been initialized")
}

/// Resolve the dataset file path from configuration, if one is set.
/// Relative paths resolve against the executable directory.
pub fn dataset_path(config: &Config) -> Option<PathBuf> {
    let raw = config.dataset.path.as_deref()?;
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return Some(path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(&path));
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.metrics.trend_fit, TrendFit::CompleteRecords);
        assert!(config.dataset.path.is_none());
    }

    #[test]
    fn test_trend_fit_parses_kebab_case() {
        let config: Config = toml::from_str(
            r#"
            [metrics]
            trend_fit = "all-records"
            "#,
        )
        .unwrap();
        assert_eq!(config.metrics.trend_fit, TrendFit::AllRecords);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.metrics.trend_fit, TrendFit::CompleteRecords);
    }
}
