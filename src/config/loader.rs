//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching screener.toml structure.
//! Every section is optional; missing keys take the defaults below.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::market_data::YahooChartConfig;
use crate::application::PacingConfig;
use crate::domain::default_tickers;
use crate::strategy::AnalysisConfig;

/// Main configuration structure matching screener.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
    pub provider: ProviderSection,
    pub analysis: AnalysisConfig,
    pub universe: UniverseSection,
    pub logging: LoggingSection,
}

/// HTTP server configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerSection {
    /// Get port with environment variable override
    /// Checks PORT env var first, falls back to config value
    pub fn get_port(&self) -> u16 {
        self.resolve_port(std::env::var("PORT").ok().as_deref())
    }

    fn resolve_port(&self, env_value: Option<&str>) -> u16 {
        match env_value.map(str::trim).map(str::parse::<u16>) {
            Some(Ok(port)) if port > 0 => port,
            Some(_) => {
                tracing::warn!("Ignoring invalid PORT value, using {}", self.port);
                self.port
            }
            None => self.port,
        }
    }
}

/// Price history provider configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Chart API base URL
    pub api_url: String,
    /// Calendar days of history requested per ticker
    pub history_days: u32,
    /// Series are truncated to the most recent N closes
    pub max_observations: usize,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Attempts per ticker
    pub max_retries: u32,
    /// Pause after every N tickers
    pub pacing_batch: usize,
    /// Pause length in milliseconds
    pub pacing_pause_ms: u64,
}

impl Default for ProviderSection {
    fn default() -> Self {
        let chart = YahooChartConfig::default();
        let pacing = PacingConfig::default();
        Self {
            api_url: chart.api_base_url,
            history_days: chart.history_days,
            max_observations: chart.max_observations,
            timeout_secs: chart.timeout.as_secs(),
            max_retries: chart.max_retries,
            pacing_batch: pacing.batch,
            pacing_pause_ms: pacing.pause.as_millis() as u64,
        }
    }
}

/// Ticker universe section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UniverseSection {
    /// Empty means the built-in default universe
    pub tickers: Vec<String>,
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".to_string(),
            ));
        }

        self.analysis
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        if self.provider.api_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "provider.api_url must not be empty".to_string(),
            ));
        }

        if self.provider.history_days == 0 {
            return Err(ConfigError::ValidationError(
                "provider.history_days must be > 0".to_string(),
            ));
        }

        if self.provider.max_observations < self.analysis.min_observations {
            return Err(ConfigError::ValidationError(format!(
                "provider.max_observations ({}) must be >= analysis.min_observations ({})",
                self.provider.max_observations, self.analysis.min_observations
            )));
        }

        if self.provider.pacing_batch == 0 {
            return Err(ConfigError::ValidationError(
                "provider.pacing_batch must be > 0".to_string(),
            ));
        }

        if let Some(bad) = self.universe.tickers.iter().find(|t| t.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "universe.tickers contains an empty symbol: {:?}",
                bad
            )));
        }

        Ok(())
    }

    /// Configured tickers, or the default universe when none are listed
    pub fn tickers(&self) -> Vec<String> {
        if self.universe.tickers.is_empty() {
            default_tickers()
        } else {
            self.universe
                .tickers
                .iter()
                .map(|t| t.trim().to_uppercase())
                .collect()
        }
    }
}

impl From<&Config> for YahooChartConfig {
    fn from(config: &Config) -> Self {
        YahooChartConfig {
            api_base_url: config.provider.api_url.clone(),
            history_days: config.provider.history_days,
            max_observations: config.provider.max_observations,
            min_observations: config.analysis.min_observations,
            timeout: Duration::from_secs(config.provider.timeout_secs),
            max_retries: config.provider.max_retries,
        }
    }
}

impl From<&Config> for PacingConfig {
    fn from(config: &Config) -> Self {
        PacingConfig {
            batch: config.provider.pacing_batch,
            pause: Duration::from_millis(config.provider.pacing_pause_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::DeviationPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_valid_config() -> String {
        r#"
[server]
host = "127.0.0.1"
port = 8080

[provider]
api_url = "https://query2.finance.yahoo.com/v8/finance/chart"
history_days = 180
max_observations = 120
timeout_secs = 5
max_retries = 2
pacing_batch = 20
pacing_pause_ms = 250

[analysis]
min_observations = 60
rsi_period = 14
std_epsilon = 0.01
deviation_policy = "two_sided"
default_min_z = 2.0
default_top_n = 5

[universe]
tickers = ["aapl", " MSFT "]

[logging]
level = "debug"
"#
        .to_string()
    }

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(&create_valid_config());
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.history_days, 180);
        assert_eq!(config.analysis.min_observations, 60);
        assert_eq!(config.analysis.deviation_policy, DeviationPolicy::TwoSided);
        assert_eq!(config.tickers(), vec!["AAPL", "MSFT"]);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.provider.max_observations, 100);
        assert_eq!(config.provider.pacing_batch, 10);
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert_eq!(config.tickers(), default_tickers());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let file = write_config("[analysis]\ndefault_top_n = 25\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.analysis.default_top_n, 25);
        assert_eq!(config.analysis.min_observations, 50);
        assert_eq!(config.analysis.deviation_policy, DeviationPolicy::OversoldOnly);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/screener.toml");
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[server\nport = ");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let file = write_config("[analysis]\ndeviation_policy = \"sideways\"\n");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_validation_failures() {
        let cases = [
            "[server]\nport = 0\n",
            "[analysis]\nmin_observations = 10\n",
            "[analysis]\nstd_epsilon = 0.0\n",
            "[provider]\nmax_observations = 40\n",
            "[provider]\npacing_batch = 0\n",
            "[provider]\nhistory_days = 0\n",
            "[provider]\napi_url = \"\"\n",
            "[universe]\ntickers = [\"AAPL\", \"\"]\n",
        ];

        for case in cases {
            let file = write_config(case);
            assert!(
                matches!(load_config(file.path()), Err(ConfigError::ValidationError(_))),
                "expected validation failure for {:?}",
                case
            );
        }
    }

    #[test]
    fn test_port_override() {
        let server = ServerSection::default();
        assert_eq!(server.resolve_port(None), 5000);
        assert_eq!(server.resolve_port(Some("8081")), 8081);
        assert_eq!(server.resolve_port(Some("not-a-port")), 5000);
        assert_eq!(server.resolve_port(Some("0")), 5000);
    }

    #[test]
    fn test_config_conversions() {
        let file = write_config(&create_valid_config());
        let config = load_config(file.path()).unwrap();

        let chart = YahooChartConfig::from(&config);
        assert_eq!(chart.api_base_url, "https://query2.finance.yahoo.com/v8/finance/chart");
        assert_eq!(chart.history_days, 180);
        assert_eq!(chart.max_observations, 120);
        assert_eq!(chart.min_observations, 60);
        assert_eq!(chart.timeout, Duration::from_secs(5));
        assert_eq!(chart.max_retries, 2);

        let pacing = PacingConfig::from(&config);
        assert_eq!(pacing.batch, 20);
        assert_eq!(pacing.pause, Duration::from_millis(250));
    }
}
