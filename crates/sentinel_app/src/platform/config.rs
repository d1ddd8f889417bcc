use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sentinel_core::DEFAULT_REVEAL_DELAY;
use sentinel_engine::{ClientSettings, DEFAULT_ENDPOINT};
use sentinel_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILENAME: &str = "sentinel.ron";
const CONFIG_ENV: &str = "SENTINEL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    pub endpoint: String,
    pub reveal_delay_ms: u64,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
    /// Log file for `File` and `Both`; `./sentinel.log` when unset.
    pub log_file: Option<PathBuf>,
    pub default_query: String,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY.as_millis() as u64,
            request_timeout_secs: None,
            connect_timeout_secs: None,
            max_response_bytes: client.max_response_bytes,
            log_destination: LogDestination::default(),
            log_file: None,
            default_query: "High growth tech stocks".to_string(),
        }
    }
}

impl SentinelConfig {
    /// Loads the config from `explicit`, else `$SENTINEL_CONFIG`, else `./sentinel.ron`.
    ///
    /// Only the implicit `./sentinel.ron` may be missing; that yields defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match named {
            Some(path) => Self::from_path(&path),
            None => {
                let path = PathBuf::from(CONFIG_FILENAME);
                if path.exists() {
                    Self::from_path(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_demo_service() {
        let config = SentinelConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/analyze");
        assert_eq!(config.reveal_delay(), Duration::from_millis(800));
        let settings = config.client_settings();
        assert_eq!(settings.request_timeout, None);
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sentinel.ron");
        fs::write(
            &path,
            r#"(
                endpoint: "http://10.0.0.5:9000/analyze",
                reveal_delay_ms: 50,
                request_timeout_secs: Some(30),
                log_destination: Both,
                log_file: Some("logs/sentinel.log"),
            )"#,
        )
        .unwrap();

        let config = SentinelConfig::from_path(&path).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.5:9000/analyze");
        assert_eq!(config.reveal_delay(), Duration::from_millis(50));
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/sentinel.log")));
        assert_eq!(
            config.client_settings().request_timeout,
            Some(Duration::from_secs(30))
        );
        assert_eq!(config.default_query, SentinelConfig::default().default_query);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.ron");
        let err = SentinelConfig::resolve(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn unparsable_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(endpoint: 42").unwrap();

        let err = SentinelConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
