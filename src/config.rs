use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/NateScarlet/holiday-cn/master/{year}.json";

/// Where yearly schedules are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Remote,
    Local,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub source: SourceKind,
    pub remote_url: String,
    pub data_dir: PathBuf,
    pub fetch_timeout: Option<Duration>,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: Option<u16>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let source = match lookup("HOLIDAY_SOURCE").as_deref() {
            None | Some("remote") => SourceKind::Remote,
            Some("local") => SourceKind::Local,
            Some(other) => return Err(ConfigError::InvalidSource(other.to_string())),
        };

        let remote_url =
            lookup("HOLIDAY_REMOTE_URL").unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string());
        if !remote_url.contains("{year}") {
            return Err(ConfigError::InvalidRemoteUrl(remote_url));
        }

        let data_dir = lookup("HOLIDAY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./holiday-cn"));

        let fetch_timeout = lookup("HOLIDAY_FETCH_TIMEOUT_SECS")
            .map(|secs| secs.parse().map_err(|_| ConfigError::InvalidTimeout))
            .transpose()?
            .map(Duration::from_secs);

        let otel_exporter_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT");

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "holiday-cn".to_string());

        let metrics_port = lookup("METRICS_PORT").and_then(|port| port.parse().ok());

        Ok(Config {
            server_host,
            server_port,
            source,
            remote_url,
            data_dir,
            fetch_timeout,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("HOLIDAY_SOURCE must be \"remote\" or \"local\", got {0:?}")]
    InvalidSource(String),

    #[error("HOLIDAY_REMOTE_URL must contain a {{year}} placeholder: {0}")]
    InvalidRemoteUrl(String),

    #[error("HOLIDAY_FETCH_TIMEOUT_SECS must be a whole number of seconds")]
    InvalidTimeout,
}
