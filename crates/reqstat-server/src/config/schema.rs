use reqwest::Url;
use reqstat_core::{Result, StatsError};

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `host` tag on every reported line.
    pub host: String,
    /// `replicaset` tag. May be empty.
    pub replicaset: String,
    /// Collector write endpoint. May be empty or malformed; every report then fails.
    pub influxdb_url: String,
}

impl AppConfig {
    /// Check the collector URL.
    ///
    /// An error here is never fatal: the loader logs it and keeps the config,
    /// and the reporter fails softly on each tick instead.
    pub fn validate(&self) -> Result<()> {
        if self.influxdb_url.is_empty() {
            return Err(StatsError::Config(
                "APP_INFLUXDB_URL is empty; metrics will not be delivered".into(),
            ));
        }
        let url = Url::parse(&self.influxdb_url).map_err(|e| {
            StatsError::Config(format!("APP_INFLUXDB_URL is not a valid url: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(StatsError::Config(format!(
                "APP_INFLUXDB_URL must be http or https, got {}",
                url.scheme()
            )));
        }
        Ok(())
    }
}
