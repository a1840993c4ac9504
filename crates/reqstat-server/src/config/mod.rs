//! Environment config loader.
//!
//! Three values, read once: the OS hostname, `APP_REPLICASET` and
//! `APP_INFLUXDB_URL`. Everything else is a constant.

pub mod schema;

use std::env;
use std::ffi::OsString;
use std::io;
use std::time::Duration;

pub use schema::AppConfig;

pub const LISTEN_ADDR: &str = "0.0.0.0:8000";
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);
pub const POST_TIMEOUT: Duration = Duration::from_secs(5);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

pub const ENV_REPLICASET: &str = "APP_REPLICASET";
pub const ENV_INFLUXDB_URL: &str = "APP_INFLUXDB_URL";

const UNKNOWN_HOST: &str = "unknown";

pub fn load_from_env() -> AppConfig {
    load_from_vars(hostname::get(), |key| env::var_os(key))
}

/// Build the config from an injected hostname and variable lookup.
///
/// Never fails: a missing variable is empty and non-unicode bytes are
/// replaced lossily, the same as the hostname.
pub fn load_from_vars<F>(host: io::Result<OsString>, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<OsString>,
{
    let read = |key: &str| {
        lookup(key)
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    let host = match host {
        Ok(h) => h.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, fallback = UNKNOWN_HOST, "hostname lookup failed");
            UNKNOWN_HOST.to_string()
        }
    };

    let cfg = AppConfig {
        host,
        replicaset: read(ENV_REPLICASET),
        influxdb_url: read(ENV_INFLUXDB_URL),
    };

    if let Err(e) = cfg.validate() {
        tracing::warn!(error = %e, "metrics endpoint looks unusable; reporting will fail every tick");
    }

    cfg
}
