use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use chrono::{FixedOffset, NaiveDate, Utc};
use url::Url;

use crate::error::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
// Brasília time, no DST
const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MONITORES_PATH: &str = "monitores.json";

#[derive(Debug, Clone)]
pub struct Config {
    addr: SocketAddr,
    upstream: Url,
    utc_offset: FixedOffset,
    fetch_timeout: Duration,
    monitores_path: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests don't have to touch the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let addr = SocketAddr::from_str(&format!("{host}:{port}"))
            .map_err(|e| Error::config(format!("invalid listen address {host}:{port}: {e}")))?;

        let upstream = lookup("UPSTREAM_URL")
            .ok_or_else(|| Error::config("UPSTREAM_URL must be set to the menu page address"))?;
        let upstream = Url::parse(&upstream)
            .map_err(|e| Error::config(format!("invalid UPSTREAM_URL {upstream}: {e}")))?;

        let offset_hours = parse_or(&lookup, "UTC_OFFSET_HOURS", DEFAULT_UTC_OFFSET_HOURS)?;
        let utc_offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| Error::config(format!("UTC_OFFSET_HOURS out of range: {offset_hours}")))?;

        let fetch_timeout = Duration::from_secs(parse_or(
            &lookup,
            "FETCH_TIMEOUT_SECS",
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?);

        let monitores_path = lookup("MONITORES_PATH")
            .unwrap_or_else(|| DEFAULT_MONITORES_PATH.to_string())
            .into();

        Ok(Self {
            addr,
            upstream,
            utc_offset,
            fetch_timeout,
            monitores_path,
        })
    }

    #[inline]
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    #[inline]
    #[must_use]
    pub const fn upstream(&self) -> &Url {
        &self.upstream
    }

    #[inline]
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    #[inline]
    #[must_use]
    pub fn monitores_path(&self) -> &std::path::Path {
        &self.monitores_path
    }

    /// The current calendar date in the configured zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> crate::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::config(format!("invalid {key} {raw:?}: {e}"))),
        None => Ok(default),
    }
}
