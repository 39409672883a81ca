//! Service configuration read from the environment (and `.env`, if present).

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_SITE_URL: &str = "https://site.api.espn.com";
pub const DEFAULT_CORE_URL: &str = "http://sports.core.api.espn.com";
pub const DEFAULT_SEASON: u16 = 2025;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not in the correct format: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{var} must be at least 1")]
    Zero { var: &'static str },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    /// Base of the site API (team listing and lookup).
    pub site_url: String,
    /// Base of the core API (athlete listing, athlete detail, statistics).
    pub core_url: String,
    pub season: u16,
    pub http_timeout: Duration,
    /// Detail lookups kept in flight per listing page. 1 means strictly sequential.
    pub roster_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::LOCALHOST,
            port: 8000,
            site_url: DEFAULT_SITE_URL.to_string(),
            core_url: DEFAULT_CORE_URL.to_string(),
            season: DEFAULT_SEASON,
            http_timeout: Duration::from_secs(30),
            roster_concurrency: 1,
        }
    }
}

impl Config {
    /// Load `.env` and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs: u64 = parse_or(&lookup, "HTTP_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Zero { var: "HTTP_TIMEOUT_SECS" });
        }

        let roster_concurrency = parse_or(&lookup, "ROSTER_CONCURRENCY", defaults.roster_concurrency)?;
        if roster_concurrency == 0 {
            return Err(ConfigError::Zero { var: "ROSTER_CONCURRENCY" });
        }

        Ok(Self {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            site_url: base_url(&lookup, "ESPN_SITE_URL", defaults.site_url),
            core_url: base_url(&lookup, "ESPN_CORE_URL", defaults.core_url),
            season: parse_or(&lookup, "NFL_SEASON", defaults.season)?,
            http_timeout: Duration::from_secs(timeout_secs),
            roster_concurrency,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn base_url<F>(lookup: &F, var: &str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.host, Ipv4Addr::LOCALHOST);
        assert_eq!(config.port, 8000);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.core_url, DEFAULT_CORE_URL);
        assert_eq!(config.season, 2025);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.roster_concurrency, 1);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("ESPN_CORE_URL", "http://localhost:4000/"),
            ("NFL_SEASON", "2024"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("ROSTER_CONCURRENCY", "8"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.core_url, "http://localhost:4000");
        assert_eq!(config.season, 2024);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.roster_concurrency, 8);
    }

    #[test]
    fn malformed_port_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("ROSTER_CONCURRENCY", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero { var: "ROSTER_CONCURRENCY" });
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("HTTP_TIMEOUT_SECS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero { var: "HTTP_TIMEOUT_SECS" });
    }
}
