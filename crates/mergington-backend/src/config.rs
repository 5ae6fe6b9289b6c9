use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use mergington::errors::ConfigError;

pub const HOST_VAR: &str = "MERGINGTON_HOST";
pub const PORT_VAR: &str = "MERGINGTON_PORT";
pub const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";

const DEFAULT_PORT: u16 = 3030;
const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served under `/static`, holding the landing page.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: HOST_VAR,
                    value: host.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: PORT_VAR,
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(dir) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:3030");
    }

    #[test]
    fn overrides_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "8000"),
            (STATIC_DIR_VAR, "dist"),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();

        let ConfigError::InvalidValue { key, value, .. } = err;
        assert_eq!(key, PORT_VAR);
        assert_eq!(value, "eighty");
    }

    #[test]
    fn invalid_host_is_rejected() {
        assert!(Config::from_lookup(lookup(&[(HOST_VAR, "not a host")])).is_err());
    }
}
