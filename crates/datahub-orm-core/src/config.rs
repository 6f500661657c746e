// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DataHub server address configuration.
//!
//! Resolution order for [`ServerAddress::from_env`], per component:
//!
//! | Component | Variable | Fallback |
//! |-----------|----------|----------|
//! | host | `DATAHUB_SERVER_HOST` | [`SERVER_ADDR_ROOT`] |
//! | port | `DATAHUB_SERVER_PORT` | [`SERVER_ADDR_PORT`] |
//!
//! # Example
//!
//! ```rust
//! use datahub_orm_core::ServerAddress;
//!
//! let addr: ServerAddress = "localhost:9100".parse().unwrap();
//! assert_eq!(addr.host(), "localhost");
//! assert_eq!(addr.port(), 9100);
//!
//! let default = ServerAddress::default();
//! assert_eq!(default.to_string(), "datahub-experimental.csail.mit.edu:9000");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{SERVER_ADDR_PORT, SERVER_ADDR_ROOT},
    error::ConfigError
};

/// Environment variable overriding the server host.
pub const HOST_ENV: &str = "DATAHUB_SERVER_HOST";

/// Environment variable overriding the server port.
pub const PORT_ENV: &str = "DATAHUB_SERVER_PORT";

fn default_host() -> String {
    SERVER_ADDR_ROOT.to_string()
}

const fn default_port() -> u16 {
    SERVER_ADDR_PORT
}

/// Host and port of the DataHub server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawServerAddress")]
pub struct ServerAddress {
    host: String,
    port: u16
}

/// Unvalidated deserialization shape.
#[derive(Deserialize)]
struct RawServerAddress {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16
}

impl TryFrom<RawServerAddress> for ServerAddress {
    type Error = ConfigError;

    fn try_from(raw: RawServerAddress) -> Result<Self, Self::Error> {
        Self::new(raw.host, raw.port)
    }
}

impl ServerAddress {
    /// Create a validated address.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyHost`] if `host` is blank
    /// - [`ConfigError::InvalidPort`] if `port` is zero
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ConfigError> {
        let host = host.into().trim().to_string();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if port == 0 {
            return Err(ConfigError::InvalidPort(port.to_string()));
        }
        Ok(Self {
            host,
            port
        })
    }

    /// Server host name or IP literal.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server TCP port.
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Resolve from `DATAHUB_SERVER_HOST` / `DATAHUB_SERVER_PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the compiled-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let host = match lookup(HOST_ENV) {
            Some(host) => {
                debug!(host = %host, "server host overridden from {HOST_ENV}");
                host
            }
            None => default_host()
        };
        let port = match lookup(PORT_ENV) {
            Some(port) => {
                debug!(port = %port, "server port overridden from {PORT_ENV}");
                parse_port(&port)?
            }
            None => default_port()
        };
        Self::new(host, port)
    }
}

impl Default for ServerAddress {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port()
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for ServerAddress {
    type Err = ConfigError;

    /// Parse `host`, `host:port`, `[v6]` or `[v6]:port`.
    ///
    /// A missing port means [`SERVER_ADDR_PORT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if let Some(rest) = s.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .ok_or_else(|| ConfigError::MalformedAddress(s.to_string()))?;
            let port = match tail {
                "" => default_port(),
                _ => {
                    let port = tail
                        .strip_prefix(':')
                        .ok_or_else(|| ConfigError::MalformedAddress(s.to_string()))?;
                    parse_port(port)?
                }
            };
            return Self::new(host, port);
        }

        // More than one colon is a bare IPv6 literal without a port.
        match s.split_once(':') {
            Some((host, port)) if !port.contains(':') => Self::new(host, parse_port(port)?),
            _ => Self::new(s, default_port())
        }
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(value.to_string()))
    }
}
