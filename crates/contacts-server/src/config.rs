//! Server configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CONTACTS_HOST` | `0.0.0.0` | Listen address |
//! | `CONTACTS_PORT` | `8000` | Listen port |
//! | `CONTACTS_FRONTEND_URL` | unset | Sole allowed CORS origin; unset means permissive |
//! | `CONTACTS_STORE` | `memory` | Store backend: `memory` or `indexed` (case-insensitive) |

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;
use contacts_store::{ContactStore, InMemoryStore, IndexedStore};

pub const HOST_VAR: &str = "CONTACTS_HOST";
pub const PORT_VAR: &str = "CONTACTS_PORT";
pub const FRONTEND_URL_VAR: &str = "CONTACTS_FRONTEND_URL";
pub const STORE_VAR: &str = "CONTACTS_STORE";

pub const DEFAULT_PORT: u16 = 8000;

/// Configuration errors, one per malformed variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CONTACTS_HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },

    #[error("invalid CONTACTS_PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },

    #[error("invalid CONTACTS_FRONTEND_URL {value:?}: not a valid header value")]
    InvalidFrontendUrl { value: String },

    #[error("invalid CONTACTS_STORE {value:?}: expected \"memory\" or \"indexed\"")]
    InvalidStore { value: String },
}

/// Which [`ContactStore`] implementation backs the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// Insertion-ordered vector with linear scans.
    #[default]
    Memory,
    /// Map keyed by contact id.
    Indexed,
}

impl StoreBackend {
    /// Opens an empty store of this kind.
    pub fn open(self) -> Box<dyn ContactStore> {
        match self {
            StoreBackend::Memory => Box::new(InMemoryStore::new()),
            StoreBackend::Indexed => Box::new(IndexedStore::new()),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "indexed" => Ok(StoreBackend::Indexed),
            _ => Err(ConfigError::InvalidStore {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => f.write_str("memory"),
            StoreBackend::Indexed => f.write_str("indexed"),
        }
    }
}

/// Deployment configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// When set, the only origin CORS allows.
    pub frontend_origin: Option<HeaderValue>,
    pub store: StoreBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            frontend_origin: None,
            store: StoreBackend::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Unset and blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = ServerConfig::default();

        if let Some(value) = get(HOST_VAR) {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?;
        }
        if let Some(value) = get(PORT_VAR) {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?;
        }
        if let Some(value) = get(FRONTEND_URL_VAR) {
            // Browsers send the origin without a trailing slash.
            let origin = value.trim().trim_end_matches('/');
            config.frontend_origin = Some(
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidFrontendUrl { value: value.clone() })?,
            );
        }
        if let Some(value) = get(STORE_VAR) {
            config.store = value.parse()?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
