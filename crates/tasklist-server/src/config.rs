//! Configuration for the server binary.
//!
//! All configuration is loaded from environment variables. The only
//! knobs are the bind address and port; the store itself has nothing to
//! configure (no files, no persistence).

use std::env;
use std::net::SocketAddr;

/// Default bind host when `TASKLIST_HOST` is unset.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default TCP port when `TASKLIST_PORT` is unset.
const DEFAULT_PORT: u16 = 8080;

/// Server settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Host address to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServerSettings {
    /// Load settings from environment variables.
    ///
    /// Optional variables:
    /// - `TASKLIST_HOST` -- bind address (default `0.0.0.0`)
    /// - `TASKLIST_PORT` -- TCP port (default `8080`)
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidPort`] when `TASKLIST_PORT` is set
    /// but is not a valid port number.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load(env::var("TASKLIST_HOST").ok(), env::var("TASKLIST_PORT").ok())
    }

    /// Build settings from optional raw host and port values.
    ///
    /// Split out of [`Self::from_env`] so the parsing rules can be tested
    /// without touching the process environment.
    fn load(host: Option<String>, port: Option<String>) -> Result<Self, SettingsError> {
        let host = host.unwrap_or_else(|| String::from(DEFAULT_HOST));

        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|source| SettingsError::InvalidPort {
                value: raw.clone(),
                source,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Resolve the settings into the socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when the host is not a
    /// literal IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|source| SettingsError::InvalidHost {
                host: self.host.clone(),
                source,
            })
    }
}

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `TASKLIST_PORT` was set but could not be parsed.
    #[error("invalid TASKLIST_PORT {value:?}: {source}")]
    InvalidPort {
        /// The raw value found in the environment.
        value: String,
        /// The underlying parse failure.
        source: std::num::ParseIntError,
    },

    /// `TASKLIST_HOST` does not form a bindable address.
    #[error("invalid TASKLIST_HOST {host:?}")]
    InvalidHost {
        /// The host value found in the environment.
        host: String,
        /// The underlying parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}
