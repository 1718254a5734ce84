// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Carries the database URL and HTTP port with development defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-driven configuration.
//!
//! Recognized variables:
//! - `DATABASE_URL`: MariaDB connection string
//!   (default `mysql://root@localhost:3306/marche`)
//! - `HTTP_PORT`: listen port (default `8080`)

use anyhow::{Context, Result};
use std::env;

/// Runtime configuration for the server binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// MariaDB connection string
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mysql://root@localhost:3306/marche".into());

        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT value: {raw}"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            http_port,
        })
    }

    /// One-line summary for startup logging, with credentials elided.
    #[must_use]
    pub fn summary(&self) -> String {
        let redacted_url = self
            .database_url
            .split_once('@')
            .map_or(self.database_url.clone(), |(_, host)| {
                format!("mysql://***@{host}")
            });
        format!("http_port={} database={redacted_url}", self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_elides_credentials() {
        let config = ServerConfig {
            database_url: "mysql://user:secret@db:3306/marche".into(),
            http_port: 8080,
        };
        let summary = config.summary();
        assert!(!summary.contains("secret"));
        assert!(summary.contains("db:3306/marche"));
    }
}
