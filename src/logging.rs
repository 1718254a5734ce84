// ABOUTME: Logging configuration and structured logging setup for the marche server
// ABOUTME: Initializes tracing-subscriber from the environment with sane defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging setup built on `tracing` / `tracing-subscriber`.
//!
//! The binary calls [`init_from_env`] once at startup. `RUST_LOG` controls the
//! filter; without it the server logs at `info` for its own crate and `warn`
//! for dependencies.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter applied when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn,marche_server=info";

/// Initialize global logging from the environment.
///
/// # Errors
/// Returns an error if a subscriber was already installed.
pub fn init_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
