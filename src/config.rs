use std::net::SocketAddr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Whether to preload the sample employees/orders/bookings at startup.
    pub seed: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("PAYROLL_BIND_ADDR", "127.0.0.1:8080")
            .parse::<SocketAddr>()
            .context("PAYROLL_BIND_ADDR must be a valid host:port")?;

        let seed = env_string("PAYROLL_SEED", "true")
            .parse::<bool>()
            .context("PAYROLL_SEED must be true or false")?;

        Ok(Self { bind_addr, seed })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
