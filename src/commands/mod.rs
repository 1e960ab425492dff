//! Command implementations for the MLB roster CLI

pub mod evaluate_trade;
pub mod serve;
pub mod sync;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use crate::{MlbError, Result};

/// Parse `host` and `port` into a bind address
pub fn resolve_bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let host = host.trim().trim_start_matches('[').trim_end_matches(']');
    let ip = if host.eq_ignore_ascii_case("localhost") {
        "127.0.0.1"
    } else {
        host
    };

    ip.parse::<std::net::IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .map_err(|_| MlbError::Config {
            message: format!("invalid bind host: {host}"),
        })
}
