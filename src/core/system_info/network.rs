use std::net::{IpAddr, UdpSocket};

use serde::Deserialize;

use crate::core::config::DashboardConfig;
use crate::core::system_info::types::{NetworkAddresses, UNAVAILABLE};
use crate::error::{DashError, Result};

/// Body returned by the public IP endpoint
#[derive(Debug, Deserialize)]
struct PublicIpResponse {
    ip: String,
}

/// Collect both addresses, falling back per address
pub fn collect(config: &DashboardConfig) -> NetworkAddresses {
    let local_ipv4 = local_ipv4(&config.route_target_addr).unwrap_or_else(|e| {
        log::warn!("Failed to determine local IPv4: {}", e);
        UNAVAILABLE.to_string()
    });

    let global_ip = if config.fetch_global_ip {
        global_ip(config).unwrap_or_else(|e| {
            log::warn!("Failed to fetch global IP: {}", e);
            UNAVAILABLE.to_string()
        })
    } else {
        UNAVAILABLE.to_string()
    };

    NetworkAddresses {
        local_ipv4,
        global_ip,
    }
}

/// Address of the interface the OS would route `target_addr` through.
///
/// `connect` on a UDP socket only selects a route; nothing goes on the wire.
pub fn local_ipv4(target_addr: &str) -> Result<String> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(target_addr)?;

    match socket.local_addr()?.ip() {
        IpAddr::V4(addr) if !addr.is_unspecified() => Ok(addr.to_string()),
        other => Err(DashError::collection(format!(
            "unexpected local address {}",
            other
        ))),
    }
}

pub fn global_ip(config: &DashboardConfig) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(config.http_timeout)
        .user_agent(concat!("sysdash/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(&config.public_ip_url).send()?;
    if !response.status().is_success() {
        return Err(DashError::collection(format!(
            "public IP endpoint returned status {}",
            response.status()
        )));
    }

    parse_ip_response(&response.text()?)
}

/// Extract and validate the address from a `{"ip": "..."}` body
pub fn parse_ip_response(body: &str) -> Result<String> {
    let parsed: PublicIpResponse = serde_json::from_str(body)?;
    let ip = parsed.ip.trim();

    ip.parse::<IpAddr>()
        .map(|addr| addr.to_string())
        .map_err(|_| DashError::collection(format!("invalid IP address '{}'", ip)))
}

pub fn get_fallback() -> NetworkAddresses {
    NetworkAddresses {
        local_ipv4: UNAVAILABLE.to_string(),
        global_ip: UNAVAILABLE.to_string(),
    }
}
