use std::time::Duration;

/// Settings for the startup stat collection.
///
/// Nothing is read from disk; every field has an in-code default.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Endpoint answering with `{"ip": "<address>"}`
    pub public_ip_url: String,
    pub http_timeout: Duration,
    /// Remote address used to find the outbound interface (no packet is sent)
    pub route_target_addr: String,
    /// Skip the HTTP lookup entirely when false
    pub fetch_global_ip: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            public_ip_url: "https://api.ipify.org?format=json".to_string(),
            http_timeout: Duration::from_secs(5),
            route_target_addr: "8.8.8.8:80".to_string(),
            fetch_global_ip: true,
        }
    }
}

impl DashboardConfig {
    /// Config that never touches the network beyond the local route lookup
    pub fn offline() -> Self {
        Self {
            fetch_global_ip: false,
            ..Default::default()
        }
    }
}
