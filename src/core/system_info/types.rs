use serde::{Deserialize, Serialize};

/// Placeholder shown when a value could not be collected
pub const UNAVAILABLE: &str = "Unavailable";

/// Everything the dashboard displays, collected once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub cpu_name: String,
    pub cpu_arch: String,
    pub operating_system: String,

    // Disk amounts are expressed in `storage_unit`
    pub disk_available: f64,
    pub disk_used: f64,
    pub storage_unit: StorageUnit,
    pub disk_used_percent: f32,

    pub local_ipv4: String,
    pub global_ip: String,
}

impl Default for SystemStats {
    fn default() -> Self {
        Self {
            cpu_name: "Unknown".to_string(),
            cpu_arch: std::env::consts::ARCH.to_string(),
            operating_system: "Unknown".to_string(),
            disk_available: 0.0,
            disk_used: 0.0,
            storage_unit: StorageUnit::GB,
            disk_used_percent: 0.0,
            local_ipv4: UNAVAILABLE.to_string(),
            global_ip: UNAVAILABLE.to_string(),
        }
    }
}

/// CPU and OS identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub name: String,
    pub architecture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: String,
}

/// Usage of the disk shown on the dashboard, already scaled to `unit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub available: f64,
    pub used: f64,
    pub unit: StorageUnit,
    pub used_percent: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAddresses {
    pub local_ipv4: String,
    pub global_ip: String,
}

/// 1024-based storage units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageUnit {
    B,
    KB,
    MB,
    GB,
    TB,
}

impl StorageUnit {
    const ALL: [StorageUnit; 5] = [
        StorageUnit::B,
        StorageUnit::KB,
        StorageUnit::MB,
        StorageUnit::GB,
        StorageUnit::TB,
    ];

    /// Number of bytes in one unit
    pub fn bytes(self) -> u64 {
        match self {
            StorageUnit::B => 1,
            StorageUnit::KB => 1 << 10,
            StorageUnit::MB => 1 << 20,
            StorageUnit::GB => 1 << 30,
            StorageUnit::TB => 1 << 40,
        }
    }

    /// Largest unit that keeps `total_bytes` at or above 1
    pub fn for_size(total_bytes: u64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|unit| total_bytes >= unit.bytes())
            .unwrap_or(StorageUnit::B)
    }

    /// Convert bytes into this unit, rounded to two decimals
    pub fn scale(self, bytes: u64) -> f64 {
        let value = bytes as f64 / self.bytes() as f64;
        (value * 100.0).round() / 100.0
    }
}

impl std::fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageUnit::B => write!(f, "B"),
            StorageUnit::KB => write!(f, "KB"),
            StorageUnit::MB => write!(f, "MB"),
            StorageUnit::GB => write!(f, "GB"),
            StorageUnit::TB => write!(f, "TB"),
        }
    }
}
