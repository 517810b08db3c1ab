use crate::core::config::DashboardConfig;
use crate::core::system_info::types::*;
use crate::core::system_info::{cpu, network, os, storage};
use log::{debug, warn};

/// Collect everything the dashboard shows.
///
/// Sub-collector failures are logged and replaced by placeholder values, so
/// this never fails.
pub fn collect_system_stats(config: &DashboardConfig) -> SystemStats {
    let cpu_info = cpu::collect().unwrap_or_else(|e| {
        warn!("Failed to collect CPU info: {}", e);
        cpu::get_fallback()
    });

    let os_info = os::collect().unwrap_or_else(|e| {
        warn!("Failed to collect OS info: {}", e);
        os::get_fallback()
    });

    let disk = storage::collect().unwrap_or_else(|e| {
        warn!("Failed to collect disk info: {}", e);
        storage::get_fallback()
    });

    let addresses = network::collect(config);

    let stats = assemble(cpu_info, os_info, disk, addresses);
    debug!("Collected system stats: {:?}", stats);
    stats
}

fn assemble(
    cpu: CpuInfo,
    os: OsInfo,
    disk: DiskUsage,
    addresses: NetworkAddresses,
) -> SystemStats {
    SystemStats {
        cpu_name: cpu.name,
        cpu_arch: cpu.architecture,
        operating_system: os.name,
        disk_available: disk.available,
        disk_used: disk.used,
        storage_unit: disk.unit,
        disk_used_percent: disk.used_percent,
        local_ipv4: addresses.local_ipv4,
        global_ip: addresses.global_ip,
    }
}
