use sysdash::core::system_info::network::parse_ip_response;
use sysdash::core::system_info::storage::{select_disk, usage_for, DiskSample};
use sysdash::core::system_info::{StorageUnit, UNAVAILABLE};
use sysdash::ui::dashboard_tui::info_tables;
use sysdash::{collect_system_stats, DashboardConfig};

#[test]
fn test_offline_collection_fills_every_field() {
    let stats = collect_system_stats(&DashboardConfig::offline());

    assert!(!stats.cpu_name.is_empty());
    assert!(!stats.cpu_arch.is_empty());
    assert!(!stats.operating_system.is_empty());
    assert!(!stats.local_ipv4.is_empty());
    assert_eq!(stats.global_ip, UNAVAILABLE);
}

#[test]
fn test_collected_stats_feed_tables() {
    let stats = collect_system_stats(&DashboardConfig::offline());
    let tables = info_tables(&stats);

    assert_eq!(tables[0].rows()[0].1, stats.cpu_name);
    assert_eq!(tables[2].rows()[1].1, UNAVAILABLE);
}

#[test]
fn test_disk_pipeline() {
    let samples = vec![
        DiskSample {
            mount_point: "/boot".into(),
            total_bytes: 512 << 20,
            available_bytes: 256 << 20,
        },
        DiskSample {
            mount_point: "/".into(),
            total_bytes: 2 << 40,
            available_bytes: 1 << 40,
        },
    ];

    let usage = usage_for(select_disk(&samples).unwrap());
    assert_eq!(usage.unit, StorageUnit::TB);
    assert_eq!(usage.available, 1.0);
    assert_eq!(usage.used, 1.0);
    assert_eq!(usage.used_percent, 50.0);
}

#[test]
fn test_ip_response_whitespace_is_trimmed() {
    assert_eq!(
        parse_ip_response("{\"ip\": \" 198.51.100.4 \"}").unwrap(),
        "198.51.100.4"
    );
}
