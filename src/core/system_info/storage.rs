use std::path::{Path, PathBuf};

use crate::core::system_info::types::{DiskUsage, StorageUnit};
use crate::error::{DashError, Result};
use sysinfo::Disks;

/// Raw numbers for one mounted disk
#[derive(Debug, Clone, PartialEq)]
pub struct DiskSample {
    pub mount_point: PathBuf,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

pub fn collect() -> Result<DiskUsage> {
    let disks = Disks::new_with_refreshed_list();
    let samples: Vec<DiskSample> = disks
        .list()
        .iter()
        .map(|disk| DiskSample {
            mount_point: disk.mount_point().to_path_buf(),
            total_bytes: disk.total_space(),
            available_bytes: disk.available_space(),
        })
        .collect();

    let disk = select_disk(&samples).ok_or_else(|| DashError::collection("no disks found"))?;
    log::debug!("Using disk mounted at {}", disk.mount_point.display());

    Ok(usage_for(disk))
}

/// Pick the root filesystem, or the largest disk when there is none
pub fn select_disk(samples: &[DiskSample]) -> Option<&DiskSample> {
    samples
        .iter()
        .find(|s| s.mount_point == Path::new("/"))
        .or_else(|| samples.iter().max_by_key(|s| s.total_bytes))
}

pub fn usage_for(disk: &DiskSample) -> DiskUsage {
    let total = disk.total_bytes;
    let available = disk.available_bytes.min(total);
    let used = total.saturating_sub(available);
    let unit = StorageUnit::for_size(total);

    let used_percent = if total > 0 {
        let pct = used as f64 / total as f64 * 100.0;
        ((pct * 100.0).round() / 100.0) as f32
    } else {
        0.0
    };

    DiskUsage {
        available: unit.scale(available),
        used: unit.scale(used),
        unit,
        used_percent,
    }
}

pub fn get_fallback() -> DiskUsage {
    DiskUsage {
        available: 0.0,
        used: 0.0,
        unit: StorageUnit::GB,
        used_percent: 0.0,
    }
}
