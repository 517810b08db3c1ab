use crate::core::system_info::types::CpuInfo;
use crate::error::{DashError, Result};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

pub fn collect() -> Result<CpuInfo> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing());
    let sys = System::new_with_specifics(refresh);

    let brand = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .ok_or_else(|| DashError::collection("no CPU reported"))?;

    if brand.is_empty() {
        return Err(DashError::collection("empty CPU brand string"));
    }

    Ok(CpuInfo {
        name: brand,
        architecture: std::env::consts::ARCH.to_string(),
    })
}

pub fn get_fallback() -> CpuInfo {
    CpuInfo {
        name: "Unknown".to_string(),
        architecture: std::env::consts::ARCH.to_string(),
    }
}
