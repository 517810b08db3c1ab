use crate::core::system_info::types::OsInfo;
use crate::error::{DashError, Result};
use sysinfo::System;

pub fn collect() -> Result<OsInfo> {
    let name = System::long_os_version()
        .or_else(System::name)
        .ok_or_else(|| DashError::collection("operating system name not reported"))?;

    Ok(OsInfo { name })
}

pub fn get_fallback() -> OsInfo {
    OsInfo {
        name: "Unknown".to_string(),
    }
}
