pub mod config;
pub mod system_info;
