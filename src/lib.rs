// sysdash Library - Public API

// Re-export error types
pub mod error;
pub use error::{DashError, Result};

// Module declarations
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::DashboardConfig;
pub use crate::core::system_info::{collect_system_stats, SystemStats};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
