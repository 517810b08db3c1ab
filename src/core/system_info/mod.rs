pub mod collector;
pub mod cpu;
pub mod network;
pub mod os;
pub mod storage;
pub mod types;

pub use collector::collect_system_stats;
pub use types::*;
