// UI and formatting module

pub mod dashboard_tui;
pub mod formatters;

pub use formatters::{format_amount, format_percent};
