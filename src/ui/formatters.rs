use crate::core::system_info::StorageUnit;

/// Format a disk amount followed by its unit, e.g. `120.5GB`
pub fn format_amount(value: f64, unit: StorageUnit) -> String {
    format!("{}{}", value, unit)
}

/// Format a percentage using the shortest representation of the value
pub fn format_percent(value: f32) -> String {
    format!("{}%", value)
}
