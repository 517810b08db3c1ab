use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Rect},
    style::{Modifier, Style},
    widgets::{Row, Table, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::core::system_info::SystemStats;
use crate::ui::formatters::{format_amount, format_percent};

/// Width of each table column, in cells
pub const COLUMN_WIDTH: u16 = 29;
/// Padding on each side of a cell
const CELL_PADDING: u16 = 1;

pub const TAB_LABELS: [&str; 3] = [
    "System Information",
    "Disk Information",
    "Network Information",
];

/// Something a tab can display below the tab bar
pub trait ContentView {
    /// Natural (width, height) of the view
    fn size(&self) -> (u16, u16);

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);
}

/// Two-column (Property, Value) table showing a fixed number of rows
#[derive(Debug, Clone, PartialEq)]
pub struct InfoTable {
    rows: Vec<(String, String)>,
    height: u16,
}

impl InfoTable {
    pub fn new<K, V>(rows: Vec<(K, V)>, height: u16) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            height,
        }
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    /// Number of body rows that are drawn
    pub fn height(&self) -> u16 {
        self.height
    }

    fn width() -> u16 {
        2 * (COLUMN_WIDTH + 2 * CELL_PADDING)
    }
}

impl ContentView for InfoTable {
    fn size(&self) -> (u16, u16) {
        // header + rule + body
        (Self::width(), 2 + self.height)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Row::new(vec!["Property", "Value"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .take(self.height as usize)
            .map(|(property, value)| Row::new(vec![property.as_str(), value.as_str()]))
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(COLUMN_WIDTH),
                Constraint::Length(COLUMN_WIDTH),
            ],
        )
        .header(header)
        .column_spacing(2 * CELL_PADDING)
        .flex(Flex::Start);

        let table_area = Rect {
            x: area.x + CELL_PADDING.min(area.width),
            width: area.width.saturating_sub(2 * CELL_PADDING),
            height: area.height.min(2 + self.height),
            ..area
        };
        if table_area.width > 0 {
            Widget::render(table, table_area, buf);
        }

        if area.height >= 2 {
            let rule_width = Self::width().min(area.width) as usize;
            buf.set_string(
                area.x,
                area.y + 1,
                "─".repeat(rule_width),
                Style::default().fg(theme.highlight),
            );
        }
    }
}

/// Build the three dashboard tables from the collected stats
pub fn info_tables(stats: &SystemStats) -> Vec<InfoTable> {
    let system = InfoTable::new(
        vec![
            ("CPU Name", stats.cpu_name.clone()),
            ("CPU Architecture", stats.cpu_arch.clone()),
            ("Operating System", stats.operating_system.clone()),
        ],
        2,
    );

    let disk = InfoTable::new(
        vec![
            (
                "Available Disk Storage: ",
                format_amount(stats.disk_available, stats.storage_unit),
            ),
            (
                "Used Disk Storage: ",
                format_amount(stats.disk_used, stats.storage_unit),
            ),
            ("Disk Used %: ", format_percent(stats.disk_used_percent)),
        ],
        3,
    );

    let network = InfoTable::new(
        vec![
            ("Local IPv4: ", stats.local_ipv4.clone()),
            ("Global IP: ", stats.global_ip.clone()),
        ],
        2,
    );

    vec![system, disk, network]
}

/// Display width of a tab label, including padding and borders.
///
/// Saturates at `u16::MAX` for labels wider than any terminal.
pub fn tab_width(label: &str, theme: &Theme) -> u16 {
    u16::try_from(label.width())
        .unwrap_or(u16::MAX)
        .saturating_add(theme.tab_padding.saturating_mul(2))
        .saturating_add(2)
}
