//! Terminal User Interface for the system dashboard.
//!
//! Three tabs (system, disk, network) rendered with ratatui.

mod app;
mod event_handler;
mod render;
mod tab_view;
mod theme;
mod widgets;

pub use app::{run_dashboard_app, DashboardApp};
pub use event_handler::{map_event, map_key, DashboardEvent};
pub use render::{render_ui, TabViewWidget};
pub use tab_view::{TabView, Transition};
pub use theme::{tab_border, TabBorder, TabPosition, Theme, HIGHLIGHT};
pub use widgets::{info_tables, tab_width, ContentView, InfoTable, COLUMN_WIDTH, TAB_LABELS};
