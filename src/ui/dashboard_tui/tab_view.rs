//! Tab view model: labels, per-tab content and the active tab.

use ratatui::{buffer::Buffer, layout::Rect};

use super::event_handler::DashboardEvent;
use super::render::TabViewWidget;
use super::theme::Theme;
use super::widgets::{ContentView, InfoTable};
use crate::error::{DashError, Result};

/// Outcome of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
}

/// Fixed set of tabs plus the index of the active one.
///
/// Labels and content are immutable after construction and always have the
/// same length. `active` stays within `0..len`; navigation clamps at both ends
/// instead of wrapping.
#[derive(Debug, Clone)]
pub struct TabView<C = InfoTable> {
    labels: Vec<String>,
    content: Vec<C>,
    active: usize,
}

impl<C: ContentView> TabView<C> {
    pub fn new<S: Into<String>>(labels: Vec<S>, content: Vec<C>) -> Result<Self> {
        if labels.is_empty() {
            return Err(DashError::invalid_tabs("at least one tab is required"));
        }
        if labels.len() != content.len() {
            return Err(DashError::invalid_tabs(format!(
                "{} labels but {} content views",
                labels.len(),
                content.len()
            )));
        }

        Ok(Self {
            labels: labels.into_iter().map(Into::into).collect(),
            content,
            active: 0,
        })
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: DashboardEvent) -> Transition {
        match event {
            DashboardEvent::Quit => return Transition::Quit,
            DashboardEvent::NextTab => self.active = (self.active + 1).min(self.labels.len() - 1),
            DashboardEvent::PrevTab => self.active = self.active.saturating_sub(1),
            DashboardEvent::None => {}
        }
        Transition::Continue
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of tabs, always at least one
    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_label(&self) -> &str {
        &self.labels[self.active]
    }

    pub fn active_content(&self) -> &C {
        &self.content[self.active]
    }

    /// Render the full frame at its natural size
    pub fn render_to_buffer(&self, theme: &Theme) -> Buffer {
        let widget = TabViewWidget::new(self, theme);
        let (width, height) = widget.size();
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        widget.render_natural(&mut buf);
        buf
    }

    /// Frame as plain text, one line per buffer row
    pub fn render_to_string(&self, theme: &Theme) -> String {
        let buf = self.render_to_buffer(theme);
        (0..buf.area.height)
            .map(|y| {
                let line: String = (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
