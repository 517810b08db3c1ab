use ratatui::{
    buffer::Buffer,
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::app::DashboardApp;
use super::tab_view::TabView;
use super::theme::{tab_border, TabPosition, Theme};
use super::widgets::{tab_width, ContentView};

/// Height of a tab box: top border, label, bottom border
const TAB_HEIGHT: u16 = 3;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    frame.render_widget(TabViewWidget::new(&app.view, &app.theme), frame.area());
}

/// Draws the tab bar and the active tab's content.
///
/// The frame is laid out at its natural size and copied into the target
/// area, so a small terminal cuts it off instead of squeezing it.
pub struct TabViewWidget<'a, C> {
    view: &'a TabView<C>,
    theme: &'a Theme,
}

impl<'a, C: ContentView> TabViewWidget<'a, C> {
    pub fn new(view: &'a TabView<C>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn tab_row_width(&self) -> u16 {
        self.view
            .labels()
            .iter()
            .map(|label| tab_width(label, self.theme))
            .fold(0, u16::saturating_add)
    }

    /// The content window is as wide as the tab row, or wider if the content needs it.
    ///
    /// A wider window continues the tab row's bottom edge out to a `┐` corner.
    fn window_width(&self) -> u16 {
        let (content_width, _) = self.view.active_content().size();
        self.tab_row_width().max(content_width.saturating_add(2))
    }

    /// Natural (width, height) of the whole frame
    pub fn size(&self) -> (u16, u16) {
        let pad = self.theme.doc_padding;
        let (_, content_height) = self.view.active_content().size();
        let width = pad
            .left
            .saturating_add(self.window_width())
            .saturating_add(pad.right);
        let height = (pad.top + TAB_HEIGHT + 1 + pad.bottom).saturating_add(content_height);
        (width, height)
    }

    /// Draw at natural size; `buf` must start at the origin and be at least `size()`
    pub(crate) fn render_natural(&self, buf: &mut Buffer) {
        let pad = self.theme.doc_padding;
        let border_style = Style::default().fg(self.theme.highlight);
        let count = self.view.tab_count();
        let row_width = self.tab_row_width();
        let window_width = self.window_width();
        let extended = window_width > row_width;

        let mut x = buf.area.x + pad.left;
        let y = buf.area.y + pad.top;
        for (i, label) in self.view.labels().iter().enumerate() {
            let width = tab_width(label, self.theme);
            let mut position = TabPosition::new(i, count, self.view.active_index());
            // the bottom edge carries on past the last tab
            position.is_last &= !extended;
            let glyphs = tab_border(position);
            let block = Block::bordered()
                .border_set(border::Set {
                    top_left: glyphs.top_left,
                    top_right: glyphs.top_right,
                    bottom_left: glyphs.bottom_left,
                    bottom_right: glyphs.bottom_right,
                    vertical_left: glyphs.left,
                    vertical_right: glyphs.right,
                    horizontal_top: glyphs.top,
                    horizontal_bottom: glyphs.bottom,
                })
                .border_style(border_style)
                .padding(Padding::horizontal(self.theme.tab_padding));

            Paragraph::new(label.as_str())
                .block(block)
                .render(Rect::new(x, y, width, TAB_HEIGHT), buf);
            x = x.saturating_add(width);
        }

        if extended {
            let edge = format!(
                "{}┐",
                "─".repeat(usize::from(window_width - row_width - 1))
            );
            buf.set_string(x, y + TAB_HEIGHT - 1, edge, border_style);
        }

        let (_, content_height) = self.view.active_content().size();
        let window_area = Rect::new(
            buf.area.x + pad.left,
            y + TAB_HEIGHT,
            window_width,
            content_height.saturating_add(1),
        );
        let window = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_set(border::PLAIN)
            .border_style(border_style);
        let inner = window.inner(window_area);
        window.render(window_area, buf);

        self.view.active_content().render(inner, buf, self.theme);
    }
}

impl<C: ContentView> Widget for TabViewWidget<'_, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let (width, height) = self.size();
        let mut frame_buf = Buffer::empty(Rect::new(0, 0, width, height));
        self.render_natural(&mut frame_buf);

        let area = area.intersection(buf.area);
        for dy in 0..height.min(area.height) {
            for dx in 0..width.min(area.width) {
                buf[(area.x + dx, area.y + dy)] = frame_buf[(dx, dy)].clone();
            }
        }
    }
}
