//! Colours, spacing and border glyphs for the dashboard.

use ratatui::{style::Color, widgets::Padding};

/// Highlight colour used for every border (#EC9F05)
pub const HIGHLIGHT: Color = Color::Rgb(0xEC, 0x9F, 0x05);

/// Immutable styling passed to every render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub highlight: Color,
    /// Space around the whole frame
    pub doc_padding: Padding,
    /// Columns on each side of a tab label
    pub tab_padding: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: HIGHLIGHT,
            doc_padding: Padding::new(2, 2, 1, 1),
            tab_padding: 1,
        }
    }
}

/// Where a tab sits in the bar and whether it is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPosition {
    pub is_first: bool,
    pub is_last: bool,
    pub is_active: bool,
}

impl TabPosition {
    pub fn new(index: usize, count: usize, active: usize) -> Self {
        Self {
            is_first: index == 0,
            is_last: index + 1 == count,
            is_active: index == active,
        }
    }
}

/// Glyphs for the eight border cells of a tab box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBorder {
    pub top_left: &'static str,
    pub top: &'static str,
    pub top_right: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub bottom_left: &'static str,
    pub bottom: &'static str,
    pub bottom_right: &'static str,
}

/// Border for a tab at `position`.
///
/// Tabs have rounded tops. The bottom edge joins the content window below:
/// inactive tabs close it with `┴─┴`, the active tab leaves it open (`┘ └`).
/// The outer edges of the first and last tab continue the window's sides.
pub fn tab_border(position: TabPosition) -> TabBorder {
    let (mut bottom_left, bottom, mut bottom_right) = if position.is_active {
        ("┘", " ", "└")
    } else {
        ("┴", "─", "┴")
    };

    if position.is_first {
        bottom_left = if position.is_active { "│" } else { "├" };
    }
    if position.is_last {
        bottom_right = if position.is_active { "│" } else { "┤" };
    }

    TabBorder {
        top_left: "╭",
        top: "─",
        top_right: "╮",
        left: "│",
        right: "│",
        bottom_left,
        bottom,
        bottom_right,
    }
}
