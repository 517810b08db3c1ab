use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event_handler::{map_event, DashboardEvent};
use super::render::render_ui;
use super::tab_view::{TabView, Transition};
use super::theme::Theme;
use super::widgets::{info_tables, TAB_LABELS};
use crate::core::system_info::SystemStats;

/// Dashboard application state
pub struct DashboardApp {
    pub view: TabView,
    pub theme: Theme,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(view: TabView, theme: Theme) -> Self {
        Self {
            view,
            theme,
            should_quit: false,
        }
    }

    /// Build the three standard tabs from collected stats
    pub fn from_stats(stats: &SystemStats, theme: Theme) -> crate::error::Result<Self> {
        let view = TabView::new(TAB_LABELS.to_vec(), info_tables(stats))?;
        Ok(Self::new(view, theme))
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: DashboardEvent) {
        if self.view.handle_event(event) == Transition::Quit {
            self.should_quit = true;
        }
    }
}

/// Run the dashboard TUI application
pub fn run_dashboard_app(mut app: DashboardApp) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to create terminal");
        }
    };

    log::debug!("Dashboard started with {} tabs", app.view.tab_count());
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    let restored = restore_terminal(&mut terminal);
    log::debug!("Dashboard stopped on tab {}", app.view.active_index());

    prefer_loop_error(result, restored)
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut DashboardApp) -> Result<()> {
    loop {
        terminal
            .draw(|frame| render_ui(frame, app))
            .context("Failed to draw frame")?;

        let terminal_event = event::read().context("Event read failed")?;
        app.handle_event(map_event(&terminal_event));

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Every step runs even when an earlier one fails
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let steps = [
        disable_raw_mode().context("Failed to disable raw mode"),
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen"),
        terminal.show_cursor().context("Failed to show cursor"),
    ];
    first_failure(steps)
}

/// First error of `steps`; the others are logged
fn first_failure(steps: impl IntoIterator<Item = Result<()>>) -> Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(e) = step {
            if first.is_none() {
                first = Some(e);
            } else {
                log::warn!("Terminal restore: {:#}", e);
            }
        }
    }
    first.map_or(Ok(()), Err)
}

/// The event loop's error wins over a restore error, which is then only logged
fn prefer_loop_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            log::warn!("Terminal restore: {:#}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}
