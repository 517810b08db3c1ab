use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events that can occur in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Switch to the tab on the right
    NextTab,
    /// Switch to the tab on the left
    PrevTab,
    /// No action
    None,
}

/// Classify a terminal event; anything but a key press is `None`
pub fn map_event(event: &Event) -> DashboardEvent {
    match event {
        Event::Key(key) => map_key(key),
        _ => DashboardEvent::None,
    }
}

pub fn map_key(key: &KeyEvent) -> DashboardEvent {
    if key.kind != KeyEventKind::Press {
        return DashboardEvent::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let plain = !ctrl && !key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => DashboardEvent::Quit,
        KeyCode::Char('q') if plain => DashboardEvent::Quit,
        KeyCode::Right | KeyCode::Tab => DashboardEvent::NextTab,
        KeyCode::Char('l') | KeyCode::Char('n') if plain => DashboardEvent::NextTab,
        KeyCode::Left | KeyCode::BackTab => DashboardEvent::PrevTab,
        KeyCode::Char('h') | KeyCode::Char('p') if plain => DashboardEvent::PrevTab,
        _ => DashboardEvent::None,
    }
}
