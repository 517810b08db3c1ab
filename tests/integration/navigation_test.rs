use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use sysdash::ui::dashboard_tui::{map_event, DashboardApp, DashboardEvent, Theme, Transition};
use sysdash::SystemStats;

fn app() -> DashboardApp {
    DashboardApp::from_stats(&SystemStats::default(), Theme::default()).unwrap()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_keys_drive_tab_switching() {
    let mut app = app();

    app.handle_event(map_event(&key(KeyCode::Right)));
    app.handle_event(map_event(&key(KeyCode::Char('l'))));
    assert_eq!(app.view.active_index(), 2);
    assert_eq!(app.view.active_label(), "Network Information");

    app.handle_event(map_event(&key(KeyCode::Tab)));
    assert_eq!(app.view.active_index(), 2);

    app.handle_event(map_event(&key(KeyCode::Char('h'))));
    assert_eq!(app.view.active_label(), "Disk Information");
}

#[test]
fn test_previous_sequence_from_last_tab() {
    let mut app = app();
    app.handle_event(DashboardEvent::NextTab);
    app.handle_event(DashboardEvent::NextTab);

    let seen: Vec<usize> = (0..3)
        .map(|_| {
            app.handle_event(map_event(&key(KeyCode::Left)));
            app.view.active_index()
        })
        .collect();
    assert_eq!(seen, vec![1, 0, 0]);
}

#[test]
fn test_quit_at_every_index() {
    for steps in 0..3 {
        let mut app = app();
        for _ in 0..steps {
            app.handle_event(DashboardEvent::NextTab);
        }
        assert_eq!(app.view.clone().handle_event(DashboardEvent::Quit), Transition::Quit);

        app.handle_event(map_event(&key(KeyCode::Char('q'))));
        assert!(app.should_quit);
        assert_eq!(app.view.active_index(), steps);
    }
}

#[test]
fn test_unmapped_key_keeps_state() {
    let mut app = app();
    app.handle_event(DashboardEvent::NextTab);

    app.handle_event(map_event(&key(KeyCode::Char('z'))));
    app.handle_event(map_event(&Event::Resize(120, 40)));

    assert_eq!(app.view.active_index(), 1);
    assert!(!app.should_quit);
}
