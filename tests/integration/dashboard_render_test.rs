use ratatui::{backend::TestBackend, Terminal};
use sysdash::core::system_info::StorageUnit;
use sysdash::ui::dashboard_tui::{render_ui, DashboardApp, DashboardEvent, Theme};
use sysdash::SystemStats;

fn stats() -> SystemStats {
    SystemStats {
        cpu_name: "Example CPU 3000".to_string(),
        cpu_arch: "x86_64".to_string(),
        operating_system: "Linux 6.1".to_string(),
        disk_available: 120.5,
        disk_used: 379.5,
        storage_unit: StorageUnit::GB,
        disk_used_percent: 75.9,
        local_ipv4: "192.168.1.20".to_string(),
        global_ip: "203.0.113.7".to_string(),
    }
}

fn app() -> DashboardApp {
    DashboardApp::from_stats(&stats(), Theme::default()).unwrap()
}

fn frame_text(app: &DashboardApp) -> String {
    app.view.render_to_string(&app.theme)
}

#[test]
fn test_system_tab_frame() {
    let text = frame_text(&app());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[1],
        "  ╭────────────────────╮╭──────────────────╮╭─────────────────────╮"
    );
    assert_eq!(
        lines[2],
        "  │ System Information ││ Disk Information ││ Network Information │"
    );
    assert_eq!(
        lines[3],
        "  │                    └┴──────────────────┴┴─────────────────────┤"
    );
    assert!(text.contains("Example CPU 3000"));
    assert!(text.contains("x86_64"));
    // system table shows two rows
    assert!(!text.contains("Linux 6.1"));
}

#[test]
fn test_window_lines_up_with_tab_row() {
    let text = frame_text(&app());
    let lines: Vec<&str> = text.lines().collect();

    let last = lines.iter().rposition(|l| !l.is_empty()).unwrap();
    let bottom = lines[last];
    assert!(bottom.starts_with("  └"));
    assert!(bottom.ends_with('┘'));
    assert_eq!(bottom.chars().count(), lines[1].chars().count());
}

#[test]
fn test_disk_tab_frame() {
    let mut app = app();
    app.handle_event(DashboardEvent::NextTab);
    let text = frame_text(&app);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[3],
        "  ├────────────────────┴┘                  └┴─────────────────────┤"
    );
    assert!(text.contains("120.5GB"));
    assert!(text.contains("379.5GB"));
    assert!(text.contains("75.9%"));
}

#[test]
fn test_network_tab_frame() {
    let mut app = app();
    app.handle_event(DashboardEvent::NextTab);
    app.handle_event(DashboardEvent::NextTab);
    let text = frame_text(&app);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[3],
        "  ├────────────────────┴┴──────────────────┴┘                     │"
    );
    assert!(text.contains("192.168.1.20"));
    assert!(text.contains("203.0.113.7"));
    assert!(!text.contains("120.5GB"));
}

#[test]
fn test_render_does_not_mutate() {
    let app = app();
    let first = frame_text(&app);
    let second = frame_text(&app);
    assert_eq!(first, second);
    assert_eq!(app.view.active_index(), 0);
}

#[test]
fn test_draw_on_terminal_backend() {
    let app = app();
    let mut terminal = Terminal::new(TestBackend::new(80, 15)).unwrap();
    terminal.draw(|frame| render_ui(frame, &app)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let natural = app.view.render_to_buffer(&app.theme);
    for y in 0..natural.area.height {
        for x in 0..natural.area.width {
            assert_eq!(buffer[(x, y)].symbol(), natural[(x, y)].symbol());
        }
    }
}

#[test]
fn test_draw_on_tiny_terminal() {
    let app = app();
    let mut terminal = Terminal::new(TestBackend::new(5, 2)).unwrap();
    terminal.draw(|frame| render_ui(frame, &app)).unwrap();
}
