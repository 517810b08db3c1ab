use clap::Parser;

use sysdash::ui::dashboard_tui::{run_dashboard_app, DashboardApp, Theme};
use sysdash::{collect_system_stats, DashboardConfig};

/// Terminal dashboard showing CPU, disk and network information.
///
/// Switch tabs with ←/→, h/l, n/p or Tab/Shift+Tab; quit with q or Ctrl+C.
#[derive(Parser, Debug)]
#[command(name = "sysdash", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    sysdash::init_logging();

    if let Err(e) = run() {
        println!("Error running program: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = DashboardConfig::default();
    let stats = collect_system_stats(&config);

    let app = DashboardApp::from_stats(&stats, Theme::default())?;
    run_dashboard_app(app)
}
