//! Terminal dashboard
//!
//! ratatui front end over [`crate::dashboard::Dashboard`]. Log output goes
//! to an in-screen panel through `tui-logger`, never to stdout.

mod app;
mod command;
mod ui;

pub use app::{App, InputMode};
pub use command::{Command, parse_command};

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::dashboard::Dashboard;

/// Route `tracing` (and `log`) into the log panel
pub fn init_tui_logging(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();

    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);
}

/// Run the dashboard until the user quits
pub async fn run(dashboard: Dashboard, toast_capacity: usize) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dashboard, toast_capacity);
    tracing::info!(
        orders = app.dashboard.orders().len(),
        "Dashboard ready. Press ':' then /help for commands, 'q' to quit"
    );

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let timeout = Duration::from_millis(100);
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
