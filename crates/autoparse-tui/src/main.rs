use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use autoparse_core::ApiClient;

mod action;
mod app;
mod backend;
mod command;
mod config;
mod input;
mod logging;
mod model;
mod progress;
mod theme;
mod tui_event;
mod view;

use app::App;
use backend::Backend;
use config::{CliOverrides, Settings};

/// Autoparse: upload resumes, review parsed candidates and run document
/// verification from the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the candidate service
    #[arg(long)]
    api_url: Option<String>,

    /// Config file (default: <config dir>/autoparse/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Resolve config from CLI flags > env vars > config file > defaults
    let file = config::load_file(args.config.as_deref())?;
    let settings = Settings::resolve(
        CliOverrides {
            api_url: args.api_url,
            log_file: args.log_file,
        },
        |key| std::env::var(key).ok(),
        file,
    );
    logging::init(settings.log_file.as_deref())?;
    log::info!("using candidate service at {}", settings.api_url);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let mut api = Backend::new(ApiClient::new(settings.api_url.clone()), tx, cancel.clone());

    let mut app = App::new(settings.api_url);
    app.mount();

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        for command in app.take_commands() {
            api.dispatch(command);
        }

        terminal.draw(|f| app.view(f))?;

        let terminal_event = tokio::select! {
            Some(backend_event) = rx.recv() => {
                app.handle_backend_event(backend_event);
                // Drain any additional queued backend events
                while let Ok(evt) = rx.try_recv() {
                    app.handle_backend_event(evt);
                }
                None
            }
            evt = poll_input(tick_rate) => evt,
            _ = cancel.cancelled() => {
                app.should_quit = true;
                None
            }
        };

        if let Some(evt) = terminal_event {
            let action = input::map_event(&evt, app.input_mode());
            app.update(action);
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    log::info!("exiting");

    Ok(())
}

/// Wait up to `timeout` for one terminal event.
async fn poll_input(timeout: Duration) -> Option<Event> {
    tokio::task::block_in_place(|| {
        if event::poll(timeout).unwrap_or(false) {
            event::read().ok()
        } else {
            None
        }
    })
}
