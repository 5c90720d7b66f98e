mod app;
mod config;
mod error;
mod events;
mod log;
mod router;
mod slider;
mod tui;

use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use config::{Config, Overrides};
use error::AppError;
use events::EventHandler;
use slider::SliderMode;

/// How often notices are checked for expiry
const TICK: Duration = Duration::from_millis(250);

/// pageslider: browse flights, hotels, beauty and events with sliders
///
/// A page slider turns pages as you drag it, and city and year sliders pick
/// what the pages show. Drag with the mouse or use the keyboard.
#[derive(Parser, Debug)]
#[command(name = "pageslider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/pageslider/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// City to start on
    #[arg(long)]
    city: Option<String>,

    /// Page to open first
    #[arg(long)]
    route: Option<String>,

    /// Catalog language (en, he)
    #[arg(long)]
    locale: Option<String>,

    /// Lay sliders out vertically
    #[arg(long)]
    vertical: bool,

    /// Only report city/year changes when a drag is released
    #[arg(long)]
    no_live_update: bool,

    /// Validate the configuration and print the catalogs, then exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging and panic hook
    if !cli.check {
        if let Ok(log_path) = log::init() {
            log::log(&format!("Log file: {}", log_path.display()));
            log::install_panic_hook();
        }
    }

    let config = Config::load(cli.config.as_deref()).with_overrides(Overrides {
        city: cli.city,
        route: cli.route,
        locale: cli.locale,
        vertical: cli.vertical,
        no_live_update: cli.no_live_update,
    });

    // Catalogs are validated here; a bad one never reaches a slider
    let app = App::from_config(&config).context("invalid configuration")?;

    if cli.check {
        print_summary(&app);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app;
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::log("=== pageslider stopped ===");
    result.map_err(Into::into)
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> error::Result<()> {
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    while !app.should_quit {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action);
                    }
                    Some(Err(e)) => return Err(AppError::Terminal(e.to_string())),
                    None => break,
                }
            }
            _ = ticker.tick() => app.tick(),
        }
    }

    Ok(())
}

fn print_summary(app: &App) {
    println!("Configuration OK");
    println!("Start page: {}", app.current_route().name());
    for slider in &app.sliders {
        let items: Vec<String> = slider
            .catalog()
            .items()
            .iter()
            .map(|item| format!("{}@{}", item.name, item.position))
            .collect();
        let marker = match slider.mode() {
            SliderMode::Navigation => "pages",
            SliderMode::Cities => "cities",
            SliderMode::Years => "years",
        };
        println!(
            "{:<7} {} (at {})",
            marker,
            items.join(", "),
            slider.selected_item().name
        );
    }
}
