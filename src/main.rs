mod api;
mod app;
mod cli;
mod effects;
mod event;
mod help;
mod keys;
mod logging;
mod reflow;
mod settings;
mod time;
mod tui;
mod views;
mod window;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;

use api::HnClient;
use app::{App, Input, Message, apply};
use cli::Cli;
use effects::Executor;
use event::{Event, EventHandler};
use settings::{RuntimeConfig, Settings};
use time::system_clock;

/// Completed fetches waiting to be applied.
const RESULT_CHANNEL_CAPACITY: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = settings::config_dir(cli.config_dir.as_ref())
        .context("Could not determine config directory; pass --config-dir")?;
    let settings = Settings::load(&settings::settings_path(&config_dir))?;
    let config = RuntimeConfig::resolve(&cli, &settings)?;

    let log_path = settings::log_path(&config_dir);
    let _log_guard = logging::init(&log_path, cli.verbose)?;
    if cli.verbose {
        eprintln!("Logging to {}", log_path.display());
    }
    tracing::info!(
        api_base = %config.client.api_base,
        page_size = config.client.page_size,
        start_page = config.start_page,
        "starting"
    );

    let client = HnClient::new(config.client.clone()).context("Failed to build HTTP client")?;
    run_tui(client, &config).await
}

async fn run_tui(client: HnClient, config: &RuntimeConfig) -> Result<()> {
    let (result_tx, mut result_rx) = mpsc::channel(RESULT_CHANNEL_CAPACITY);
    let executor = Executor::new(client, result_tx);
    let clock = system_clock();

    let mut terminal = tui::init()?;
    let mut events = EventHandler::new(config.tick_rate);

    let mut app = App::new(config.client.page_size).with_start_page(config.start_page);
    let size = terminal.size()?;
    app.update(Message::Resize(size.width, size.height));
    executor.run(app.init());

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| views::render(frame, &app, clock.now())) {
            break Err(e).context("Failed to draw");
        }
        if app.should_quit {
            break Ok(());
        }

        let input: Input = tokio::select! {
            event = events.next() => match event {
                Ok(Event::Key(key)) => match keys::handle_key(key, &app) {
                    Some(msg) => msg.into(),
                    None => continue,
                },
                Ok(Event::Resize(width, height)) => Message::Resize(width, height).into(),
                Ok(Event::Tick) => continue,
                Err(e) => break Err(e),
            },
            Some(result) = result_rx.recv() => result.into(),
        };

        let (next, command) = apply(app, input);
        app = next;
        if let Some(command) = command {
            executor.run(command);
        }
    };

    drop(events);
    tui::restore()?;
    tracing::info!("exiting");
    outcome
}
