//! Podium — a terminal viewer for Olympic results data.
//!
//! Fetches the public Olympic winners dataset once at startup and lets
//! the user browse it in a paginated grid with a quick-filter search
//! and per-column filters.

mod api;
mod app;
mod error;
mod events;
mod grid;
mod logging;
mod tasks;
mod ui;

use clap::Parser;
use tokio::task::AbortHandle;
use tracing::error;

use crate::api::ResultsClient;
use crate::app::App;
use crate::error::AppError;
use crate::events::EventHandler;
use crate::tasks::create_task_channel;

#[derive(Parser, Debug)]
#[command(
    name = "podium",
    version,
    about = "A terminal viewer for Olympic results data"
)]
struct Cli {
    /// Fetch the dataset from this URL instead of the public endpoint.
    #[arg(long, value_name = "URL")]
    data_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, cli).await;
    ratatui::restore();

    logging::shutdown();
    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, cli: Cli) -> anyhow::Result<()> {
    let client = match cli.data_url {
        Some(url) => ResultsClient::with_url(url)?,
        None => ResultsClient::new()?,
    };
    tracing::info!(url = client.url(), "Using dataset endpoint");

    let (mut messages, spawner) = create_task_channel();
    let events = EventHandler::new();
    let mut app = App::new();

    // Kick off the initial load. The handle lets us abort the request
    // if the user quits before it resolves, or a reload supersedes it.
    let mut in_flight: Option<AbortHandle> = Some(spawner.spawn_fetch_rows(&client));

    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;

        // Drain completed background work.
        while let Ok(message) = messages.try_recv() {
            in_flight = None;
            app.handle_data_message(message);
        }

        if app.take_pending_refresh() {
            if let Some(handle) = in_flight.take() {
                handle.abort();
            }
            in_flight = Some(spawner.spawn_fetch_rows(&client));
        }

        match events.next() {
            Ok(event) => app.update(event),
            Err(e) => {
                error!(error = %e, "Event polling failed");
                return Err(AppError::Io(e).into());
            }
        }
    }

    // Don't let a fetch outlive the UI.
    if let Some(handle) = in_flight.take() {
        handle.abort();
    }

    Ok(())
}
