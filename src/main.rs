mod api;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod poller;
mod runtime;
mod ui;

use crate::api::{ApiClient, MonitorApi};
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::broadcast;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the monitoring dashboard UI.
    Start,
    /// Fetch a single transaction and print it as JSON.
    Show {
        /// ID of the transaction to fetch.
        #[arg(long, value_name = "TRANSACTION_ID")]
        transaction_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let args = Args::parse();
    match args.command {
        Command::Start => start(environment).await,
        Command::Show { transaction_id } => {
            let client = ApiClient::new(environment);
            match client.get_transaction(&transaction_id).await {
                Ok(detail) => {
                    println!("{}", serde_json::to_string_pretty(&detail)?);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Failed to fetch transaction {}: {}", transaction_id, e);
                    Err(e.into())
                }
            }
        }
    }
}

/// Starts the monitor dashboard.
///
/// # Arguments
/// * `env` - The backend environment to poll.
async fn start(env: Environment) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire the poller task to the UI and run it.
    let api = ApiClient::new(env.clone());
    let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
    let (event_receiver, command_sender, poller_handle) =
        runtime::start_poller(api, shutdown_receiver);
    let app = ui::App::new(env, event_receiver, command_sender, shutdown_sender);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // The UI loop broadcast a shutdown before returning; the in-flight
    // request, if any, is dropped with the task.
    poller_handle.abort();

    res?;
    Ok(())
}
