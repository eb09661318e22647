//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::{Event as MonitorEvent, Fetcher};
use crate::poller::Command as PollerCommand;
use crate::ui::dashboard::{DashboardState, ViewState, render_dashboard};
use crate::ui::detail::{DetailState, render_detail};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the transaction lists.
    Dashboard,
    /// Detail screen for a single transaction.
    Detail(Box<DetailState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state; kept alive across screens so polling stays warm.
    dashboard: DashboardState,

    /// Receives fetch events from the poller task.
    event_receiver: mpsc::Receiver<MonitorEvent>,

    /// Sends refresh/detail commands to the poller task.
    command_sender: mpsc::Sender<PollerCommand>,

    /// Broadcasts shutdown signal to the poller task.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<MonitorEvent>,
        command_sender: mpsc::Sender<PollerCommand>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        let start_time = Instant::now();
        Self {
            start_time,
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, start_time),
            event_receiver,
            command_sender,
            shutdown_sender,
        }
    }

    /// Route a poller event to the state that owns it. Dashboard events are
    /// always queued so the list stays current behind the detail screen.
    fn route_event(&mut self, event: MonitorEvent) {
        match event.fetcher {
            Fetcher::DashboardPoller => self.dashboard.add_event(event),
            Fetcher::DetailFetcher => {
                if let Screen::Detail(state) = &mut self.current_screen {
                    state.apply(&event);
                }
                // Detail outcomes are worth a line in the activity log too.
                self.dashboard.add_to_activity_log(event);
            }
        }
    }

    /// Open the detail screen for the selected transaction, if any.
    fn open_selected_detail(&mut self) {
        let Some(summary) = self.dashboard.selected_transaction() else {
            return;
        };
        let transaction_id = summary.transaction_id.clone();
        let _ = self.command_sender.try_send(PollerCommand::FetchDetail {
            transaction_id: transaction_id.clone(),
        });
        self.current_screen = Screen::Detail(Box::new(DetailState::loading(transaction_id)));
    }

    /// Manual retry: only meaningful once the dashboard has failed.
    fn retry_dashboard(&mut self) {
        if matches!(self.dashboard.view, ViewState::Failed(_)) {
            let _ = self
                .command_sender
                .try_send(PollerCommand::RefreshDashboard);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.route_event(event);
        }

        // Drain queued dashboard events into the view state
        app.dashboard.update();

        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Dashboard;
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Quit from anywhere
                if key.code == KeyCode::Char('q') {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.current_screen = Screen::Dashboard;
                    }
                    Screen::Dashboard => match key.code {
                        KeyCode::Esc => {
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                        KeyCode::Up => app.dashboard.select_previous(),
                        KeyCode::Down => app.dashboard.select_next(),
                        KeyCode::Tab => app.dashboard.switch_panel(),
                        KeyCode::Enter => app.open_selected_detail(),
                        KeyCode::Char('r') | KeyCode::Char('R') => app.retry_dashboard(),
                        _ => {}
                    },
                    Screen::Detail(_) => match key.code {
                        KeyCode::Esc | KeyCode::Backspace => {
                            app.current_screen = Screen::Dashboard;
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
        Screen::Detail(state) => render_detail(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts;
    use crate::events::Event as MonitorEvent;
    use crate::models::{
        DashboardResponse, Timestamp, TransactionStatus, TransactionSummary,
    };

    fn app_with_channels() -> (App, mpsc::Receiver<PollerCommand>) {
        let (_event_sender, event_receiver) =
            mpsc::channel::<MonitorEvent>(cli_consts::EVENT_QUEUE_SIZE);
        let (command_sender, command_receiver) =
            mpsc::channel::<PollerCommand>(cli_consts::COMMAND_QUEUE_SIZE);
        let (shutdown_sender, _) = broadcast::channel(1);
        (
            App::new(
                Environment::Local,
                event_receiver,
                command_sender,
                shutdown_sender,
            ),
            command_receiver,
        )
    }

    fn loaded_dashboard(app: &mut App, ids: &[&str]) {
        let dashboard = DashboardResponse {
            total_transactions: ids.len(),
            active_transactions: ids
                .iter()
                .map(|id| TransactionSummary {
                    transaction_id: id.to_string(),
                    from_address: "0xabc".to_string(),
                    created_at: Timestamp::EpochSecs(0.0),
                    status: TransactionStatus::Pending,
                })
                .collect(),
            completed_transactions: vec![],
        };
        app.route_event(MonitorEvent::dashboard_loaded(dashboard));
        app.dashboard.update();
    }

    #[test]
    /// Opening a selection sends a fetch command and shows the loading view.
    fn enter_opens_detail_and_requests_fetch() {
        let (mut app, mut commands) = app_with_channels();
        loaded_dashboard(&mut app, &["tx-1"]);

        app.open_selected_detail();

        match &app.current_screen {
            Screen::Detail(state) => {
                assert_eq!(state.transaction_id, "tx-1");
                assert_eq!(state.view, ViewState::Loading);
            }
            other => panic!("expected detail screen, got {:?}", other),
        }
        assert_eq!(
            commands.try_recv().unwrap(),
            PollerCommand::FetchDetail {
                transaction_id: "tx-1".to_string()
            }
        );
    }

    #[test]
    /// With nothing selected (empty list), Enter is a no-op.
    fn enter_without_selection_does_nothing() {
        let (mut app, mut commands) = app_with_channels();
        loaded_dashboard(&mut app, &[]);

        app.open_selected_detail();

        assert!(matches!(app.current_screen, Screen::Dashboard | Screen::Splash));
        assert!(commands.try_recv().is_err());
    }

    #[test]
    /// Retry only fires a command once the dashboard has actually failed.
    fn retry_requires_failed_state() {
        let (mut app, mut commands) = app_with_channels();
        loaded_dashboard(&mut app, &["tx-1"]);

        app.retry_dashboard();
        assert!(commands.try_recv().is_err());

        app.route_event(MonitorEvent::dashboard_failed(
            "Dashboard fetch failed".to_string(),
            crate::error_classifier::LogLevel::Error,
        ));
        app.dashboard.update();
        app.retry_dashboard();
        assert_eq!(
            commands.try_recv().unwrap(),
            PollerCommand::RefreshDashboard
        );
    }

    #[test]
    /// Dashboard events arriving while the detail screen is open still reach
    /// the dashboard state.
    fn dashboard_stays_warm_behind_detail_screen() {
        let (mut app, _commands) = app_with_channels();
        loaded_dashboard(&mut app, &["tx-1"]);
        app.open_selected_detail();

        loaded_dashboard(&mut app, &["tx-1", "tx-2"]);
        assert_eq!(app.dashboard.current_rows().len(), 2);
    }
}
