//! Poller task that keeps view state in sync with the backend
//!
//! Owns the dashboard poll interval and on-demand detail fetches. All fetches
//! are awaited inline in this single task, so a new dashboard fetch can never
//! start while a previous one is still outstanding.

use crate::api::MonitorApi;
use crate::consts::cli_consts;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Fetcher};
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;

/// Commands sent from the UI to the poller.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Fetch the dashboard immediately and resume polling if paused.
    RefreshDashboard,
    /// Fetch the detail record for a single transaction.
    FetchDetail { transaction_id: String },
}

/// Fetches data from the backend and forwards outcomes to the UI as events.
pub struct Poller {
    api: Box<dyn MonitorApi>,
    event_sender: mpsc::Sender<Event>,
    classifier: ErrorClassifier,
    /// Set after a dashboard fetch failure. While paused, interval ticks are
    /// skipped; only a manual refresh restarts polling.
    paused: bool,
}

impl Poller {
    pub fn new(api: Box<dyn MonitorApi>, event_sender: mpsc::Sender<Event>) -> Self {
        Self {
            api,
            event_sender,
            classifier: ErrorClassifier::new(),
            paused: false,
        }
    }

    #[cfg(test)]
    fn is_paused(&self) -> bool {
        self.paused
    }

    /// Main poll loop. The first tick fires immediately, then every poll
    /// interval. A fetch that outlives the interval delays the next tick
    /// rather than stacking a second in-flight request behind it.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let mut ticker = tokio::time::interval(cli_consts::dashboard_poll_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    if !self.paused {
                        self.fetch_dashboard().await;
                    }
                }
                command = commands.recv() => match command {
                    Some(Command::RefreshDashboard) => {
                        self.send(Event::refresh(
                            Fetcher::DashboardPoller,
                            "Refreshing dashboard...".to_string(),
                        ))
                        .await;
                        self.paused = false;
                        self.fetch_dashboard().await;
                    }
                    Some(Command::FetchDetail { transaction_id }) => {
                        self.fetch_detail(&transaction_id).await;
                    }
                    None => break, // UI side dropped, nothing left to do
                },
            }
        }
    }

    async fn fetch_dashboard(&mut self) {
        match self.api.get_dashboard().await {
            Ok(dashboard) => {
                if !dashboard.is_consistent() {
                    self.send(Event::warning(
                        Fetcher::DashboardPoller,
                        format!(
                            "Backend total ({}) does not match partition sizes ({} + {})",
                            dashboard.total_transactions,
                            dashboard.active_transactions.len(),
                            dashboard.completed_transactions.len()
                        ),
                    ))
                    .await;
                }
                self.send(Event::dashboard_loaded(dashboard)).await;
            }
            Err(e) => {
                self.paused = true;
                let level = self.classifier.classify_fetch_error(&e);
                self.send(Event::dashboard_failed(
                    format!("Dashboard fetch failed: {}", e),
                    level,
                ))
                .await;
            }
        }
    }

    async fn fetch_detail(&mut self, transaction_id: &str) {
        match self.api.get_transaction(transaction_id).await {
            Ok(detail) => {
                self.send(Event::detail_loaded(detail)).await;
            }
            Err(e) => {
                let level = self.classifier.classify_fetch_error(&e);
                self.send(Event::detail_failed(
                    format!("Failed to load transaction {}: {}", transaction_id, e),
                    level,
                ))
                .await;
            }
        }
    }

    async fn send(&self, event: Event) {
        let _ = self.event_sender.send(event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMonitorApi;
    use crate::api::error::ApiError;
    use crate::error_classifier::LogLevel;
    use crate::events::{EventKind, FetchOutcome};
    use crate::models::{DashboardResponse, TransactionStatus};

    fn empty_dashboard() -> DashboardResponse {
        DashboardResponse {
            total_transactions: 0,
            active_transactions: vec![],
            completed_transactions: vec![],
        }
    }

    fn poller_with(api: MockMonitorApi) -> (Poller, mpsc::Receiver<Event>) {
        let (event_sender, event_receiver) = mpsc::channel(cli_consts::EVENT_QUEUE_SIZE);
        (Poller::new(Box::new(api), event_sender), event_receiver)
    }

    #[tokio::test]
    /// A successful dashboard fetch emits one success event with the payload.
    async fn dashboard_success_emits_payload() {
        let mut api = MockMonitorApi::new();
        api.expect_get_dashboard()
            .times(1)
            .returning(|| Ok(empty_dashboard()));

        let (mut poller, mut events) = poller_with(api);
        poller.fetch_dashboard().await;

        let event = events.recv().await.unwrap();
        assert_eq!(event.kind, EventKind::Success);
        assert_eq!(
            event.outcome,
            Some(FetchOutcome::Dashboard(empty_dashboard()))
        );
        assert!(!poller.is_paused());
    }

    #[tokio::test]
    /// A failed dashboard fetch pauses polling until a manual refresh.
    async fn dashboard_failure_pauses_polling() {
        let mut api = MockMonitorApi::new();
        api.expect_get_dashboard().times(1).returning(|| {
            Err(ApiError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });

        let (mut poller, mut events) = poller_with(api);
        poller.fetch_dashboard().await;

        let event = events.recv().await.unwrap();
        assert_eq!(event.kind, EventKind::Error);
        assert!(event.outcome.is_none());
        assert!(poller.is_paused());
    }

    #[tokio::test]
    /// An inconsistent aggregate still loads, preceded by a warning event.
    async fn inconsistent_dashboard_warns_but_loads() {
        let mut api = MockMonitorApi::new();
        api.expect_get_dashboard().times(1).returning(|| {
            Ok(DashboardResponse {
                total_transactions: 5,
                active_transactions: vec![],
                completed_transactions: vec![],
            })
        });

        let (mut poller, mut events) = poller_with(api);
        poller.fetch_dashboard().await;

        let warning = events.recv().await.unwrap();
        assert_eq!(warning.kind, EventKind::Warning);
        assert_eq!(warning.log_level, LogLevel::Warn);

        let loaded = events.recv().await.unwrap();
        assert_eq!(loaded.kind, EventKind::Success);
    }

    #[tokio::test]
    /// A missing transaction surfaces as a detail error event.
    async fn missing_detail_emits_error_event() {
        let mut api = MockMonitorApi::new();
        api.expect_get_transaction().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 404,
                message: "not found".to_string(),
            })
        });

        let (mut poller, mut events) = poller_with(api);
        poller.fetch_detail("tx-404").await;

        let event = events.recv().await.unwrap();
        assert_eq!(event.fetcher, Fetcher::DetailFetcher);
        assert_eq!(event.kind, EventKind::Error);
        assert_eq!(event.log_level, LogLevel::Error);
        assert!(event.msg.contains("tx-404"));
        // Detail failures never pause the dashboard poll.
        assert!(!poller.is_paused());
    }

    #[tokio::test]
    /// A detail fetch carries the full record, validations included.
    async fn detail_success_carries_record() {
        let mut api = MockMonitorApi::new();
        api.expect_get_transaction().times(1).returning(|id| {
            Ok(crate::models::TransactionDetail {
                transaction_id: id.to_string(),
                chain_id: 1,
                from_address: "0xfrom".to_string(),
                to_address: "0xto".to_string(),
                data: "0x".to_string(),
                value: 0,
                reason: None,
                validations: vec![],
                created_at: crate::models::Timestamp::EpochSecs(0.0),
                updated_at: None,
                status: TransactionStatus::Pending,
            })
        });

        let (mut poller, mut events) = poller_with(api);
        poller.fetch_detail("tx-1").await;

        let event = events.recv().await.unwrap();
        match event.outcome {
            Some(FetchOutcome::Detail(detail)) => {
                assert_eq!(detail.transaction_id, "tx-1");
            }
            other => panic!("expected detail outcome, got {:?}", other),
        }
    }
}
