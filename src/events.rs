//! Event System
//!
//! Fetch outcomes and activity-log entries flowing from the poller task to
//! the UI.

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use crate::models::{DashboardResponse, TransactionDetail};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Fetcher {
    /// Task that polls the dashboard aggregate on a fixed interval.
    DashboardPoller,
    /// Task that fetches a single transaction detail on demand.
    DetailFetcher,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventKind {
    Success,
    Error,
    Warning,
    Refresh,
}

/// Typed payload carried by successful fetch events.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Dashboard(DashboardResponse),
    Detail(Box<TransactionDetail>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub fetcher: Fetcher,
    pub kind: EventKind,
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
    /// Fetched data, present on Success events.
    pub outcome: Option<FetchOutcome>,
}

impl Event {
    fn new(fetcher: Fetcher, kind: EventKind, msg: String, log_level: LogLevel) -> Self {
        Self {
            fetcher,
            kind,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
            outcome: None,
        }
    }

    pub fn dashboard_loaded(dashboard: DashboardResponse) -> Self {
        let msg = format!(
            "Dashboard refreshed: {} active, {} completed",
            dashboard.active_transactions.len(),
            dashboard.completed_transactions.len()
        );
        let mut event = Self::new(
            Fetcher::DashboardPoller,
            EventKind::Success,
            msg,
            LogLevel::Debug,
        );
        event.outcome = Some(FetchOutcome::Dashboard(dashboard));
        event
    }

    pub fn dashboard_failed(msg: String, log_level: LogLevel) -> Self {
        Self::new(Fetcher::DashboardPoller, EventKind::Error, msg, log_level)
    }

    pub fn detail_loaded(detail: TransactionDetail) -> Self {
        let msg = format!("Loaded transaction {}", detail.transaction_id);
        let mut event = Self::new(
            Fetcher::DetailFetcher,
            EventKind::Success,
            msg,
            LogLevel::Info,
        );
        event.outcome = Some(FetchOutcome::Detail(Box::new(detail)));
        event
    }

    pub fn detail_failed(msg: String, log_level: LogLevel) -> Self {
        Self::new(Fetcher::DetailFetcher, EventKind::Error, msg, log_level)
    }

    pub fn warning(fetcher: Fetcher, msg: String) -> Self {
        Self::new(fetcher, EventKind::Warning, msg, LogLevel::Warn)
    }

    pub fn refresh(fetcher: Fetcher, msg: String) -> Self {
        Self::new(fetcher, EventKind::Refresh, msg, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show errors; everything else honors the RUST_LOG threshold.
        if self.kind == EventKind::Error || self.kind == EventKind::Warning {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.kind, self.timestamp, self.msg)
    }
}
