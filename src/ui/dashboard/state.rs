//! Dashboard state management
//!
//! Contains the main dashboard state struct and the view-state slot that
//! fetch outcomes are mapped onto.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::models::{DashboardResponse, TransactionSummary};

use std::collections::VecDeque;
use std::time::Instant;

/// Generic user-facing message shown for any dashboard fetch failure. The
/// underlying error kind stays in the activity log only.
pub const DASHBOARD_ERROR_MESSAGE: &str = "Error loading dashboard. Press [R] to retry.";

/// The three states a fetched view can be in. After the first success the
/// view stays `Ready` across background refreshes, so there is no loading
/// flicker while new data is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Which transaction partition currently holds the selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Panel {
    Active,
    Completed,
}

impl Panel {
    pub fn other(self) -> Self {
        match self {
            Panel::Active => Panel::Completed,
            Panel::Completed => Panel::Active,
        }
    }
}

/// Dashboard screen state: the synchronized view-state slot, list selection
/// and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Current dashboard view state.
    pub view: ViewState<DashboardResponse>,
    /// Timestamp of the last successful dashboard load.
    pub last_updated: Option<String>,
    /// Number of successful dashboard loads so far.
    pub refreshes: u64,
    /// Whether polling is paused after a failure (until a manual retry).
    pub paused: bool,
    /// Panel holding the current selection.
    pub panel: Panel,
    /// Selected row within the current panel.
    pub selected: usize,
    /// Queue of events waiting to be processed.
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display.
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter.
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant) -> Self {
        Self {
            environment,
            start_time,
            view: ViewState::Loading,
            last_updated: None,
            refreshes: 0,
            paused: false,
            panel: Panel::Active,
            selected: 0,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Rows of the panel that currently holds the selection.
    pub fn current_rows(&self) -> &[TransactionSummary] {
        self.rows_of(self.panel)
    }

    /// Rows of the given panel, empty until the first successful load.
    pub fn rows_of(&self, panel: Panel) -> &[TransactionSummary] {
        match self.view.data() {
            Some(dashboard) => match panel {
                Panel::Active => &dashboard.active_transactions,
                Panel::Completed => &dashboard.completed_transactions,
            },
            None => &[],
        }
    }

    /// The summary under the cursor, if any.
    pub fn selected_transaction(&self) -> Option<&TransactionSummary> {
        self.current_rows().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.current_rows().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn switch_panel(&mut self) {
        self.panel = self.panel.other();
        self.clamp_selection();
    }

    /// Keep the cursor inside the current panel after data or panel changes.
    pub fn clamp_selection(&mut self) {
        let len = self.current_rows().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Timestamp, TransactionStatus};

    fn summary(id: &str) -> TransactionSummary {
        TransactionSummary {
            transaction_id: id.to_string(),
            from_address: "0xabc".to_string(),
            created_at: Timestamp::EpochSecs(0.0),
            status: TransactionStatus::Pending,
        }
    }

    fn state_with(active: Vec<TransactionSummary>) -> DashboardState {
        let mut state = DashboardState::new(Environment::Local, Instant::now());
        state.view = ViewState::Ready(DashboardResponse {
            total_transactions: active.len(),
            active_transactions: active,
            completed_transactions: vec![],
        });
        state
    }

    #[test]
    /// With no rows there is no selection and navigation does not panic.
    fn empty_panel_has_no_selection() {
        let mut state = state_with(vec![]);
        assert!(state.selected_transaction().is_none());
        state.select_next();
        state.select_previous();
        state.switch_panel();
        assert!(state.selected_transaction().is_none());
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut state = state_with(vec![summary("tx-1"), summary("tx-2")]);
        assert_eq!(state.selected_transaction().unwrap().transaction_id, "tx-1");

        state.select_next();
        assert_eq!(state.selected_transaction().unwrap().transaction_id, "tx-2");

        // Already at the last row, stays put.
        state.select_next();
        assert_eq!(state.selected_transaction().unwrap().transaction_id, "tx-2");

        state.select_previous();
        assert_eq!(state.selected_transaction().unwrap().transaction_id, "tx-1");
    }

    #[test]
    /// Switching to a shorter panel clamps the cursor.
    fn switching_panels_clamps_selection() {
        let mut state = state_with(vec![summary("tx-1"), summary("tx-2"), summary("tx-3")]);
        state.selected = 2;

        state.switch_panel();
        assert_eq!(state.panel, Panel::Completed);
        assert_eq!(state.selected, 0);
    }
}
