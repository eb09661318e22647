//! Dashboard state update logic
//!
//! Maps fetch events onto the view-state slot. Events are applied in the
//! order they resolved, so the rendered state always reflects the most
//! recently resolved fetch.

use super::state::{DASHBOARD_ERROR_MESSAGE, DashboardState, ViewState};

use crate::events::{Event, EventKind, FetchOutcome, Fetcher};

impl DashboardState {
    /// Update the dashboard state with a new tick, draining queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }
    }

    /// Process a single event and update the view state
    fn process_event(&mut self, event: &Event) {
        if event.fetcher != Fetcher::DashboardPoller {
            return;
        }

        match event.kind {
            EventKind::Success => {
                if let Some(FetchOutcome::Dashboard(dashboard)) = &event.outcome {
                    self.view = ViewState::Ready(dashboard.clone());
                    self.last_updated = Some(event.timestamp.clone());
                    self.refreshes += 1;
                    self.paused = false;
                    self.clamp_selection();
                }
            }
            EventKind::Error => {
                // One generic message for HTTP and network failures alike;
                // the specifics stay in the activity log.
                self.view = ViewState::Failed(DASHBOARD_ERROR_MESSAGE.to_string());
                self.paused = true;
            }
            EventKind::Refresh => {
                // A manual retry re-enters Loading only from a failed state.
                if matches!(self.view, ViewState::Failed(_)) {
                    self.view = ViewState::Loading;
                }
                self.paused = false;
            }
            EventKind::Warning => {}
        }
    }
}
