pub mod cli_consts {
    //! Monitor Configuration Constants
    //!
    //! Configuration constants for the monitor, organized by functional area.

    use std::time::Duration;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum event buffer size between the poller task and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum command buffer size between the UI and the poller task.
    pub const COMMAND_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Interval between dashboard fetches while the poller is healthy.
    pub const DASHBOARD_POLL_INTERVAL_SECS: u64 = 10;

    pub const fn dashboard_poll_interval() -> Duration {
        Duration::from_secs(DASHBOARD_POLL_INTERVAL_SECS)
    }
}
