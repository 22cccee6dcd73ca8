//! Schedules and cutoffs for background maintenance.

pub mod queue_sweep {
    /// Runs at the top of every minute.
    pub const CRON_EXPRESSION: &str = "0 * * * * *";

    /// Queue entries older than this are considered abandoned.
    pub const STALE_AFTER_MINUTES: i64 = 5;
}
