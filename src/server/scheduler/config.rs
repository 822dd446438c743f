pub mod listing_lifecycle {
    /// Cron expression for the listing lifecycle sweep
    /// Runs every hour at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}
