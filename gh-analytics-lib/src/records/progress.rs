/// A trait for reporting progress while the input tables are loaded.
pub trait Progress: Send + Sync {
    /// Set the phase label for the current operation (e.g., "Loading").
    fn set_phase(&self, phase: &str);

    /// Configure determinate progress reporting.
    ///
    /// The callback returns (total, current, message) and is polled by the reporter.
    fn set_determinate(&self, callback: Box<dyn Fn() -> (u64, u64, String) + Send + Sync + 'static>);

    /// Finish and clear the progress indicator.
    fn done(&self);
}
