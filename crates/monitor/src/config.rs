/// Monitor configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Simulator tick cadence in milliseconds (default: `2000`).
    pub tick_interval_ms: u64,
}

impl MonitorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default |
    /// |--------------------|---------|
    /// | `TICK_INTERVAL_MS` | `2000`  |
    pub fn from_env() -> Self {
        let tick_interval_ms: u64 = std::env::var("TICK_INTERVAL_MS")
            .unwrap_or_else(|_| "2000".into())
            .parse()
            .expect("TICK_INTERVAL_MS must be a valid u64");

        Self { tick_interval_ms }
    }
}
