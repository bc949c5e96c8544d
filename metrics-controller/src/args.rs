use clap::Args;
use tokio::time::Duration;

/// Configures how often feature usage is exported.
///
/// Meant to be flattened into a controller's arguments.
#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub struct ExportArgs {
    /// Seconds between exports of feature usage metrics.
    #[clap(
        long,
        default_value = "600",
        env = "INGRESS_METRICS_EXPORT_INTERVAL_SECS"
    )]
    pub metrics_export_interval_secs: u64,

    /// Seconds to wait before the first export, giving the reconciler time to
    /// record existing resources.
    #[clap(long, default_value = "300")]
    pub metrics_initial_delay_secs: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExportArgsError {
    #[error("metrics export interval must be greater than zero")]
    ZeroInterval,
}

// === impl ExportArgs ===

impl ExportArgs {
    pub fn validate(&self) -> Result<(), ExportArgsError> {
        if self.metrics_export_interval_secs == 0 {
            return Err(ExportArgsError::ZeroInterval);
        }
        Ok(())
    }

    pub fn export_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_export_interval_secs)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_secs(self.metrics_initial_delay_secs)
    }
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            metrics_export_interval_secs: 600,
            metrics_initial_delay_secs: 300,
        }
    }
}
