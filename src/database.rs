use crate::utils::error::Result;

/// Outcome of the storage start-up step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStatus {
    /// No persistence backend is configured; entities live only in memory.
    NoBackend,
}

/// Placeholder start-up for persistence. Performs no I/O.
pub fn bootstrap() -> Result<BootstrapStatus> {
    tracing::info!("Database bootstrap: no persistence backend configured");
    Ok(BootstrapStatus::NoBackend)
}
