// ============================================================================
// Logging Setup
// Installs a fmt subscriber for the crate's tracing events
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber that records events up to `level`.
///
/// Rejected conversions are reported at `TRACE`, so pass `Level::TRACE` to
/// see why a digit run failed.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    tracing::debug!(%level, "logging initialised");
    Ok(())
}
