// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the numeric core
// ============================================================================

mod logging;

pub use logging::init_logging;
