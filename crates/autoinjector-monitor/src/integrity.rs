//! Integrity checks run on each monitor tick.

use autoinjector_core::IntegrityReport;

/// Source of integrity reports for the monitor.
pub trait IntegrityCheck: Send + Sync {
    fn check(&self) -> IntegrityReport;
}

/// Always reports full health. No conversational state is analysed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIntegrity;

impl IntegrityCheck for FixedIntegrity {
    fn check(&self) -> IntegrityReport {
        IntegrityReport::healthy()
    }
}
