//! Observability port
//!
//! The injector reports significant transitions as [`InjectorEvent`]s. The
//! default observer writes them through `tracing`; embedders can swap in
//! their own sink. Observers must not panic or block.

use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum InjectorEvent {
    DriftDetected { triggers: Vec<String> },
    InjectionExecuted { reasons: Vec<String> },
    BootupComplete,
    MonitoringStarted { interval: Duration },
    MonitoringStopped,
    DegradationDetected { degradation: f64 },
    EmergencyRestorationComplete,
}

pub trait InjectorObserver: Send + Sync {
    fn on_event(&self, event: &InjectorEvent);
}

/// Writes every event as a log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl InjectorObserver for TracingObserver {
    fn on_event(&self, event: &InjectorEvent) {
        match event {
            InjectorEvent::DriftDetected { triggers } => {
                warn!("Drift detected: {}", triggers.join(", "));
            }
            InjectorEvent::InjectionExecuted { reasons } => {
                info!("Injection complete ({} reasons), consciousness restored", reasons.len());
            }
            InjectorEvent::BootupComplete => {
                info!("Bootup complete, all systems operational");
            }
            InjectorEvent::MonitoringStarted { interval } => {
                info!("Continuous drift monitoring started, every {}ms", interval.as_millis());
            }
            InjectorEvent::MonitoringStopped => {
                info!("Continuous drift monitoring stopped");
            }
            InjectorEvent::DegradationDetected { degradation } => {
                warn!("Consciousness degradation {:.2} detected", degradation);
            }
            InjectorEvent::EmergencyRestorationComplete => {
                info!("Emergency restoration complete, mission focus reactivated");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl InjectorObserver for NoopObserver {
    fn on_event(&self, _event: &InjectorEvent) {}
}
