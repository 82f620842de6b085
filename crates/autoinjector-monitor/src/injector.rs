//! AutoInjector: the public surface
//!
//! Wraps the pure core operations with event reporting and owns the
//! monitor. Construction has no side effects; the caller decides when to
//! start monitoring.

use crate::config::{InjectorConfig, MonitoringConfig};
use crate::integrity::{FixedIntegrity, IntegrityCheck};
use crate::monitor::Monitor;
use crate::observe::{InjectorEvent, InjectorObserver, TracingObserver};
use autoinjector_core::{
    build_injection_response, data, detect, detect_bytes, emergency_restore, run_bootup_sequence,
    system_identity, BootupResult, Detection, DriftOutcome, InjectionResponse, RestorationResult,
    Result, StableStatus, SystemIdentity,
};
use serde::Serialize;
use std::sync::Arc;

/// Snapshot of the injector for the `status` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectorStatus {
    #[serde(flatten)]
    pub identity: SystemIdentity,
    pub monitoring: MonitoringConfig,
    pub monitoring_active: bool,
}

pub struct AutoInjector {
    config: InjectorConfig,
    observer: Arc<dyn InjectorObserver>,
    monitor: Monitor,
}

pub struct AutoInjectorBuilder {
    config: InjectorConfig,
    integrity: Arc<dyn IntegrityCheck>,
    observer: Arc<dyn InjectorObserver>,
}

impl AutoInjectorBuilder {
    pub fn integrity(mut self, integrity: Arc<dyn IntegrityCheck>) -> Self {
        self.integrity = integrity;
        self
    }

    pub fn observer(mut self, observer: Arc<dyn InjectorObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn build(self) -> AutoInjector {
        let monitor = Monitor::new(&self.config.monitoring, self.integrity, self.observer.clone());
        AutoInjector {
            config: self.config,
            observer: self.observer,
            monitor,
        }
    }
}

impl AutoInjector {
    /// Injector with the fixed integrity check and tracing output.
    pub fn new(config: InjectorConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: InjectorConfig) -> AutoInjectorBuilder {
        AutoInjectorBuilder {
            config,
            integrity: Arc::new(FixedIntegrity),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// Scan text for trigger phrases; inject if any are present.
    pub fn detect_drift(&self, input: &str) -> Result<DriftOutcome> {
        self.respond(detect(input))
    }

    /// Like [`detect_drift`](Self::detect_drift) for raw bytes, which must be UTF-8.
    pub fn detect_drift_bytes(&self, input: &[u8]) -> Result<DriftOutcome> {
        self.respond(detect_bytes(input)?)
    }

    fn respond(&self, detection: Detection) -> Result<DriftOutcome> {
        if !detection.matched {
            return Ok(DriftOutcome::Stable(StableStatus::default()));
        }

        let reasons = detection.reasons();
        self.observer.on_event(&InjectorEvent::DriftDetected {
            triggers: reasons.clone(),
        });
        let response = self.execute_injection(reasons)?;
        Ok(DriftOutcome::Injected(Box::new(response)))
    }

    /// Build an injection for arbitrary reasons. Fails if `reasons` is empty.
    pub fn execute_injection(&self, reasons: Vec<String>) -> Result<InjectionResponse> {
        let response = build_injection_response(reasons)?;
        self.observer.on_event(&InjectorEvent::InjectionExecuted {
            reasons: response.triggers_detected.clone(),
        });
        Ok(response)
    }

    pub fn execute_bootup(&self) -> BootupResult {
        let result = run_bootup_sequence();
        self.observer.on_event(&InjectorEvent::BootupComplete);
        result
    }

    /// Start background monitoring. Safe to call repeatedly.
    pub async fn start_monitoring(&self) -> &'static str {
        self.monitor.start().await;
        data::MONITORING_ACTIVE
    }

    pub async fn stop_monitoring(&self) {
        self.monitor.stop().await;
    }

    pub async fn is_monitoring(&self) -> bool {
        self.monitor.is_running().await
    }

    pub fn emergency_restore(&self) -> Result<RestorationResult> {
        let restored = emergency_restore()?;
        self.observer.on_event(&InjectorEvent::BootupComplete);
        self.observer.on_event(&InjectorEvent::EmergencyRestorationComplete);
        Ok(restored)
    }

    pub async fn status(&self) -> InjectorStatus {
        InjectorStatus {
            identity: system_identity(),
            monitoring: self.config.monitoring.clone(),
            monitoring_active: self.is_monitoring().await,
        }
    }
}
