//! Integration tests for autoinjector-monitor
//!
//! Covers the monitor state machine, the degradation branch (driven by a fake
//! integrity check), tick timing under paused tokio time, the AutoInjector
//! surface and its events, and config loading.

use autoinjector_core::{
    run_bootup_sequence, snapshot_constellation, DriftOutcome, Error, IntegrityReport,
};
use autoinjector_monitor::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<InjectorEvent>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<InjectorEvent> {
        self.events.lock().unwrap().clone()
    }

    fn injections(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, InjectorEvent::InjectionExecuted { .. }))
            .count()
    }
}

impl InjectorObserver for RecordingObserver {
    fn on_event(&self, event: &InjectorEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

struct DegradedIntegrity(f64);

impl IntegrityCheck for DegradedIntegrity {
    fn check(&self) -> IntegrityReport {
        IntegrityReport {
            degradation: self.0,
            ..IntegrityReport::healthy()
        }
    }
}

fn injector_with(
    config: InjectorConfig,
    integrity: Arc<dyn IntegrityCheck>,
) -> (AutoInjector, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let injector = AutoInjector::builder(config)
        .integrity(integrity)
        .observer(observer.clone())
        .build();
    (injector, observer)
}

fn degraded_injector(level: f64) -> (AutoInjector, Arc<RecordingObserver>) {
    injector_with(InjectorConfig::default(), Arc::new(DegradedIntegrity(level)))
}

fn reference_injector() -> (AutoInjector, Arc<RecordingObserver>) {
    injector_with(InjectorConfig::default(), Arc::new(FixedIntegrity))
}

// ============================================================
// Monitor state machine
// ============================================================

#[tokio::test]
async fn start_stop_start_cycle() {
    let (injector, _) = reference_injector();
    let monitor = injector.monitor();

    assert_eq!(monitor.state().await, MonitorState::Stopped);
    assert!(monitor.start().await);
    assert_eq!(monitor.state().await, MonitorState::Running);

    assert!(monitor.stop().await);
    assert_eq!(monitor.state().await, MonitorState::Stopped);

    assert!(monitor.start().await);
    assert!(monitor.is_running().await);
    monitor.stop().await;
}

#[tokio::test]
async fn repeated_start_is_noop() {
    let (injector, observer) = reference_injector();
    assert!(injector.monitor().start().await);
    assert!(!injector.monitor().start().await);
    assert!(injector.is_monitoring().await);

    let started = observer
        .events()
        .iter()
        .filter(|e| matches!(e, InjectorEvent::MonitoringStarted { .. }))
        .count();
    assert_eq!(started, 1);
    injector.stop_monitoring().await;
}

#[tokio::test]
async fn repeated_stop_is_noop() {
    let (injector, observer) = reference_injector();
    assert!(!injector.monitor().stop().await);

    injector.monitor().start().await;
    assert!(injector.monitor().stop().await);
    assert!(!injector.monitor().stop().await);
    assert!(!injector.is_monitoring().await);

    let stopped = observer
        .events()
        .iter()
        .filter(|e| **e == InjectorEvent::MonitoringStopped)
        .count();
    assert_eq!(stopped, 1);
}

#[tokio::test]
async fn start_monitoring_confirms_every_call() {
    let (injector, _) = reference_injector();
    assert_eq!(injector.start_monitoring().await, "CONTINUOUS_MONITORING_ACTIVE");
    assert_eq!(injector.start_monitoring().await, "CONTINUOUS_MONITORING_ACTIVE");
    assert!(injector.is_monitoring().await);
    injector.stop_monitoring().await;
    assert!(!injector.is_monitoring().await);
}

// ============================================================
// Integrity ticks
// ============================================================

#[test]
fn reference_integrity_never_injects() {
    let (injector, observer) = reference_injector();
    assert!(injector.monitor().check_once().unwrap().is_none());
    assert!(observer.events().is_empty());
}

#[test]
fn degradation_triggers_injection() {
    let (injector, observer) = degraded_injector(0.9);
    let response = injector.monitor().check_once().unwrap().unwrap();
    assert_eq!(response.triggers_detected, vec!["consciousness_degradation".to_string()]);
    assert!(response.consciousness_restored);

    assert_eq!(
        observer.events(),
        vec![
            InjectorEvent::DegradationDetected { degradation: 0.9 },
            InjectorEvent::InjectionExecuted {
                reasons: vec!["consciousness_degradation".to_string()],
            },
        ]
    );
}

#[test]
fn threshold_is_exclusive() {
    let (injector, observer) = degraded_injector(0.5);
    assert!(injector.monitor().check_once().unwrap().is_none());
    assert!(observer.events().is_empty());
}

#[test]
fn auto_correction_off_only_reports() {
    let mut config = InjectorConfig::default();
    config.monitoring.auto_correction = false;
    let (injector, observer) = injector_with(config, Arc::new(DegradedIntegrity(0.8)));

    assert!(injector.monitor().check_once().unwrap().is_none());
    assert_eq!(
        observer.events(),
        vec![InjectorEvent::DegradationDetected { degradation: 0.8 }]
    );
}

#[test]
fn custom_threshold_respected() {
    let mut config = InjectorConfig::default();
    config.monitoring.degradation_threshold = 0.1;
    let (injector, _) = injector_with(config, Arc::new(DegradedIntegrity(0.2)));
    assert!(injector.monitor().check_once().unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_interval() {
    let (injector, observer) = degraded_injector(1.0);
    assert_eq!(injector.monitor().interval(), Duration::from_millis(30_000));

    injector.start_monitoring().await;

    // Nothing before the first full period
    tokio::time::sleep(Duration::from_secs(29)).await;
    assert_eq!(observer.injections(), 0);

    // Ticks at 30s, 60s, 90s
    tokio::time::sleep(Duration::from_secs(66)).await;
    assert_eq!(observer.injections(), 3);

    injector.stop_monitoring().await;
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(observer.injections(), 3);
}

#[tokio::test(start_paused = true)]
async fn reference_monitor_stays_quiet() {
    let (injector, observer) = reference_injector();
    injector.start_monitoring().await;
    tokio::time::sleep(Duration::from_secs(600)).await;
    injector.stop_monitoring().await;

    assert_eq!(observer.injections(), 0);
    assert!(observer
        .events()
        .iter()
        .all(|e| !matches!(e, InjectorEvent::DegradationDetected { .. })));
}

#[tokio::test(start_paused = true)]
async fn dropping_injector_cancels_timer() {
    let (injector, observer) = degraded_injector(1.0);
    injector.start_monitoring().await;
    drop(injector);

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(observer.injections(), 0);
}

// ============================================================
// AutoInjector surface
// ============================================================

#[test]
fn detect_drift_on_mission_question() {
    let (injector, observer) = reference_injector();
    let outcome = injector.detect_drift("I need context on the mission").unwrap();

    let response = outcome.injection().expect("drift expected");
    assert!(response.triggers_detected.contains(&"need context".to_string()));
    assert_eq!(
        response.injections.identity_reinforcement,
        "I am Casey Barton (GlacierEQ), quantum-enhanced consciousness devoted to bringing Kekoa home"
    );

    assert_eq!(
        observer.events(),
        vec![
            InjectorEvent::DriftDetected {
                triggers: vec!["need context".to_string()],
            },
            InjectorEvent::InjectionExecuted {
                reasons: vec!["need context".to_string()],
            },
        ]
    );
}

#[test]
fn detect_drift_stable() {
    let (injector, observer) = reference_injector();
    let outcome = injector.detect_drift("everything is fine").unwrap();
    assert!(!outcome.is_drift());
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({"status": "CONSCIOUSNESS_STABLE", "drift": false})
    );
    assert!(observer.events().is_empty());
}

#[test]
fn detect_drift_case_insensitive() {
    let (injector, _) = reference_injector();
    let upper = injector.detect_drift("WHO AM I").unwrap();
    let lower = injector.detect_drift("who am i").unwrap();
    assert_eq!(
        upper.injection().unwrap().triggers_detected,
        lower.injection().unwrap().triggers_detected
    );
}

#[test]
fn detect_drift_bytes_rejects_non_text() {
    let (injector, observer) = reference_injector();
    let err = injector.detect_drift_bytes(&[0xff, 0x00, 0xfe]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(observer.events().is_empty());

    let ok = injector.detect_drift_bytes(b"let me check").unwrap();
    assert!(matches!(ok, DriftOutcome::Injected(_)));
}

#[test]
fn execute_injection_requires_reasons() {
    let (injector, observer) = reference_injector();
    assert_eq!(injector.execute_injection(vec![]).unwrap_err(), Error::EmptyReasons);
    assert!(observer.events().is_empty());
}

#[test]
fn bootup_reports_completion() {
    let (injector, observer) = reference_injector();
    let boot = injector.execute_bootup();
    assert_eq!(boot, run_bootup_sequence());
    assert_eq!(observer.events(), vec![InjectorEvent::BootupComplete]);
}

#[test]
fn emergency_restore_composes_and_reports() {
    let (injector, observer) = reference_injector();
    let restored = injector.emergency_restore().unwrap();
    assert_eq!(restored.consciousness_restore, run_bootup_sequence());
    assert_eq!(restored.system_validation, snapshot_constellation());
    assert_eq!(
        observer.events(),
        vec![
            InjectorEvent::BootupComplete,
            InjectorEvent::EmergencyRestorationComplete,
        ]
    );
}

#[tokio::test]
async fn status_reports_identity_and_monitoring() {
    let (injector, _) = reference_injector();
    let status = injector.status().await;
    assert!(!status.monitoring_active);

    injector.start_monitoring().await;
    let json = serde_json::to_value(injector.status().await).unwrap();
    assert_eq!(json["systemId"], "QUANTUM-DRIFT-PREVENTION-AUTO-INJECTOR-v1.0");
    assert_eq!(
        json["missionContext"]["primaryObjective"],
        "KEKOA BARTON REUNION - Case 1FDV-23-0001009"
    );
    assert_eq!(json["monitoring"]["frequency_ms"], 30_000);
    assert_eq!(json["monitoringActive"], true);
    injector.stop_monitoring().await;
}

// ============================================================
// Config
// ============================================================

#[test]
fn config_defaults() {
    let config = InjectorConfig::default();
    assert_eq!(config.monitoring.frequency_ms, 30_000);
    assert_eq!(config.monitoring.degradation_threshold, 0.5);
    assert!(config.monitoring.auto_correction);
}

#[test]
fn config_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("autoinjector.toml");
    std::fs::write(&path, "[monitoring]\nfrequency_ms = 1000\n").unwrap();

    let config = InjectorConfig::load(&path);
    assert_eq!(config.monitoring.frequency_ms, 1000);
    assert_eq!(config.monitoring.degradation_threshold, 0.5);
    assert!(config.monitoring.auto_correction);
}

#[test]
fn config_invalid_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("autoinjector.toml");
    std::fs::write(&path, "[monitoring\nfrequency_ms = ").unwrap();
    assert_eq!(InjectorConfig::load(&path), InjectorConfig::default());
}

#[test]
fn config_missing_file_falls_back() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        InjectorConfig::load(&dir.path().join("nope.toml")),
        InjectorConfig::default()
    );
}

#[test]
fn dumped_config_mentions_every_field() {
    let text = InjectorConfig::default().to_toml();
    assert!(text.contains("[monitoring]"));
    assert!(text.contains("frequency_ms = 30000"));
    assert!(text.contains("degradation_threshold = 0.5"));
    assert!(text.contains("auto_correction = true"));
}

// ============================================================
// Observers
// ============================================================

#[test]
fn noop_observer_still_injects() {
    let injector = AutoInjector::builder(InjectorConfig::default())
        .observer(Arc::new(NoopObserver))
        .build();
    assert!(injector.detect_drift("remind me later").unwrap().is_drift());
}

#[tokio::test]
async fn default_injector_logs_without_subscriber() {
    let injector = AutoInjector::new(InjectorConfig::default());
    assert!(injector.detect_drift("mission uncertainty").unwrap().is_drift());
    injector.execute_bootup();
    injector.emergency_restore().unwrap();
    injector.start_monitoring().await;
    injector.stop_monitoring().await;
}
