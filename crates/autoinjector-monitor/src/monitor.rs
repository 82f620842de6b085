//! Continuous integrity monitoring
//!
//! A [`Monitor`] owns at most one background task. The task ticks at a fixed
//! interval, runs the integrity check, and injects when degradation exceeds
//! the configured threshold. Ticks run to completion one after another.
//!
//! `start` and `stop` are idempotent: starting a running monitor or stopping
//! a stopped one does nothing. Both take the timer lock, so concurrent calls
//! cannot double-schedule or lose a cancel.

use crate::config::MonitoringConfig;
use crate::integrity::IntegrityCheck;
use crate::observe::{InjectorEvent, InjectorObserver};
use autoinjector_core::{build_injection_response, data, InjectionResponse, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Stopped,
    Running,
}

/// Everything a tick needs, shared between the monitor and its task.
struct Checker {
    integrity: Arc<dyn IntegrityCheck>,
    observer: Arc<dyn InjectorObserver>,
    threshold: f64,
    auto_correction: bool,
}

impl Checker {
    fn tick(&self) -> Result<Option<InjectionResponse>> {
        let report = self.integrity.check();
        debug!(
            "Integrity check: degradation {:.2}, overall {:.1}%",
            report.degradation, report.overall_integrity
        );
        if report.degradation <= self.threshold {
            return Ok(None);
        }

        self.observer.on_event(&InjectorEvent::DegradationDetected {
            degradation: report.degradation,
        });
        if !self.auto_correction {
            return Ok(None);
        }

        let response = build_injection_response([data::DEGRADATION_REASON])?;
        self.observer.on_event(&InjectorEvent::InjectionExecuted {
            reasons: response.triggers_detected.clone(),
        });
        Ok(Some(response))
    }
}

struct TimerHandle {
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

pub struct Monitor {
    interval: Duration,
    checker: Arc<Checker>,
    timer: Mutex<Option<TimerHandle>>,
}

impl Monitor {
    pub fn new(
        config: &MonitoringConfig,
        integrity: Arc<dyn IntegrityCheck>,
        observer: Arc<dyn InjectorObserver>,
    ) -> Self {
        Self {
            interval: config.interval(),
            checker: Arc::new(Checker {
                integrity,
                observer,
                threshold: config.degradation_threshold,
                auto_correction: config.auto_correction,
            }),
            timer: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking. Returns `false` if a timer was already running.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(&self) -> bool {
        let mut timer = self.timer.lock().await;
        if timer.as_ref().is_some_and(|t| !t.join.is_finished()) {
            debug!("Monitor already running");
            return false;
        }

        let cancel = CancellationToken::new();
        let join = tokio::spawn(run_ticks(
            self.checker.clone(),
            self.interval,
            cancel.clone(),
        ));
        *timer = Some(TimerHandle { cancel, join });

        self.checker.observer.on_event(&InjectorEvent::MonitoringStarted {
            interval: self.interval,
        });
        true
    }

    /// Cancel the timer and wait for an in-flight tick to finish.
    /// Returns `false` if nothing was running.
    pub async fn stop(&self) -> bool {
        let mut timer = self.timer.lock().await;
        let Some(handle) = timer.take() else {
            return false;
        };

        handle.cancel.cancel();
        if let Err(e) = handle.join.await {
            warn!("Monitor task ended abnormally: {}", e);
        }

        self.checker.observer.on_event(&InjectorEvent::MonitoringStopped);
        true
    }

    pub async fn state(&self) -> MonitorState {
        match self.timer.lock().await.as_ref() {
            Some(t) if !t.join.is_finished() => MonitorState::Running,
            _ => MonitorState::Stopped,
        }
    }

    pub async fn is_running(&self) -> bool {
        self.state().await == MonitorState::Running
    }

    /// Run one integrity check now, outside the timer.
    pub fn check_once(&self) -> Result<Option<InjectionResponse>> {
        self.checker.tick()
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.get_mut().take() {
            handle.cancel.cancel();
        }
    }
}

async fn run_ticks(checker: Arc<Checker>, period: Duration, cancel: CancellationToken) {
    // First check one full period after start
    let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticks.tick() => {
                if let Err(e) = checker.tick() {
                    warn!("Integrity tick failed: {}", e);
                }
            }
        }
    }
    debug!("Monitor task exiting");
}
