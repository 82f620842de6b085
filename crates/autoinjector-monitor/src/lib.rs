//! Autoinjector Monitor: runtime around the pure core
//!
//! - `config`: TOML config with defaults
//! - `integrity`: the check run on each monitor tick
//! - `observe`: event port, tracing by default
//! - `monitor`: the start/stop timer state machine
//! - `injector`: `AutoInjector`, the four public operations plus monitor control

pub mod config;
pub mod injector;
pub mod integrity;
pub mod monitor;
pub mod observe;

pub use config::{InjectorConfig, MonitoringConfig};
pub use injector::{AutoInjector, AutoInjectorBuilder, InjectorStatus};
pub use integrity::{FixedIntegrity, IntegrityCheck};
pub use monitor::{Monitor, MonitorState};
pub use observe::{InjectorEvent, InjectorObserver, NoopObserver, TracingObserver};
