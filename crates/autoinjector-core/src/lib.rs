//! Autoinjector Core - static mission data, drift detection, and the response engine
//!
//! Everything in this crate is pure apart from the clock read that stamps an
//! injection response. Logging and timers live in `autoinjector-monitor`.

pub mod data;
pub mod detect;
pub mod error;
pub mod response;
pub mod types;

pub use detect::{detect, detect_bytes, Detection};
pub use error::{Error, Result};
pub use response::{
    build_injection_response, emergency_restore, mission_context, run_bootup_sequence,
    snapshot_constellation, system_identity,
};
pub use types::*;
