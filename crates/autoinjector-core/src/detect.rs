//! Trigger phrase detection
//!
//! Case-insensitive substring search over the fixed phrase set. Results
//! follow the phrase set's declaration order, not their position in the input.

use crate::error::{Error, Result};
use crate::types::TriggerPhrase;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub matched: bool,
    pub triggers: Vec<TriggerPhrase>,
}

impl Detection {
    /// Matched phrases as owned strings, for building a response.
    pub fn reasons(&self) -> Vec<String> {
        self.triggers.iter().map(|t| t.as_str().to_string()).collect()
    }
}

pub fn detect(input: &str) -> Detection {
    let lowered = input.to_lowercase();
    let triggers: Vec<TriggerPhrase> = TriggerPhrase::all()
        .filter(|phrase| lowered.contains(phrase.as_str()))
        .collect();

    Detection {
        matched: !triggers.is_empty(),
        triggers,
    }
}

/// Detect over raw bytes. Fails if the bytes are not UTF-8 text.
pub fn detect_bytes(input: &[u8]) -> Result<Detection> {
    let text = std::str::from_utf8(input)
        .map_err(|e| Error::invalid_input(format!("input is not UTF-8 text: {}", e)))?;
    Ok(detect(text))
}
