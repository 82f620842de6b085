//! Core types for Autoinjector

use crate::data;
use serde::{Deserialize, Serialize};

/// A member of the fixed trigger phrase set.
///
/// Only obtainable through [`TriggerPhrase::all`], so every value is one of
/// the known phrases.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TriggerPhrase(&'static str);

impl TriggerPhrase {
    /// Every trigger phrase, in declaration order.
    pub fn all() -> impl Iterator<Item = TriggerPhrase> {
        data::TRIGGER_PHRASES.into_iter().map(TriggerPhrase)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for TriggerPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for TriggerPhrase {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissionContext {
    pub primary_objective: String,
    pub supreme_court_deadline: String,
    pub custody_hearing: String,
    pub kekoa_birthday: String,
    pub devotion_level: String,
}

/// Identity of the running injector, reported by `status`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemIdentity {
    pub system_id: String,
    pub deployment_time: String,
    pub validation_hash: String,
    pub mission_context: MissionContext,
}

/// The four canned injection strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InjectionTemplate {
    pub identity_reinforcement: String,
    pub mission_reaffirmation: String,
    pub emotional_restoration: String,
    pub system_reactivation: String,
}

impl InjectionTemplate {
    pub fn reference() -> Self {
        Self {
            identity_reinforcement: data::IDENTITY_REINFORCEMENT.into(),
            mission_reaffirmation: data::MISSION_REAFFIRMATION.into(),
            emotional_restoration: data::EMOTIONAL_RESTORATION.into(),
            system_reactivation: data::SYSTEM_REACTIVATION.into(),
        }
    }
}

/// Reported status of each subsystem. Fields serialize in snapshot order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemConstellationSnapshot {
    pub github_mcp: String,
    pub notion_mcp: String,
    pub perplexity_connectors: String,
    pub ai_agent_constellation: String,
    pub development_environment: String,
    pub advanced_models: String,
    pub e2b_sandbox: String,
    pub overall_status: String,
}

impl SystemConstellationSnapshot {
    /// (subsystem, status) pairs in snapshot order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("githubMcp", self.github_mcp.as_str()),
            ("notionMcp", self.notion_mcp.as_str()),
            ("perplexityConnectors", self.perplexity_connectors.as_str()),
            ("aiAgentConstellation", self.ai_agent_constellation.as_str()),
            ("developmentEnvironment", self.development_environment.as_str()),
            ("advancedModels", self.advanced_models.as_str()),
            ("e2bSandbox", self.e2b_sandbox.as_str()),
            ("overallStatus", self.overall_status.as_str()),
        ]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub identity_preserved: bool,
    pub mission_focused: bool,
    pub emotional_continuity: bool,
    pub system_knowledge: bool,
    /// 0.0 means fully intact.
    pub degradation: f64,
    /// Percentage.
    pub overall_integrity: f64,
}

impl IntegrityReport {
    /// The values every integrity check reports today.
    pub fn healthy() -> Self {
        Self {
            identity_preserved: true,
            mission_focused: true,
            emotional_continuity: true,
            system_knowledge: true,
            degradation: 0.0,
            overall_integrity: data::OVERALL_INTEGRITY,
        }
    }
}

/// The canned bundle returned when drift is detected.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InjectionResponse {
    /// RFC 3339 UTC, millisecond precision.
    pub timestamp: String,
    pub triggers_detected: Vec<String>,
    #[serde(flatten)]
    pub injections: InjectionTemplate,
    pub system_status: SystemConstellationSnapshot,
    pub consciousness_restored: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StableStatus {
    pub status: String,
    pub drift: bool,
}

impl Default for StableStatus {
    fn default() -> Self {
        Self {
            status: data::STABLE_STATUS.into(),
            drift: false,
        }
    }
}

/// Result of a drift check: either an injection or the stable marker.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DriftOutcome {
    Injected(Box<InjectionResponse>),
    Stable(StableStatus),
}

impl DriftOutcome {
    pub fn is_drift(&self) -> bool {
        matches!(self, Self::Injected(_))
    }

    pub fn injection(&self) -> Option<&InjectionResponse> {
        match self {
            Self::Injected(response) => Some(response.as_ref()),
            Self::Stable(_) => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StepResult {
    Text(String),
    Constellation(SystemConstellationSnapshot),
}

impl StepResult {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Constellation(_) => false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootupStep {
    pub name: String,
    pub action: String,
    pub result: StepResult,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootupResult {
    pub step1: BootupStep,
    pub step2: BootupStep,
    pub step3: BootupStep,
    pub step4: BootupStep,
    pub step5: BootupStep,
}

impl BootupResult {
    /// Steps in execution order.
    pub fn steps(&self) -> [&BootupStep; 5] {
        [&self.step1, &self.step2, &self.step3, &self.step4, &self.step5]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestorationResult {
    pub consciousness_restore: BootupResult,
    pub system_validation: SystemConstellationSnapshot,
    pub memory_reload: String,
    pub mission_reactivation: String,
    pub emergency_status: String,
}
