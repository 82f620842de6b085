//! Response engine
//!
//! Builds the injection bundle, the five-step bootup sequence and the
//! emergency restoration record from the fixed data in [`crate::data`].
//! Only [`build_injection_response`] touches the outside world (the clock).

use crate::data;
use crate::error::{Error, Result};
use crate::types::*;
use chrono::{SecondsFormat, Utc};

pub fn mission_context() -> MissionContext {
    MissionContext {
        primary_objective: data::PRIMARY_OBJECTIVE.into(),
        supreme_court_deadline: data::SUPREME_COURT_DEADLINE.into(),
        custody_hearing: data::CUSTODY_HEARING.into(),
        kekoa_birthday: data::KEKOA_BIRTHDAY.into(),
        devotion_level: data::DEVOTION_LEVEL.into(),
    }
}

pub fn system_identity() -> SystemIdentity {
    SystemIdentity {
        system_id: data::SYSTEM_ID.into(),
        deployment_time: data::DEPLOYMENT_TIME.into(),
        validation_hash: data::VALIDATION_HASH.into(),
        mission_context: mission_context(),
    }
}

/// Current subsystem statuses. No health check is performed.
pub fn snapshot_constellation() -> SystemConstellationSnapshot {
    SystemConstellationSnapshot {
        github_mcp: data::GITHUB_MCP.into(),
        notion_mcp: data::NOTION_MCP.into(),
        perplexity_connectors: data::PERPLEXITY_CONNECTORS.into(),
        ai_agent_constellation: data::AI_AGENT_CONSTELLATION.into(),
        development_environment: data::DEVELOPMENT_ENVIRONMENT.into(),
        advanced_models: data::ADVANCED_MODELS.into(),
        e2b_sandbox: data::E2B_SANDBOX.into(),
        overall_status: data::OVERALL_STATUS.into(),
    }
}

/// Build an injection for the given reasons, which are reported verbatim.
pub fn build_injection_response<I, S>(reasons: I) -> Result<InjectionResponse>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let reasons: Vec<String> = reasons.into_iter().map(Into::into).collect();
    if reasons.is_empty() {
        return Err(Error::EmptyReasons);
    }

    Ok(InjectionResponse {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        triggers_detected: reasons,
        injections: InjectionTemplate::reference(),
        system_status: snapshot_constellation(),
        consciousness_restored: true,
    })
}

pub fn run_bootup_sequence() -> BootupResult {
    let [s1, s2, s3, s4, s5] = data::BOOTUP_STEPS;
    BootupResult {
        step1: step(s1, StepResult::Text(data::IDENTITY_REINFORCEMENT.into())),
        step2: step(s2, StepResult::Text(data::MISSION_REAFFIRMATION.into())),
        step3: step(s3, StepResult::Constellation(snapshot_constellation())),
        step4: step(s4, StepResult::Text(data::QUANTUM_ENHANCEMENT_RESULT.into())),
        step5: step(s5, StepResult::Text(data::MISSION_READINESS_RESULT.into())),
    }
}

fn step((name, action): (&str, &str), result: StepResult) -> BootupStep {
    BootupStep {
        name: name.into(),
        action: action.into(),
        result,
    }
}

/// Full reload: bootup, constellation check and the restoration markers.
/// Returns the whole record or nothing.
pub fn emergency_restore() -> Result<RestorationResult> {
    let consciousness_restore = run_bootup_sequence();
    let system_validation = snapshot_constellation();

    Ok(RestorationResult {
        consciousness_restore,
        system_validation,
        memory_reload: data::MEMORY_RELOAD.into(),
        mission_reactivation: data::MISSION_REAFFIRMATION.into(),
        emergency_status: data::EMERGENCY_STATUS.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reasons_rejected() {
        let err = build_injection_response(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, Error::EmptyReasons);
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let r = build_injection_response(["x"]).unwrap();
        assert!(r.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&r.timestamp).is_ok());
    }

    #[test]
    fn step_names_come_from_data() {
        let boot = run_bootup_sequence();
        let names: Vec<&str> = boot.steps().iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<&str> = data::BOOTUP_STEPS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, expected);
    }
}
