use habitus_core::errors::*;

#[test]
fn validation_error_carries_signal_name() {
    let err = ValidationError::ConfidenceOutOfRange {
        name: "sleep_debt".into(),
        confidence: 1.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("sleep_debt"));
    assert!(msg.contains("1.5"));
}

#[test]
fn validation_error_converts_to_habitus_error() {
    let err: HabitusError = ValidationError::EmptyCapability.into();
    assert!(matches!(err, HabitusError::Validation(_)));
    assert!(err.to_string().contains("allowed_capabilities"));
}

#[test]
fn evolution_error_converts_to_habitus_error() {
    let err: HabitusError = EvolutionError::EmptyLogWindow.into();
    assert!(err.to_string().contains("non-empty log window"));
}

#[test]
fn simulation_error_carries_days() {
    let err: HabitusError = SimulationError::AlreadyCompleted { days: 7 }.into();
    assert!(err.to_string().contains('7'));
}

#[test]
fn approval_write_error_carries_path() {
    let err = EvolutionError::ApprovalLogWrite {
        path: "/tmp/approvals.jsonl".into(),
        reason: "permission denied".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/tmp/approvals.jsonl"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn json_error_converts_to_serialization_error() {
    fn parse(raw: &str) -> HabitusResult<u32> {
        Ok(serde_json::from_str(raw)?)
    }
    let err = parse("not json").unwrap_err();
    assert!(matches!(err, HabitusError::SerializationError(_)));
    assert!(err.to_string().starts_with("serialization error"));
}
