use std::fs;

use habitus_core::config::ApprovalConfig;
use habitus_core::errors::{EvolutionError, HabitusError};
use habitus_core::PolicyApprovalDecision;
use habitus_evolution::ApprovalService;

#[test]
fn decision_is_appended_as_one_json_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("approvals.jsonl");
    let service = ApprovalService::new(&path);

    let decision =
        PolicyApprovalDecision::new(true, "tester", Some("Looks good".to_string())).unwrap();
    service.record(&decision).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("tester"));
    assert!(content.contains("Looks good"));
    assert_eq!(content.lines().count(), 1);
    assert!(content.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(content.trim_end()).unwrap();
    for field in ["approved", "reviewer", "comment", "timestamp"] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
}

#[test]
fn log_is_append_only_and_reads_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let service = ApprovalService::new(dir.path().join("log.jsonl"));

    let first = PolicyApprovalDecision::new(true, "alice", None).unwrap();
    let second = PolicyApprovalDecision::new(false, "bob", Some("too aggressive".into())).unwrap();
    service.record(&first).unwrap();
    service.record(&second).unwrap();

    let loaded = service.load_all().unwrap();
    assert_eq!(loaded, vec![first, second]);
    assert_eq!(loaded[0].comment(), None);
    assert_eq!(service.latest().unwrap().map(|d| d.reviewer().to_string()), Some("bob".to_string()));
}

#[test]
fn missing_log_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let service = ApprovalService::new(dir.path().join("never-written.jsonl"));
    assert!(service.load_all().unwrap().is_empty());
    assert!(service.latest().unwrap().is_none());
}

#[test]
fn malformed_line_is_reported_with_its_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.jsonl");
    let service = ApprovalService::new(&path);
    service
        .record(&PolicyApprovalDecision::new(true, "alice", None).unwrap())
        .unwrap();
    fs::write(&path, format!("{}not json\n", fs::read_to_string(&path).unwrap())).unwrap();

    match service.load_all() {
        Err(EvolutionError::MalformedApprovalEntry { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected malformed entry, got {other:?}"),
    }
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let service = ApprovalService::new(dir.path());
    let decision = PolicyApprovalDecision::new(true, "alice", None).unwrap();
    assert!(matches!(
        service.record(&decision),
        Err(HabitusError::Evolution(EvolutionError::ApprovalLogWrite { .. }))
    ));
}

#[test]
fn blank_reviewer_is_rejected() {
    assert!(PolicyApprovalDecision::new(true, "  ", None).is_err());
}

#[test]
fn hand_edited_blank_reviewer_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.jsonl");
    fs::write(
        &path,
        "{\"approved\":true,\"reviewer\":\"   \",\"comment\":null,\"timestamp\":\"2024-05-01T07:00:00Z\"}\n",
    )
    .unwrap();

    match ApprovalService::new(&path).load_all() {
        Err(EvolutionError::MalformedApprovalEntry { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("reviewer"));
        }
        other => panic!("expected malformed entry, got {other:?}"),
    }
}

#[test]
fn default_path_from_config() {
    let service = ApprovalService::from_config(&ApprovalConfig::default());
    assert_eq!(service.log_path().to_str(), Some("approvals_log.jsonl"));
}
