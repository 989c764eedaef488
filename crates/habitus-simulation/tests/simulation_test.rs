//! End-to-end runs with the seeded synthetic user.

use chrono::{TimeZone, Utc};
use habitus_core::config::UserConfig;
use habitus_core::{HabitusConfig, Strategy};
use habitus_policy::GoverningBrain;
use habitus_simulation::{
    run_basic_simulation, run_from_config, SimulationSummary, SyntheticUser, TimeEngine,
};

#[test]
fn seven_day_run_stays_bounded() {
    let logs = run_basic_simulation(7).unwrap();
    assert_eq!(logs.len(), 7);
    for (i, log) in logs.iter().enumerate() {
        assert_eq!(log.day() as usize, i + 1);
        assert!((0.0..=1.0).contains(&log.fatigue()));
        assert!((0.0..=1.0).contains(&log.failure_risk()));
        assert!((-1.0..=1.0).contains(&log.momentum()));
        assert!(log.outcome_success().is_some());
    }
}

#[test]
fn same_seed_reproduces_the_run() {
    let epoch = Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).unwrap();
    let run = || {
        let user = SyntheticUser::with_epoch(UserConfig::default(), epoch);
        let mut engine = TimeEngine::new(GoverningBrain::new(), user, 14);
        engine.run().unwrap();
        engine.into_logs()
    };
    let a = run();
    let b = run();
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.state(), y.state());
        assert_eq!(x.signals(), y.signals());
        assert_eq!(x.strategy(), y.strategy());
        assert_eq!(x.trust_delta(), y.trust_delta());
        assert_ne!(x.explanation().decision_id(), y.explanation().decision_id());
    }
}

#[test]
fn config_controls_length() {
    let config = HabitusConfig::from_toml("[simulation]\ntotal_days = 3\n[user]\nseed = 9\n").unwrap();
    assert_eq!(run_from_config(&config).unwrap().len(), 3);
}

#[test]
fn summary_counts_match_logs() {
    let logs = run_basic_simulation(10).unwrap();
    let summary = SimulationSummary::from_logs(&logs);

    assert_eq!(summary.days_simulated, 10);
    assert_eq!(
        summary.alarms_triggered,
        logs.iter().filter(|l| l.alarm_triggered()).count()
    );
    assert!(summary.successful_outcomes <= summary.alarms_triggered);
    assert_eq!(summary.strategy_counts.values().sum::<usize>(), 10);

    let total_ratio: f64 = Strategy::ALL.iter().map(|s| summary.strategy_ratio(*s)).sum();
    assert!((total_ratio - 1.0).abs() < 1e-9);

    let text = summary.to_string();
    assert!(text.starts_with("Total Days Simulated : 10"));
}

#[test]
fn empty_summary() {
    let summary = SimulationSummary::from_logs(&[]);
    assert_eq!(summary.days_simulated, 0);
    assert_eq!(summary.net_trust_change, 0.0);
    assert_eq!(summary.strategy_ratio(Strategy::Support), 0.0);
}

#[test]
fn log_records_serialize() {
    let logs = run_basic_simulation(2).unwrap();
    let record = logs[1].to_record();
    assert_eq!(record.day, 2);
    assert_eq!(record.signal_names, logs[1].signals().names());
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["day"], 2);
    assert!(json["explanation"].as_str().unwrap().starts_with("Selected "));
}
