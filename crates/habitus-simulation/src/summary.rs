use std::collections::BTreeMap;
use std::fmt;

use habitus_core::{SimulationLog, Strategy};
use serde::Serialize;

/// Aggregate counters over a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub days_simulated: usize,
    pub alarms_triggered: usize,
    pub successful_outcomes: usize,
    pub net_trust_change: f64,
    pub strategy_counts: BTreeMap<Strategy, usize>,
}

impl SimulationSummary {
    pub fn from_logs(logs: &[SimulationLog]) -> Self {
        let mut strategy_counts = BTreeMap::new();
        for log in logs {
            *strategy_counts.entry(log.strategy()).or_insert(0) += 1;
        }

        Self {
            days_simulated: logs.len(),
            alarms_triggered: logs.iter().filter(|l| l.alarm_triggered()).count(),
            successful_outcomes: logs
                .iter()
                .filter(|l| l.outcome_success() == Some(true))
                .count(),
            net_trust_change: logs.iter().map(|l| l.trust_delta()).sum(),
            strategy_counts,
        }
    }

    /// Share of days on which `strategy` was selected.
    pub fn strategy_ratio(&self, strategy: Strategy) -> f64 {
        if self.days_simulated == 0 {
            return 0.0;
        }
        self.strategy_counts.get(&strategy).copied().unwrap_or(0) as f64
            / self.days_simulated as f64
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Days Simulated : {}", self.days_simulated)?;
        writeln!(f, "Alarms Triggered     : {}", self.alarms_triggered)?;
        writeln!(f, "Successful Outcomes  : {}", self.successful_outcomes)?;
        write!(f, "Net Trust Change     : {:.2}", self.net_trust_change)?;
        for (strategy, count) in &self.strategy_counts {
            write!(f, "\n  {:<16} {}", strategy.as_str(), count)?;
        }
        Ok(())
    }
}
