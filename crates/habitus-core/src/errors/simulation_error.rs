/// Simulation driver errors.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("simulation already completed after {days} days")]
    AlreadyCompleted { days: u32 },
}
