mod evolution_error;
mod simulation_error;
mod validation_error;

pub use evolution_error::EvolutionError;
pub use simulation_error::SimulationError;
pub use validation_error::ValidationError;

/// Top-level error for every Habitus crate.
#[derive(Debug, thiserror::Error)]
pub enum HabitusError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("evolution error: {0}")]
    Evolution(#[from] EvolutionError),

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type HabitusResult<T> = Result<T, HabitusError>;
