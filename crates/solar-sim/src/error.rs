use thiserror::Error;

/// A configuration value is unusable
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("body rejected: {0}")]
    Body(#[from] nbody::SpawnError),
    #[error("agent rejected: {0}")]
    Agent(#[from] combat::SpawnError),
    #[error("timestep must be finite and non-negative, got {0}")]
    InvalidTimestep(f64),
    #[error("no agent with id {0}")]
    UnknownAgent(u32),
    #[error("no body with id {0}")]
    UnknownBody(u32),
}
