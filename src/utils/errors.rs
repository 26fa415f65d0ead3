use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("Pressure field requires at least one grid cell")]
    EmptyGrid,

    #[error("Invalid flight transition: {0}")]
    Flight(#[from] FlightError),
}

/// Rejected flight state transitions. These are reported to the caller and
/// otherwise ignored; the flight is never restarted or torn down by them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightError {
    #[error("plane has already been launched")]
    AlreadyLaunched,

    #[error("plane has landed; reset before launching again")]
    FlightEnded,

    #[error("plane hasn't been launched yet")]
    NotLaunched,

    #[error("landing reported while the plane is not in flight")]
    NotInFlight,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid simulation configuration: {0}")]
    ValidationError(String),
}
