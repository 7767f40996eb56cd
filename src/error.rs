use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitPlanError {
    #[error("Invalid input: {0}")]
    InvalidInputKind(String),

    #[error("{0}")]
    Parse(String),

    #[error("Invalid membership function: {0}")]
    InvalidMembership(String),

    #[error("Unknown term: {0}")]
    UnknownTerm(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("No rule activated: {0}")]
    NoActivation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FitPlanError>;
