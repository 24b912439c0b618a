use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Duplicate food item: {0}")]
    DuplicateItem(String),

    #[error("Food not found: {0}")]
    NotFound(String),

    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("No eligible foods: every catalog item is excluded")]
    NoEligibleItems,

    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PlannerError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlannerError::InvalidConstraint(_) => 2,
            PlannerError::NoEligibleItems => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
