use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Values(#[from] icss_values::ValuesError),

    #[error("Message serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid --scoped argument {0:?}: expected name=value")]
    InvalidScoped(String),

    #[error("Logger already installed")]
    LoggerInstalled,
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
