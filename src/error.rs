use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatlensError {
    #[error("Nothing to analyze: none of {lines} input lines matched a known chat format")]
    NothingParsed { lines: usize },

    #[error("Model artifact not found: {path} (train a model and export it to this path first)")]
    MissingModel { path: String },

    #[error("Invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Config(#[from] toml::de::Error),
}

impl ChatlensError {
    /// Setup/configuration failures, as opposed to problems with the chat input
    pub fn is_resource_error(&self) -> bool {
        matches!(self, Self::MissingModel { .. } | Self::InvalidModel(_))
    }

    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NothingParsed { .. } => 2,
            Self::MissingModel { .. } | Self::InvalidModel(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatlensError>;
