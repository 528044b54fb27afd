use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{count} validation issue(s); no fixture written")]
    Validation { count: usize },

    #[error("invalid submission document: {0}")]
    Input(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 2,
            Self::Input(_) | Self::Io(_) => 10,
        }
    }
}
