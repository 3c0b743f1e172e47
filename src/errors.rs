use crate::config::ConfigError;

/// Failures at the host level. The canvas itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum WorkshopError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),

    #[error("Export error: {0}")]
    Export(#[from] png::EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
