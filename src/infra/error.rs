use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("configuration error: {message}")]
    Configuration { message: String },
    #[error("telemetry error: {0}")]
    Telemetry(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export error: {message}")]
    Export { message: String },
}

impl InfraError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}
