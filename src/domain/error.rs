use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("documentation topic `{slug}` not found")]
    UnknownTopic { slug: String },
    #[error("domain validation failed: {message}")]
    Validation { message: String },
    #[error("domain invariant violated: {message}")]
    Invariant { message: String },
}

impl DomainError {
    pub fn unknown_topic(slug: impl Into<String>) -> Self {
        Self::UnknownTopic { slug: slug.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}
