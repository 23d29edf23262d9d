use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Recognizer is not configured")]
    NotConfigured,

    #[error("Recognizer is already configured with a different sequence or capabilities")]
    AlreadyConfigured,

    #[error("Unknown button: {0}")]
    UnknownButton(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error comes from driving the recognizer in the wrong order
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Error::NotConfigured | Error::AlreadyConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_lifecycle() {
        assert!(Error::NotConfigured.is_lifecycle());
        assert!(Error::AlreadyConfigured.is_lifecycle());
        assert!(!Error::InvalidConfiguration("empty".to_string()).is_lifecycle());
        assert!(!Error::UnknownButton("TURBO".to_string()).is_lifecycle());
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownButton("TURBO".to_string());
        assert_eq!(err.to_string(), "Unknown button: TURBO");
    }
}
