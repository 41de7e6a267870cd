use thiserror::Error;

#[derive(Error, Debug)]
pub enum BehaviorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with BehaviorError
pub type Result<T> = std::result::Result<T, BehaviorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BehaviorError = io_err.into();
        assert!(matches!(err, BehaviorError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BehaviorError = json_err.into();
        assert!(matches!(err, BehaviorError::Json(_)));
    }
}
