use thiserror::Error;

use crate::models::participant::ValidationError;

#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Insufficient participants: need at least 2, found {found}")]
    InsufficientParticipants { found: usize },

    #[error("Invalid participant '{id}': {source}")]
    InvalidParticipant {
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Candidate count must be between 1 and {max}, got {requested}")]
    InvalidCandidateCount { requested: usize, max: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Encoding a response failed; the request itself was fine
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl BalanceError {
    /// Caller mistakes that retrying with the same input cannot fix.
    pub fn is_usage_error(&self) -> bool {
        match self {
            BalanceError::InsufficientParticipants { .. } => true,
            BalanceError::InvalidParticipant { .. } => true,
            BalanceError::InvalidCandidateCount { .. } => true,
            BalanceError::UnsupportedSchema { .. } => true,
            BalanceError::InvalidConfig(_) => true,
            BalanceError::ConfigIo { .. } => false,
            BalanceError::Parse(_) => true,
            BalanceError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_participants_message() {
        let err = BalanceError::InsufficientParticipants { found: 1 };
        assert_eq!(err.to_string(), "Insufficient participants: need at least 2, found 1");
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_invalid_participant_wraps_validation_error() {
        let err = BalanceError::InvalidParticipant {
            id: "p7".to_string(),
            source: ValidationError::RatingOutOfRange(6.5),
        };
        let msg = err.to_string();
        assert!(msg.contains("p7"));
        assert!(msg.contains("6.5"));
    }

    #[test]
    fn test_config_io_is_not_usage_error() {
        let err = BalanceError::ConfigIo {
            path: "missing.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_parse_and_emit_errors_classified_apart() {
        let json_err = || serde_json::from_str::<u8>("x").unwrap_err();

        let parse: BalanceError = json_err().into();
        assert!(matches!(parse, BalanceError::Parse(_)));
        assert!(parse.is_usage_error());

        let emit = BalanceError::Serialization(json_err());
        assert!(!emit.is_usage_error());
    }

    #[test]
    fn test_candidate_count_message_names_limit() {
        let err = BalanceError::InvalidCandidateCount { requested: 0, max: 1000 };
        assert_eq!(err.to_string(), "Candidate count must be between 1 and 1000, got 0");
        assert!(err.is_usage_error());
    }
}
