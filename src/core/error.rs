// Error types for dataset loading and action parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the roster dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset must be a JSON object keyed by user id: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid dataset entry '{id}': {source}")]
    InvalidEntry {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while turning user input into actions
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActionError {
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown sort direction: {0} (expected asc or desc)")]
    UnknownDirection(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for command: {0}")]
    MissingArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        assert_eq!(
            ActionError::UnknownSortField("height".to_string()).to_string(),
            "Unknown sort field: height"
        );
        assert_eq!(
            ActionError::UnknownDirection("up".to_string()).to_string(),
            "Unknown sort direction: up (expected asc or desc)"
        );
    }

    #[test]
    fn test_invalid_entry_names_the_user() {
        let source = serde_json::from_str::<i64>("\"ten\"").unwrap_err();
        let err = DatasetError::InvalidEntry {
            id: "u7".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid dataset entry 'u7'"));
    }
}
