use std::path::PathBuf;

use thiserror::Error;

/// Core error type for lantern operations.
#[derive(Error, Debug)]
pub enum LanternError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GraphQL error in {path}: {message}")]
    Graphql { path: PathBuf, message: String },

    #[error("Anonymous operation in {path}: every query must be named")]
    AnonymousOperation { path: PathBuf },

    #[error(
        "Malformed type stub {path}: expected 3 blank-line separated sections, found {sections}"
    )]
    MalformedStub { path: PathBuf, sections: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using LanternError.
pub type Result<T> = std::result::Result<T, LanternError>;
